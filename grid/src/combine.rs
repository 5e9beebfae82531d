//! Cartesian iteration over two sequences.

use std::iter::FusedIterator;

/// Pair every item of `outer` with every item of `inner`, outer-major.
///
/// `inner` is cloned to restart it for each outer item.
///
/// ```
/// use tessera_grid::combine;
///
/// let pairs: Vec<_> = combine(0..2, ['a', 'b']).collect();
/// assert_eq!(pairs, [(0, 'a'), (0, 'b'), (1, 'a'), (1, 'b')]);
/// ```
pub fn combine<A, B>(outer: A, inner: B) -> Combined<A::IntoIter, B::IntoIter>
where
    A: IntoIterator,
    A::Item: Clone,
    B: IntoIterator,
    B::IntoIter: Clone,
{
    let inner = inner.into_iter();
    Combined {
        outer: outer.into_iter(),
        head: None,
        restart: inner.clone(),
        inner,
    }
}

/// Iterator returned by [`combine`].
#[derive(Debug, Clone)]
pub struct Combined<A: Iterator, B> {
    outer: A,
    head: Option<A::Item>,
    restart: B,
    inner: B,
}

impl<A, B> Iterator for Combined<A, B>
where
    A: Iterator,
    A::Item: Clone,
    B: Iterator + Clone,
{
    type Item = (A::Item, B::Item);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(head) = &self.head
                && let Some(item) = self.inner.next()
            {
                return Some((head.clone(), item));
            }
            // Current outer item exhausted (or not started): advance and rewind.
            self.head = Some(self.outer.next()?);
            self.inner = self.restart.clone();
        }
    }
}

impl<A, B> FusedIterator for Combined<A, B>
where
    A: FusedIterator,
    A::Item: Clone,
    B: FusedIterator + Clone,
{
}
