//! Column-major two-dimensional grid.

use std::fmt;
use std::iter::Flatten;
use std::ops::{Index, IndexMut, Range};
use std::{slice, vec};

use serde::{Deserialize, Serialize};

use crate::{Axis, Dimensions, GridError, combine};

/// Allocate a `rows × cols` grid with every cell set to `E::default()`.
///
/// For cells that start out as "no value", use `Grid<Option<T>>`.
///
/// ```
/// use tessera_grid::create_grid;
///
/// let grid = create_grid::<Option<String>>(3, 2);
/// assert_eq!(grid.iter_columns().count(), 2);
/// assert!(grid.iter_columns().all(|column| column.len() == 3));
/// assert!(grid.iter().all(Option::is_none));
/// ```
#[must_use]
pub fn create_grid<E: Default>(rows: usize, cols: usize) -> Grid<E> {
    Grid::new(rows, cols)
}

/// A rectangular `rows × cols` grid of `E`, addressed by `(row, col)`.
///
/// # Invariants
///
/// - Storage is `cols` columns, each holding exactly `rows` cells
/// - The shape is fixed at construction; `drop_*` returns a new grid
///
/// # Serde
///
/// Serializes as `{ "dimensions": { "rows", "cols" }, "columns": [[..], ..] }`.
/// Deserialization re-checks that the columns match the dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "GridWire<E>")]
#[serde(bound(deserialize = "E: Deserialize<'de>"))]
pub struct Grid<E> {
    dimensions: Dimensions,
    columns: Vec<Vec<E>>,
}

impl<E> Grid<E> {
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self
    where
        E: Default,
    {
        Self::with_dimensions(Dimensions::new(rows, cols))
    }

    #[must_use]
    pub fn with_dimensions(dimensions: Dimensions) -> Self
    where
        E: Default,
    {
        Self::build(dimensions, |_, _| E::default())
    }

    /// Like [`Grid::new`], but rejects negative counts before allocating.
    pub fn try_new(rows: i64, cols: i64) -> Result<Self, GridError>
    where
        E: Default,
    {
        Ok(Self::with_dimensions(Dimensions::try_new(rows, cols)?))
    }

    #[must_use]
    pub fn filled(rows: usize, cols: usize, value: E) -> Self
    where
        E: Clone,
    {
        Self::build(Dimensions::new(rows, cols), |_, _| value.clone())
    }

    /// Build a grid by calling `cell(row, col)` once per position.
    pub fn from_fn<G>(rows: usize, cols: usize, cell: G) -> Self
    where
        G: FnMut(usize, usize) -> E,
    {
        Self::build(Dimensions::new(rows, cols), cell)
    }

    /// Build a grid from its columns. Every column must have the length of the first.
    pub fn from_columns<I, C>(columns: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = C>,
        C: IntoIterator<Item = E>,
    {
        let columns: Vec<Vec<E>> = columns
            .into_iter()
            .map(|column| column.into_iter().collect())
            .collect();
        let rows = columns.first().map(Vec::len).ok_or(GridError::Empty)?;
        let dimensions = Dimensions::new(rows, columns.len());
        check_columns(dimensions, &columns)?;
        Ok(Self {
            dimensions,
            columns,
        })
    }

    /// Build a grid from its rows. Every row must have the length of the first.
    pub fn from_rows<I, R>(rows: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = E>,
    {
        let rows: Vec<Vec<E>> = rows
            .into_iter()
            .map(|row| row.into_iter().collect())
            .collect();
        let cols = rows.first().map(Vec::len).ok_or(GridError::Empty)?;
        for (index, row) in rows.iter().enumerate() {
            if row.len() != cols {
                tracing::debug!(index, expected = cols, actual = row.len(), "Rejected ragged row");
                return Err(GridError::Ragged {
                    index,
                    expected: cols,
                    actual: row.len(),
                });
            }
        }

        let dimensions = Dimensions::new(rows.len(), cols);
        let mut columns: Vec<Vec<E>> = (0..cols)
            .map(|_| Vec::with_capacity(dimensions.rows()))
            .collect();
        for row in rows {
            for (column, cell) in columns.iter_mut().zip(row) {
                column.push(cell);
            }
        }
        Ok(Self {
            dimensions,
            columns,
        })
    }

    /// Build a grid from values listed row by row.
    ///
    /// ```
    /// use tessera_grid::Grid;
    ///
    /// // [[A, B],
    /// //  [C, D]]
    /// let grid = Grid::from_row_major(2, 2, vec!["A", "B", "C", "D"]).unwrap();
    /// assert_eq!(grid[(0, 1)], "B");
    /// assert_eq!(grid[(1, 0)], "C");
    /// ```
    pub fn from_row_major(rows: usize, cols: usize, values: Vec<E>) -> Result<Self, GridError> {
        let dimensions = Dimensions::new(rows, cols);
        let expected = dimensions.cell_count();
        if values.len() != expected {
            tracing::debug!(expected, actual = values.len(), "Rejected row-major values");
            return Err(GridError::ShapeMismatch {
                expected,
                actual: values.len(),
            });
        }

        let mut columns: Vec<Vec<E>> = (0..cols).map(|_| Vec::with_capacity(rows)).collect();
        for (i, cell) in values.into_iter().enumerate() {
            columns[i % cols].push(cell);
        }
        Ok(Self {
            dimensions,
            columns,
        })
    }

    fn build<G>(dimensions: Dimensions, mut cell: G) -> Self
    where
        G: FnMut(usize, usize) -> E,
    {
        tracing::trace!(
            rows = dimensions.rows(),
            cols = dimensions.cols(),
            "Allocating grid"
        );
        let rows = dimensions.rows();
        let columns = (0..dimensions.cols())
            .map(|col| (0..rows).map(|row| cell(row, col)).collect())
            .collect();
        Self {
            dimensions,
            columns,
        }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.dimensions.rows()
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.dimensions.cols()
    }

    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dimensions.cell_count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty()
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&E> {
        self.columns.get(col)?.get(row)
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut E> {
        self.columns.get_mut(col)?.get_mut(row)
    }

    #[must_use]
    pub fn column(&self, col: usize) -> Option<&[E]> {
        self.columns.get(col).map(Vec::as_slice)
    }

    pub fn iter_columns(&self) -> impl ExactSizeIterator<Item = &[E]> {
        self.columns.iter().map(Vec::as_slice)
    }

    /// Cells of one row, left to right.
    pub fn row(&self, row: usize) -> Option<impl ExactSizeIterator<Item = &E>> {
        (row < self.rows()).then(|| self.columns.iter().map(move |column| &column[row]))
    }

    pub fn iter_rows(&self) -> impl ExactSizeIterator<Item = impl ExactSizeIterator<Item = &E>> {
        (0..self.rows()).map(move |row| self.columns.iter().map(move |column| &column[row]))
    }

    /// All cells in storage order: column by column, top to bottom.
    pub fn iter(&self) -> Flatten<slice::Iter<'_, Vec<E>>> {
        self.columns.iter().flatten()
    }

    pub fn iter_mut(&mut self) -> Flatten<slice::IterMut<'_, Vec<E>>> {
        self.columns.iter_mut().flatten()
    }

    /// Every cell with its position as `(row, col, cell)`, in storage order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &E)> {
        combine(0..self.cols(), 0..self.rows())
            .map(move |(col, row)| (row, col, &self.columns[col][row]))
    }

    /// Overwrite every cell with `value`.
    pub fn fill(&mut self, value: E) -> &mut Self
    where
        E: Clone,
    {
        for cell in self.iter_mut() {
            *cell = value.clone();
        }
        self
    }

    /// A grid of the same shape with `f` applied to every cell.
    pub fn map<U, M>(&self, mut f: M) -> Grid<U>
    where
        M: FnMut(&E) -> U,
    {
        Grid {
            dimensions: self.dimensions,
            columns: self
                .columns
                .iter()
                .map(|column| column.iter().map(&mut f).collect())
                .collect(),
        }
    }

    /// Copy without the first `n` columns.
    pub fn drop_left(&self, n: usize) -> Result<Self, GridError>
    where
        E: Clone,
    {
        let kept = self.kept_after_drop(Axis::Cols, n)?;
        Ok(self.sub_grid(0..self.rows(), n..n + kept))
    }

    /// Copy without the last `n` columns.
    pub fn drop_right(&self, n: usize) -> Result<Self, GridError>
    where
        E: Clone,
    {
        let kept = self.kept_after_drop(Axis::Cols, n)?;
        Ok(self.sub_grid(0..self.rows(), 0..kept))
    }

    /// Copy without the first `n` rows.
    pub fn drop_top(&self, n: usize) -> Result<Self, GridError>
    where
        E: Clone,
    {
        let kept = self.kept_after_drop(Axis::Rows, n)?;
        Ok(self.sub_grid(n..n + kept, 0..self.cols()))
    }

    /// Copy without the last `n` rows.
    pub fn drop_bottom(&self, n: usize) -> Result<Self, GridError>
    where
        E: Clone,
    {
        let kept = self.kept_after_drop(Axis::Rows, n)?;
        Ok(self.sub_grid(0..kept, 0..self.cols()))
    }

    fn kept_after_drop(&self, axis: Axis, n: usize) -> Result<usize, GridError> {
        let available = self.dimensions.along(axis);
        available
            .checked_sub(n)
            .ok_or(GridError::DropOutOfRange {
                axis,
                requested: n,
                available,
            })
    }

    fn sub_grid(&self, rows: Range<usize>, cols: Range<usize>) -> Self
    where
        E: Clone,
    {
        let dimensions = Dimensions::new(rows.len(), cols.len());
        let columns = self.columns[cols]
            .iter()
            .map(|column| column[rows.clone()].to_vec())
            .collect();
        Self {
            dimensions,
            columns,
        }
    }
}

fn check_columns<E>(dimensions: Dimensions, columns: &[Vec<E>]) -> Result<(), GridError> {
    if columns.len() != dimensions.cols() {
        return Err(GridError::ShapeMismatch {
            expected: dimensions.cols(),
            actual: columns.len(),
        });
    }
    for (index, column) in columns.iter().enumerate() {
        if column.len() != dimensions.rows() {
            tracing::debug!(
                index,
                expected = dimensions.rows(),
                actual = column.len(),
                "Rejected ragged column"
            );
            return Err(GridError::Ragged {
                index,
                expected: dimensions.rows(),
                actual: column.len(),
            });
        }
    }
    Ok(())
}

impl<E> Index<(usize, usize)> for Grid<E> {
    type Output = E;

    /// Panics when `(row, col)` is out of range, like slice indexing.
    fn index(&self, (row, col): (usize, usize)) -> &E {
        &self.columns[col][row]
    }
}

impl<E> IndexMut<(usize, usize)> for Grid<E> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut E {
        &mut self.columns[col][row]
    }
}

impl<'a, E> IntoIterator for &'a Grid<E> {
    type Item = &'a E;
    type IntoIter = Flatten<slice::Iter<'a, Vec<E>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, E> IntoIterator for &'a mut Grid<E> {
    type Item = &'a mut E;
    type IntoIter = Flatten<slice::IterMut<'a, Vec<E>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<E> IntoIterator for Grid<E> {
    type Item = E;
    type IntoIter = Flatten<vec::IntoIter<Vec<E>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.into_iter().flatten()
    }
}

/// Rows in order: `[[r0c0, r0c1], [r1c0, r1c1]]`.
impl<E: fmt::Display> fmt::Display for Grid<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str("[")?;
            for (j, cell) in row.enumerate() {
                if j > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{cell}")?;
            }
            f.write_str("]")?;
        }
        f.write_str("]")
    }
}

#[derive(Deserialize)]
struct GridWire<E> {
    dimensions: Dimensions,
    columns: Vec<Vec<E>>,
}

impl<E> TryFrom<GridWire<E>> for Grid<E> {
    type Error = GridError;

    fn try_from(wire: GridWire<E>) -> Result<Self, Self::Error> {
        check_columns(wire.dimensions, &wire.columns)?;
        Ok(Self {
            dimensions: wire.dimensions,
            columns: wire.columns,
        })
    }
}
