mod config;
mod grid;
mod outcome;
mod scenario;
