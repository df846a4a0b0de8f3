// # aoc2025: Advent of Code 2025 solutions
//
// Every puzzle has its own binary under `src/bin`; they all read stdin (or a
// path given on the command line) and print `pt1 = ..` / `pt2 = ..`.
//
// The library holds the per-day logic so it can be tested, plus the few
// pieces that are shared: a BFS over anything implementing `graph::Graph`,
// grid adapters for maze-like inputs, and a two-phase simplex solver.

/// A trait for conveniently updating a value to its minimum or maximum.
pub trait SetMinMax {
    /// If `v` is less than `self`, updates `self` to `v` and returns `true`.
    /// Otherwise, returns `false`.
    fn setmin(&mut self, v: Self) -> bool;
    /// If `v` is greater than `self`, updates `self` to `v` and returns `true`.
    /// Otherwise, returns `false`.
    fn setmax(&mut self, v: Self) -> bool;
}
impl<T> SetMinMax for T
where
    T: PartialOrd,
{
    fn setmin(&mut self, v: T) -> bool {
        *self > v && {
            *self = v;
            true
        }
    }
    fn setmax(&mut self, v: T) -> bool {
        *self < v && {
            *self = v;
            true
        }
    }
}

/// A macro for convenient initialization of vectors, including nested vectors
/// for multi-dimensional arrays.
///
/// # Examples
///
/// ```
/// use aoc2025::mat;
/// // A simple vector
/// let v1 = mat![1, 2, 3];
///
/// // A 2x3 matrix initialized with zeros
/// let m1 = mat![0; 2; 3];
/// assert_eq!(m1, vec![vec![0, 0, 0], vec![0, 0, 0]]);
/// ```
#[macro_export]
macro_rules! mat {
    ($($e:expr),*) => { vec![$($e),*] };
    ($($e:expr,)*) => { vec![$($e),*] };
    ($e:expr; $d:expr) => { vec![$e; $d] };
    ($e:expr; $d:expr $(; $ds:expr)+) => { vec![mat![$e $(; $ds)*]; $d] };
}

/// Breadth-first search over abstract adjacency, and grid adapters.
pub mod graph;

/// Two-phase simplex for equality constrained LPs, plus integer branch and bound.
pub mod simplex;

/// Command line options shared by the puzzle binaries, and input helpers.
pub mod input;

/// Scoped wall-clock timing reported on stderr.
pub mod timer;

/// Random puzzle input generators.
pub mod generate {
    /// Random day 10 machines with a known feasible press vector.
    pub mod machines;
}

/// One module per puzzle day.
pub mod days {
    pub mod day01;
    pub mod day02;
    pub mod day03;
    pub mod day04;
    pub mod day05;
    pub mod day06;
    pub mod day07;
    pub mod day08;
    pub mod day09;
    pub mod day10;
    pub mod day11;
    pub mod day12;
}
