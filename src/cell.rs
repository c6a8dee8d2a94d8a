use std::{
    cmp::Ordering,
    ops::{Add, Sub},
};

/// A board coordinate. Cells are plain values with no identity of their
/// own; two cells are equal iff both coordinates match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The eight Moore-neighborhood coordinates of this cell, top-left to
    /// bottom-right. No bounds filtering happens here; callers drop the
    /// coordinates they cannot use.
    #[inline]
    pub fn neighbors(self) -> [Cell; 8] {
        let Cell { row, col } = self;
        [
            Cell::new(row - 1, col - 1),
            Cell::new(row - 1, col),
            Cell::new(row - 1, col + 1),
            Cell::new(row, col - 1),
            Cell::new(row, col + 1),
            Cell::new(row + 1, col - 1),
            Cell::new(row + 1, col),
            Cell::new(row + 1, col + 1),
        ]
    }
}

impl PartialOrd for Cell {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Cell {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        // compare row first, then column
        // i.e. if rows are equal, then compare columns
        Ord::cmp(&self.row, &other.row).then(Ord::cmp(&self.col, &other.col))
    }
}
impl Add for Cell {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            row: self.row + rhs.row,
            col: self.col + rhs.col,
        }
    }
}
impl Sub for Cell {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            row: self.row - rhs.row,
            col: self.col - rhs.col,
        }
    }
}
