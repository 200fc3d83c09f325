use ndarray::Array2;

/// Single coordinate axis used for the board dimension, rows and columns.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional position `(row, col)`, zero-based.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// Cell count of an `a` by `b` rectangle.
pub const fn mult(a: Coord, b: Coord) -> CellCount {
    (a as CellCount).saturating_mul(b as CellCount)
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, center: Coord2) -> NeighborIter;
}

/// Boards are square, so only the row count is consulted.
impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, center: Coord2) -> NeighborIter {
        let rows = self.nrows().min(Coord::MAX.into()) as Coord;
        NeighborIter::new(center, rows)
    }
}

/// Moore neighbourhood of a cell on a square board, walked row by row over
/// the 3x3 window clipped to the board edges.
#[derive(Clone, Debug)]
pub struct NeighborIter {
    center: Coord2,
    top_left: Coord2,
    bottom_right: Coord2,
    next: Option<Coord2>,
}

impl NeighborIter {
    /// Yields nothing when `center` lies off a `dimension`-wide board.
    pub fn new(center: Coord2, dimension: Coord) -> Self {
        let (row, col) = center;
        let last = dimension.saturating_sub(1);
        let top_left = (row.saturating_sub(1), col.saturating_sub(1));
        let bottom_right = (row.saturating_add(1).min(last), col.saturating_add(1).min(last));
        let on_board = row < dimension && col < dimension;

        Self {
            center,
            top_left,
            bottom_right,
            next: on_board.then_some(top_left),
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let current @ (row, col) = self.next?;
            self.next = if col < self.bottom_right.1 {
                Some((row, col + 1))
            } else if row < self.bottom_right.0 {
                Some((row + 1, self.top_left.1))
            } else {
                None
            };

            if current != self.center {
                return Some(current);
            }
        }
    }
}
