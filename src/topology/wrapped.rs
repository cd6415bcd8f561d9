use super::Neighborhood;
use crate::Grid;

/// Torus view of a grid: neighbors of (i, j) are ((i ± 1) mod n, (j ± 1) mod m).
///
/// Nothing is copied. On a grid one cell thick the wrapped neighbors fold
/// back onto the cell's own row or column and are counted as often as they
/// appear among the 8 positions.
pub struct WrappedGrid<'a> {
    grid: &'a Grid,
}

impl<'a> WrappedGrid<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }
}

impl Neighborhood for WrappedGrid<'_> {
    fn size(&self) -> (usize, usize) {
        self.grid.size()
    }

    fn is_alive(&self, row: usize, col: usize) -> bool {
        self.grid.get(row, col)
    }

    fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        let (n, m) = self.grid.size();
        let (r1, r2) = ((row + n - 1) % n, (row + 1) % n);
        let (c1, c2) = ((col + m - 1) % m, (col + 1) % m);
        [
            (r1, c1),
            (r1, col),
            (r1, c2),
            (row, c1),
            (row, c2),
            (r2, c1),
            (r2, col),
            (r2, c2),
        ]
        .into_iter()
        .map(|(r, c)| self.grid.get(r, c) as u8)
        .sum()
    }
}
