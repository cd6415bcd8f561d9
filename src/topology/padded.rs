use super::{Neighborhood, PaddingStyle};
use crate::Grid;
use std::iter;

/// Grid surrounded by a one-cell border, `(rows + 2) x (cols + 2)` in total.
///
/// The border is built in two passes. Rows come first: a new top and bottom
/// row are added. Columns come second: each row, including the two new ones,
/// gets one cell prepended and one appended. For [`PaddingStyle::Klein`] the
/// new top row is the last row reversed, the new bottom row is the first row
/// reversed, and the column pass copies each row's own last cell to its front
/// and its own first cell to its back, without reversing anything.
///
/// So the corners of a Klein border are taken from the reversed rows: the
/// top-left corner holds the original bottom-left cell, the top-right corner
/// holds the original bottom-right cell, and likewise for the bottom corners
/// with the original top row. This follows the construction order above and
/// is not meant as an exact model of the Klein bottle's identification.
pub struct PaddedGrid {
    cells: Vec<bool>,
    rows: usize,
    cols: usize,
}

impl PaddedGrid {
    pub fn new(grid: &Grid, style: PaddingStyle) -> Self {
        let (rows, cols) = grid.size();

        let (top, bottom) = match style {
            PaddingStyle::Zero => (vec![false; cols], vec![false; cols]),
            PaddingStyle::Klein => {
                let reversed = |row: &[bool]| row.iter().rev().copied().collect::<Vec<_>>();
                (reversed(grid.row(rows - 1)), reversed(grid.row(0)))
            }
        };

        let mut cells = Vec::with_capacity((rows + 2) * (cols + 2));
        let padded_rows = iter::once(top.as_slice())
            .chain(grid.iter_rows())
            .chain(iter::once(bottom.as_slice()));
        for row in padded_rows {
            let (front, back) = match style {
                PaddingStyle::Zero => (false, false),
                PaddingStyle::Klein => (row[cols - 1], row[0]),
            };
            cells.push(front);
            cells.extend_from_slice(row);
            cells.push(back);
        }

        Self {
            cells,
            rows: rows + 2,
            cols: cols + 2,
        }
    }

    /// `(rows, cols)` including the border.
    pub fn padded_size(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Cell at (row, col) in padded coordinates; `(1, 1)` is the original top-left cell.
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.cols + col]
    }

    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks_exact(self.cols)
            .map(|row| row.iter().map(|&cell| cell as u8).collect())
            .collect()
    }
}

impl Neighborhood for PaddedGrid {
    fn size(&self) -> (usize, usize) {
        (self.rows - 2, self.cols - 2)
    }

    fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row + 1, col + 1)
    }

    fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        // (row, col) of the original grid sits at (row + 1, col + 1) here,
        // so its neighbors span rows/cols row..=row + 2 and col..=col + 2.
        let mut count = 0;
        for r in row..=row + 2 {
            for c in col..=col + 2 {
                if (r, c) != (row + 1, col + 1) {
                    count += self.get(r, c) as u8;
                }
            }
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid {
        Grid::from_rows(&[[1u8, 0, 0], [0, 1, 1]]).unwrap()
    }

    #[test]
    fn test_zero_border() {
        let padded = PaddedGrid::new(&sample(), PaddingStyle::Zero);
        assert_eq!(padded.padded_size(), (4, 5));
        assert_eq!(
            padded.to_rows(),
            vec![
                vec![0, 0, 0, 0, 0],
                vec![0, 1, 0, 0, 0],
                vec![0, 0, 1, 1, 0],
                vec![0, 0, 0, 0, 0],
            ]
        );
    }

    #[test]
    fn test_klein_border() {
        // top: last row reversed = 1 1 0, framed by its own ends -> 0 | 1 1 0 | 1
        // bottom: first row reversed = 0 0 1 -> 1 | 0 0 1 | 0
        let padded = PaddedGrid::new(&sample(), PaddingStyle::Klein);
        assert_eq!(
            padded.to_rows(),
            vec![
                vec![0, 1, 1, 0, 1],
                vec![0, 1, 0, 0, 1],
                vec![1, 0, 1, 1, 0],
                vec![1, 0, 0, 1, 0],
            ]
        );
    }

    #[test]
    fn test_klein_corners() {
        let grid = Grid::from_rows(&[
            [1u8, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 1, 0, 0],
            [0, 0, 1, 1],
        ])
        .unwrap();
        let (n, m) = grid.size();
        let padded = PaddedGrid::new(&grid, PaddingStyle::Klein);
        assert_eq!(padded.get(0, 0), grid.get(n - 1, 0));
        assert_eq!(padded.get(0, m + 1), grid.get(n - 1, m - 1));
        assert_eq!(padded.get(n + 1, 0), grid.get(0, 0));
        assert_eq!(padded.get(n + 1, m + 1), grid.get(0, m - 1));
        assert_eq!(
            (
                padded.get(0, 0),
                padded.get(0, m + 1),
                padded.get(n + 1, 0),
                padded.get(n + 1, m + 1)
            ),
            (false, true, true, false)
        );
    }

    #[test]
    fn test_neighbors_from_border() {
        let grid = Grid::from_rows(&[[0u8, 0, 1], [0, 0, 0], [1, 0, 0]]).unwrap();

        let zero = PaddedGrid::new(&grid, PaddingStyle::Zero);
        assert_eq!(zero.size(), (3, 3));
        assert_eq!(zero.live_neighbors(0, 0), 0);
        assert_eq!(zero.live_neighbors(1, 1), 2);
        assert!(zero.is_alive(0, 2) && !zero.is_alive(0, 0));

        // Klein top row is the bottom row reversed: 0 0 1, framed as 1 | 0 0 1 | 0.
        let klein = PaddedGrid::new(&grid, PaddingStyle::Klein);
        assert_eq!(klein.to_rows()[0], vec![1, 0, 0, 1, 0]);
        assert_eq!(klein.live_neighbors(0, 1), 2);
        assert_eq!(klein.live_neighbors(1, 1), 2);
    }

    #[test]
    fn test_single_cell() {
        let grid = Grid::from_rows(&[[1u8]]).unwrap();
        let klein = PaddedGrid::new(&grid, PaddingStyle::Klein);
        assert_eq!(klein.to_rows(), vec![vec![1; 3]; 3]);
        assert_eq!(klein.live_neighbors(0, 0), 8);
        let zero = PaddedGrid::new(&grid, PaddingStyle::Zero);
        assert_eq!(zero.live_neighbors(0, 0), 0);
    }
}
