use crate::{GridDefect, Result};
use std::fmt;

/// Rectangular field of dead and alive cells.
///
/// A grid always has at least one row and one column and every row has the
/// same length. It has no public mutators: advancing the simulation builds a
/// new grid instead of touching the old one.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: Vec<bool>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Builds a grid from rows of `0`/`1` values.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let first = rows.first().ok_or(GridDefect::NoRows)?;
        let cols = first.as_ref().len();

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.is_empty() {
                return Err(GridDefect::EmptyRow { row }.into());
            }
            if values.len() != cols {
                return Err(GridDefect::Ragged {
                    row,
                    expected: cols,
                    actual: values.len(),
                }
                .into());
            }
            for (col, &value) in values.iter().enumerate() {
                match value {
                    0 => cells.push(false),
                    1 => cells.push(true),
                    _ => return Err(GridDefect::NotBinary { row, col, value }.into()),
                }
            }
        }

        Ok(Self {
            cells,
            rows: rows.len(),
            cols,
        })
    }

    /// Creates a grid filled with dead cells.
    pub fn blank(rows: usize, cols: usize) -> Result<Self> {
        check_size(rows, cols)?;
        Ok(Self::from_fn(rows, cols, |_, _| false))
    }

    /// Creates a grid with random cells.
    ///
    /// `fill_rate` - probability of a cell being alive
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn random(rows: usize, cols: usize, seed: Option<u64>, fill_rate: f64) -> Result<Self> {
        use rand::{Rng, SeedableRng};
        use rand_chacha::ChaCha8Rng;

        check_size(rows, cols)?;
        if !(0.0..=1.0).contains(&fill_rate) {
            return Err(GridDefect::FillRate(fill_rate).into());
        }

        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        Ok(Self::from_fn(rows, cols, |_, _| rng.gen_bool(fill_rate)))
    }

    /// Callers guarantee `rows >= 1 && cols >= 1`.
    pub(crate) fn from_fn(
        rows: usize,
        cols: usize,
        mut state: impl FnMut(usize, usize) -> bool,
    ) -> Self {
        debug_assert!(rows >= 1 && cols >= 1);
        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(state(row, col));
            }
        }
        Self { cells, rows, cols }
    }

    /// `(rows, cols)` of the grid.
    pub fn size(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell state at (row, col).
    ///
    /// Panics if the coordinate lies outside of the grid.
    pub fn get(&self, row: usize, col: usize) -> bool {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) is outside of a {}x{} grid",
            self.rows,
            self.cols
        );
        self.cells[row * self.cols + col]
    }

    pub fn row(&self, row: usize) -> &[bool] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    pub fn iter_rows(&self) -> impl DoubleEndedIterator<Item = &[bool]> + ExactSizeIterator {
        self.cells.chunks_exact(self.cols)
    }

    /// Copies the grid out as rows of `0`/`1` values.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.iter_rows()
            .map(|row| row.iter().map(|&cell| cell as u8).collect())
            .collect()
    }

    /// Total number of alive cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }
}

pub(crate) fn check_size(rows: usize, cols: usize) -> Result<()> {
    if rows == 0 {
        return Err(GridDefect::NoRows.into());
    }
    if cols == 0 {
        return Err(GridDefect::EmptyRow { row: 0 }.into());
    }
    Ok(())
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &cell in row {
                write!(f, "{}", cell as u8)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{}", self.rows, self.cols)?;
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_from_rows() {
        let grid = Grid::from_rows(&[[0u8, 1, 0], [1, 1, 0]]).unwrap();
        assert_eq!(grid.size(), (2, 3));
        assert!(grid.get(0, 1) && grid.get(1, 0) && grid.get(1, 1));
        assert!(!grid.get(0, 0) && !grid.get(1, 2));
        assert_eq!(grid.population(), 3);
        assert_eq!(grid.to_rows(), vec![vec![0, 1, 0], vec![1, 1, 0]]);
        assert_eq!(grid.to_string(), "010\n110");
    }

    #[test]
    fn test_rejected_shapes() {
        let no_rows: [Vec<u8>; 0] = [];
        let cases: Vec<(Vec<Vec<u8>>, GridDefect)> = vec![
            (no_rows.to_vec(), GridDefect::NoRows),
            (vec![vec![], vec![]], GridDefect::EmptyRow { row: 0 }),
            (
                vec![vec![0, 1], vec![1]],
                GridDefect::Ragged {
                    row: 1,
                    expected: 2,
                    actual: 1,
                },
            ),
            (
                vec![vec![0, 1], vec![2, 0]],
                GridDefect::NotBinary {
                    row: 1,
                    col: 0,
                    value: 2,
                },
            ),
        ];
        for (rows, expected) in cases {
            match Grid::from_rows(&rows) {
                Err(Error::InvalidGrid(defect)) => assert_eq!(defect, expected),
                other => panic!("{rows:?} gave {other:?}"),
            }
        }
    }

    #[test]
    fn test_blank_and_random() {
        assert!(matches!(Grid::blank(0, 3), Err(Error::InvalidGrid(_))));
        assert!(matches!(Grid::blank(3, 0), Err(Error::InvalidGrid(_))));
        assert_eq!(Grid::blank(4, 5).unwrap().population(), 0);

        let a = Grid::random(35, 50, Some(42), 0.5).unwrap();
        let b = Grid::random(35, 50, Some(42), 0.5).unwrap();
        assert_eq!(a, b);
        assert!(a.population() > 0 && a.population() < 35 * 50);
        assert_eq!(Grid::random(3, 3, None, 1.0).unwrap().population(), 9);
        assert!(matches!(
            Grid::random(3, 3, None, 1.5),
            Err(Error::InvalidGrid(GridDefect::FillRate(_)))
        ));
    }
}
