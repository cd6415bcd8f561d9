mod life;

pub use life::Life;

use crate::grid::check_size;
use crate::{Grid, Neighborhood, Result, Topology};

/// Conway's B3/S23 rule.
pub fn rule(alive: bool, live_neighbors: u8) -> bool {
    matches!((alive, live_neighbors), (true, 2) | (_, 3))
}

/// Applies [`rule`] to every cell of a resolved field.
///
/// Only `field` is read while the result is being filled, so all cells see
/// the same generation. A field reporting zero rows or columns is an
/// [`InvalidGrid`](crate::Error::InvalidGrid).
pub fn step<N: Neighborhood + ?Sized>(field: &N) -> Result<Grid> {
    let (rows, cols) = field.size();
    check_size(rows, cols)?;
    Ok(advance(field))
}

/// Computes the generation following `grid` on the given manifold.
pub fn next_generation(grid: &Grid, topology: Topology) -> Grid {
    advance(&topology.resolve(grid))
}

/// `field.size()` must be at least 1x1.
fn advance<N: Neighborhood + ?Sized>(field: &N) -> Grid {
    let (rows, cols) = field.size();
    Grid::from_fn(rows, cols, |row, col| {
        rule(field.is_alive(row, col), field.live_neighbors(row, col))
    })
}

/// Same as [`next_generation`], starting from raw `0`/`1` rows and textual selectors.
///
/// The selectors are checked before the grid, and nothing is computed unless
/// both are valid.
pub fn next_gen<R: AsRef<[u8]>>(cells: &[R], mode: &str, padding: Option<&str>) -> Result<Grid> {
    let topology = Topology::parse(mode, padding)?;
    let grid = Grid::from_rows(cells)?;
    Ok(next_generation(&grid, topology))
}
