use super::next_generation;
use crate::{Grid, Topology};

/// One simulation run: a grid advancing on a fixed manifold.
///
/// Iterating a `Life` yields the current grid first and then every following
/// generation, without end; use [`Iterator::take`] to stop.
#[derive(Clone, Debug)]
pub struct Life {
    grid: Grid,
    topology: Topology,
    generation: u64,
}

impl Life {
    pub fn new(grid: Grid, topology: Topology) -> Self {
        log::debug!(
            "new {}x{} run on the {topology} topology",
            grid.rows(),
            grid.cols()
        );
        Self {
            grid,
            topology,
            generation: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Number of updates applied since the run started.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advances the run by `steps` generations.
    pub fn update(&mut self, steps: u64) {
        for _ in 0..steps {
            self.grid = next_generation(&self.grid, self.topology);
            self.generation += 1;
            log::trace!(
                "generation {}: population {}",
                self.generation,
                self.grid.population()
            );
        }
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }
}

impl Iterator for Life {
    type Item = Grid;

    fn next(&mut self) -> Option<Grid> {
        let current = self.grid.clone();
        self.update(1);
        Some(current)
    }
}
