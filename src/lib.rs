//! Conway's Game of Life on three manifolds: a flat square with dead
//! surroundings, a Klein bottle and a torus.
//!
//! The simulation core is [`next_generation`]: a [`Topology`] resolves the
//! grid's boundary into a [`Neighborhood`], and [`step`] applies the rule to
//! every cell of it. [`Life`] drives a whole run; [`App`] plays one in the
//! terminal.
//!
//! ```
//! use conway_manifolds::{next_generation, Grid, Topology};
//!
//! let blinker = Grid::from_rows(&[[0u8, 1, 0], [0, 1, 0], [0, 1, 0]]).unwrap();
//! let next = next_generation(&blinker, Topology::FLAT);
//! assert_eq!(next.to_rows(), vec![vec![0, 0, 0], vec![1, 1, 1], vec![0, 0, 0]]);
//! ```

#![warn(clippy::all)]

mod app;
mod engine;
mod error;
mod grid;
mod patterns;
mod topology;

pub use app::{center, render, App, Config, FramePacer, Screen};
pub use engine::{next_gen, next_generation, rule, step, Life};
pub use error::{Error, GridDefect, Result};
pub use grid::Grid;
pub use patterns::{Preset, RandomField, BLINKER, GLIDER, PULSAR};
pub use topology::{
    Mode, Neighborhood, PaddedGrid, PaddingStyle, Resolved, Topology, WrappedGrid,
};
