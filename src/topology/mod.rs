//! Boundary resolution for the three manifolds.
//!
//! A [`Topology`] turns a [`Grid`] into a [`Neighborhood`]: something that can
//! report the live neighbor count of any cell without reading outside of its
//! own storage. Two strategies exist:
//!
//! * [`Mode::Extend`] builds a [`PaddedGrid`] one cell larger on every side and
//!   counts neighbors around the interior only;
//! * [`Mode::Wrap`] keeps the grid as is and resolves neighbors with modular
//!   indexing through a [`WrappedGrid`].
//!
//! The flat square is `Extend` with [`PaddingStyle::Zero`], the Klein bottle is
//! `Extend` with [`PaddingStyle::Klein`] and the torus is `Wrap`.

mod padded;
mod wrapped;

pub use padded::PaddedGrid;
pub use wrapped::WrappedGrid;

use crate::{Error, Grid, Result};
use std::{fmt, str::FromStr};

/// Read access to a grid whose boundary has already been resolved.
///
/// Coordinates are always those of the original grid, whatever the
/// underlying representation looks like.
pub trait Neighborhood {
    /// `(rows, cols)` of the grid being advanced.
    fn size(&self) -> (usize, usize);

    /// State of the cell at (row, col).
    fn is_alive(&self, row: usize, col: usize) -> bool;

    /// Number of alive cells among the 8 cells around (row, col).
    fn live_neighbors(&self, row: usize, col: usize) -> u8;
}

/// How cells beyond the edges are obtained.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Pad the grid with one extra cell on every side.
    Extend,
    /// Index the grid modulo its dimensions.
    Wrap,
}

/// Contents of the border built in [`Mode::Extend`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaddingStyle {
    /// Border cells are dead.
    Zero,
    /// Border rows are the opposite rows reversed, border columns copy the
    /// opposite end of each (already padded) row.
    Klein,
}

/// Describes the strategy of resolving the field's boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Topology {
    /// Padded grid with the given border.
    Extend(PaddingStyle),
    /// Bounds of the field are stitched together.
    Wrap,
}

impl Topology {
    /// Square surrounded by permanently dead cells.
    pub const FLAT: Self = Self::Extend(PaddingStyle::Zero);
    /// Square whose edges are identified like a Klein bottle.
    pub const KLEIN: Self = Self::Extend(PaddingStyle::Klein);
    /// Square whose opposite edges are identified without a flip.
    pub const TORUS: Self = Self::Wrap;

    /// Combines a mode with its padding style.
    ///
    /// `Extend` requires a padding style; `Wrap` ignores it.
    pub fn new(mode: Mode, padding: Option<PaddingStyle>) -> Result<Self> {
        match (mode, padding) {
            (Mode::Extend, Some(style)) => Ok(Self::Extend(style)),
            (Mode::Extend, None) => Err(Error::UnknownTopology(
                "extend mode requires a padding style".to_string(),
            )),
            (Mode::Wrap, style) => {
                if let Some(style) = style {
                    log::debug!("padding style {style:?} has no effect in wrap mode");
                }
                Ok(Self::Wrap)
            }
        }
    }

    /// Parses the textual selectors, e.g. `("lift", Some("Klein"))` or `("factor", None)`.
    pub fn parse(mode: &str, padding: Option<&str>) -> Result<Self> {
        let mode = mode.parse::<Mode>()?;
        let padding = padding.map(str::parse::<PaddingStyle>).transpose()?;
        Self::new(mode, padding)
    }

    pub fn mode(&self) -> Mode {
        match self {
            Self::Extend(_) => Mode::Extend,
            Self::Wrap => Mode::Wrap,
        }
    }

    pub fn padding(&self) -> Option<PaddingStyle> {
        match self {
            Self::Extend(style) => Some(*style),
            Self::Wrap => None,
        }
    }

    /// Prepares `grid` for neighbor counting.
    pub fn resolve<'a>(&self, grid: &'a Grid) -> Resolved<'a> {
        match self {
            Self::Extend(style) => Resolved::Padded(PaddedGrid::new(grid, *style)),
            Self::Wrap => Resolved::Wrapped(WrappedGrid::new(grid)),
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Extend(PaddingStyle::Zero) => "flat",
            Self::Extend(PaddingStyle::Klein) => "klein",
            Self::Wrap => "torus",
        };
        f.write_str(name)
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "extend" | "lift" => Ok(Self::Extend),
            "wrap" | "factor" => Ok(Self::Wrap),
            _ => Err(Error::UnknownTopology(format!("mode `{s}`"))),
        }
    }
}

impl FromStr for PaddingStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "zero" | "zeros" => Ok(Self::Zero),
            "klein" => Ok(Self::Klein),
            _ => Err(Error::UnknownTopology(format!("padding style `{s}`"))),
        }
    }
}

/// Manifold names: `flat` (or `square`), `klein` and `torus`.
impl FromStr for Topology {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "flat" | "square" => Ok(Self::FLAT),
            "klein" => Ok(Self::KLEIN),
            "torus" => Ok(Self::TORUS),
            _ => Err(Error::UnknownTopology(format!("manifold `{s}`"))),
        }
    }
}

/// Output of [`Topology::resolve`].
pub enum Resolved<'a> {
    Padded(PaddedGrid),
    Wrapped(WrappedGrid<'a>),
}

impl Neighborhood for Resolved<'_> {
    fn size(&self) -> (usize, usize) {
        match self {
            Self::Padded(grid) => grid.size(),
            Self::Wrapped(grid) => grid.size(),
        }
    }

    fn is_alive(&self, row: usize, col: usize) -> bool {
        match self {
            Self::Padded(grid) => grid.is_alive(row, col),
            Self::Wrapped(grid) => grid.is_alive(row, col),
        }
    }

    fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        match self {
            Self::Padded(grid) => grid.live_neighbors(row, col),
            Self::Wrapped(grid) => grid.live_neighbors(row, col),
        }
    }
}
