use crate::{Grid, Result};
use std::{fmt, str::FromStr};

pub const GLIDER: [[u8; 7]; 5] = [
    [1, 0, 0, 0, 0, 0, 0],
    [0, 1, 1, 0, 0, 0, 0],
    [1, 1, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0],
];

pub const BLINKER: [[u8; 3]; 3] = [
    [0, 1, 0],
    [0, 1, 0],
    [0, 1, 0],
];

pub const PULSAR: [[u8; 15]; 15] = [
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1, 0],
    [0, 1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1, 0],
    [0, 1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1, 0],
    [0, 0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0, 0],
    [0, 1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1, 0],
    [0, 1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1, 0],
    [0, 1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
];

/// Initial fields available from the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    Glider,
    Blinker,
    Pulsar,
    /// Random field; size, seed and fill rate come from [`RandomField`].
    Random,
}

/// Parameters of [`Preset::Random`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RandomField {
    pub rows: usize,
    pub cols: usize,
    /// If `None`, then random seed is generated.
    pub seed: Option<u64>,
    pub fill_rate: f64,
}

impl Default for RandomField {
    fn default() -> Self {
        Self {
            rows: 35,
            cols: 50,
            seed: None,
            fill_rate: 0.5,
        }
    }
}

impl Preset {
    pub const ALL: [Preset; 4] = [Self::Glider, Self::Blinker, Self::Pulsar, Self::Random];

    pub fn grid(&self, random: &RandomField) -> Result<Grid> {
        match self {
            Self::Glider => Grid::from_rows(&GLIDER),
            Self::Blinker => Grid::from_rows(&BLINKER),
            Self::Pulsar => Grid::from_rows(&PULSAR),
            Self::Random => Grid::random(random.rows, random.cols, random.seed, random.fill_rate),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Glider => "glider",
            Self::Blinker => "blinker",
            Self::Pulsar => "pulsar",
            Self::Random => "random",
        };
        f.write_str(name)
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, String> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!("unknown pattern `{s}`, expected glider, blinker, pulsar or random")
            })
    }
}
