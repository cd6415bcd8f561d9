use crate::{Preset, RandomField, Topology};
use std::time::Duration;

/// Settings of one terminal run.
#[derive(Clone, Debug)]
pub struct Config {
    pub preset: Preset,
    pub random: RandomField,
    pub topology: Topology,
    pub generations: u64,
    pub frame_delay: Duration,
    pub clear_screen: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            preset: Preset::Pulsar,
            random: RandomField::default(),
            topology: Topology::FLAT,
            generations: Self::GENERATIONS,
            frame_delay: Self::FRAME_DELAY,
            clear_screen: true,
        }
    }
}

impl Config {
    pub const GENERATIONS: u64 = 20;
    pub const FRAME_DELAY: Duration = Duration::from_millis(400);

    pub const LIVE_GLYPH: &'static str = "██";
    pub const DEAD_GLYPH: &'static str = "▒▒";
    /// Blank lines printed above and below every frame.
    pub const VERTICAL_MARGIN: usize = 4;
    /// Used when the terminal size cannot be queried.
    pub const FALLBACK_COLUMNS: usize = 80;
}
