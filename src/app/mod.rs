mod config;
mod pacer;
mod screen;

pub use config::Config;
pub use pacer::FramePacer;
pub use screen::{center, render, Screen};

use crate::{Life, Result};
use std::io::{Stdout, Write};

/// Plays a run in the terminal: draws the initial grid and then one frame per generation.
pub struct App<W: Write> {
    life: Life,
    generations: u64,
    screen: Screen<W>,
    pacer: FramePacer,
}

impl App<Stdout> {
    pub fn new(config: &Config) -> Result<Self> {
        let screen = Screen::stdout(config.clear_screen);
        Self::with_screen(config, screen)
    }
}

impl<W: Write> App<W> {
    pub fn with_screen(config: &Config, screen: Screen<W>) -> Result<Self> {
        let grid = config.preset.grid(&config.random)?;
        log::info!(
            "{} on the {} topology for {} generations, {}x{} cells",
            config.preset,
            config.topology,
            config.generations,
            grid.rows(),
            grid.cols()
        );
        Ok(Self {
            life: Life::new(grid, config.topology),
            generations: config.generations,
            screen,
            pacer: FramePacer::new(config.frame_delay),
        })
    }

    pub fn life(&self) -> &Life {
        &self.life
    }

    pub fn run(&mut self) -> Result<()> {
        self.screen.draw(self.life.grid())?;
        self.pacer.wait();
        for _ in 0..self.generations {
            self.life.update(1);
            self.screen.draw(self.life.grid())?;
            self.pacer.wait();
        }
        log::debug!(
            "finished at generation {} ({:.1} fps, population {})",
            self.life.generation(),
            self.pacer.fps(),
            self.life.grid().population()
        );
        Ok(())
    }

    pub fn into_screen(self) -> Screen<W> {
        self.screen
    }
}
