#![warn(clippy::all)]

use clap::Parser;
use conway_manifolds::{App, Config, Preset, RandomField, Topology};
use std::time::Duration;

/// Conway's Game of Life on a flat square, a Klein bottle or a torus.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Initial field: glider, blinker, pulsar or random.
    #[arg(short, long, default_value = "pulsar")]
    pattern: Preset,

    /// Manifold: flat, klein or torus.
    #[arg(short, long, default_value = "flat", conflicts_with = "mode")]
    topology: Topology,

    /// Boundary strategy by name instead of --topology: extend (lift) or wrap (factor).
    #[arg(long)]
    mode: Option<String>,

    /// Border of the extend mode: zeros or klein.
    #[arg(long, requires = "mode")]
    padding: Option<String>,

    /// Number of generations to play after the initial one.
    #[arg(short, long, default_value_t = Config::GENERATIONS)]
    generations: u64,

    /// Pause between frames in milliseconds.
    #[arg(long, default_value_t = Config::FRAME_DELAY.as_millis() as u64)]
    delay_ms: u64,

    /// Rows of the random field.
    #[arg(long, default_value_t = RandomField::default().rows)]
    rows: usize,

    /// Columns of the random field.
    #[arg(long, default_value_t = RandomField::default().cols)]
    cols: usize,

    /// Seed of the random field; a fresh one is drawn if omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Probability of a cell of the random field being alive.
    #[arg(long, default_value_t = RandomField::default().fill_rate)]
    fill_rate: f64,

    /// Keep previous frames on screen instead of clearing it.
    #[arg(long)]
    no_clear: bool,
}

impl Args {
    fn into_config(self) -> anyhow::Result<Config> {
        let topology = match &self.mode {
            Some(mode) => Topology::parse(mode, self.padding.as_deref())?,
            None => self.topology,
        };
        Ok(Config {
            preset: self.pattern,
            random: RandomField {
                rows: self.rows,
                cols: self.cols,
                seed: self.seed,
                fill_rate: self.fill_rate,
            },
            topology,
            generations: self.generations,
            frame_delay: Duration::from_millis(self.delay_ms),
            clear_screen: !self.no_clear,
        })
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Args::parse().into_config()?;
    log::debug!("{config:?}");

    let mut app = App::new(&config)?;
    app.run()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults_match_original_run() {
        let config = Args::parse_from(["conway-manifolds"]).into_config().unwrap();
        assert_eq!(config.preset, Preset::Pulsar);
        assert_eq!(config.topology, Topology::FLAT);
        assert_eq!(config.generations, 20);
        assert_eq!(config.frame_delay, Duration::from_millis(400));
        assert!(config.clear_screen);
    }

    #[test]
    fn test_raw_selectors() {
        let config = Args::parse_from(["conway-manifolds", "--mode", "lift", "--padding", "Klein"])
            .into_config()
            .unwrap();
        assert_eq!(config.topology, Topology::KLEIN);

        let config = Args::parse_from(["conway-manifolds", "--mode", "factor"])
            .into_config()
            .unwrap();
        assert_eq!(config.topology, Topology::TORUS);

        let err = Args::parse_from(["conway-manifolds", "--mode", "lift"])
            .into_config()
            .unwrap_err();
        assert!(err.to_string().starts_with("unknown topology"), "{err}");
    }

    #[test]
    fn test_topology_conflicts_with_mode() {
        assert!(
            Args::try_parse_from(["conway-manifolds", "-t", "klein", "--mode", "wrap"]).is_err()
        );
        assert!(Args::try_parse_from(["conway-manifolds", "--padding", "zeros"]).is_err());
        assert!(Args::try_parse_from(["conway-manifolds", "-t", "mobius"]).is_err());
    }
}
