use anyhow::{Context, Result};
use display::GridConfig;

mod display;
mod error;
mod game;
mod grid;
mod mole;
mod painter;
#[cfg(test)]
mod testing;
mod window;

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    window::run(GridConfig::default()).context("Whack-a-Mole stopped with an error")
}
