use std::{fmt::Display, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("SDL error: {0}")]
    Sdl(String),
    #[error("Could not load sprite {path:?}")]
    AssetLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("The mole needs at least one sprite")]
    NoSprites,
}

impl GameError {
    /// SDL reports failures as strings or as assorted `Display` types.
    pub fn sdl(err: impl Display) -> Self {
        GameError::Sdl(err.to_string())
    }
}
