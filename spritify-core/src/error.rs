//! Typed failures surfaced to the CLI layer.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "there are 0 rendered frames in \"{dir}\"; set the output format to PNG \
         and render the animation first"
    )]
    NoFramesFound { dir: PathBuf },

    #[error(
        "the executable \"{path}\" does not exist; ensure ImageMagick is installed \
         and that the configured bin directory is correct"
    )]
    ToolNotFound { path: PathBuf },

    #[error("cannot split {frames} frame(s) into {files} file(s)")]
    InvalidPartition { frames: usize, files: u32 },

    #[error("expected output \"{path}\" was not produced")]
    CompositionFailed { path: PathBuf },

    #[error("scratch directory \"{dir}\" is missing after staging")]
    MissingScratch { dir: PathBuf },

    #[error("GIF source directory \"{path}\" does not exist")]
    MissingGifSource { path: PathBuf },

    #[error("config: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
