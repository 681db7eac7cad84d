use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while generating a single asset.
///
/// None of these stop a run: the driver prints the error and moves on to the
/// next file.
#[derive(Error, Debug)]
pub enum AssetError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("ffmpeg error: {0}")]
    Ffmpeg(#[from] ffmpeg::Error),

    #[error("no video stream found")]
    NoVideoStream,

    #[error("no frame could be decoded")]
    NoFrame,

    #[error("target size {width}x{height} is empty")]
    EmptyTarget { width: u32, height: u32 },

    #[error("could not move finished file into place at {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type AssetResult<T> = Result<T, AssetError>;
