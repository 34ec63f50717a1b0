use std::path::PathBuf;

use crate::model::CoreError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, IoError>;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("unsupported plane layout: {0}")]
    UnsupportedLayout(String),

    #[error("refusing to overwrite existing dataset at {0}")]
    AlreadyExists(PathBuf),

    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("image encode failure: {0}")]
    Image(#[from] image::ImageError),

    #[error("TIFF decode/encode failure: {0}")]
    Tiff(#[from] tiff::TiffError),

    #[error("dataset index serialization failure: {0}")]
    Json(#[from] serde_json::Error),

    #[error("core datastore/metadata failure: {0}")]
    Core(#[from] CoreError),
}
