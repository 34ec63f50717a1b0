use thiserror::Error;

use crate::model::{Axis, Coords, CoreError};

pub type Result<T> = std::result::Result<T, CropError>;

#[derive(Debug, Error)]
pub enum CropError {
    #[error("source dataset is still being acquired; only frozen datasets can be cropped")]
    SourceNotFrozen,

    #[error("destination dataset is frozen")]
    DestinationFrozen,

    #[error("more than one image maps to destination coordinate {coords}")]
    CoordinateCollision { coords: Coords },

    #[error("invalid bounds for axis `{axis}`: {reason}")]
    InvalidBounds { axis: Axis, reason: String },

    #[error("could not parse crop bound: {0}")]
    Parse(String),

    #[error("datastore error: {0}")]
    Store(#[from] CoreError),
}
