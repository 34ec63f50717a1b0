use thiserror::Error;

use super::Coords;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("datastore is frozen and rejects further changes")]
    Frozen,

    #[error("datastore already holds an image at {coords}")]
    Rewrite { coords: Coords },

    #[error("summary metadata was already assigned to this datastore")]
    SummaryAlreadySet,

    #[error(
        "image plane size mismatch at {coords}: expected {expected_height}x{expected_width}, found {height}x{width}"
    )]
    PlaneSizeMismatch {
        coords: Coords,
        expected_height: usize,
        expected_width: usize,
        height: usize,
        width: usize,
    },

    #[error("channel name count {names} does not match declared channel length {declared}")]
    ChannelCountMismatch { names: usize, declared: usize },

    #[error("invalid metadata: {0}")]
    InvalidMetadata(String),
}
