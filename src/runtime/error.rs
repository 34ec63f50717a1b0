use crate::crop::CropError;
use crate::formats::IoError;
use crate::model::CoreError;
use crate::workflow::WorkflowError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("dataset service error: {0}")]
    Dataset(#[from] CoreError),

    #[error("I/O service error: {0}")]
    Io(#[from] IoError),

    #[error("crop service error: {0}")]
    Crop(#[from] CropError),

    #[error("recipe service error: {0}")]
    Workflow(#[from] WorkflowError),

    #[error("dataset contains no images to preview")]
    EmptyDataset,
}
