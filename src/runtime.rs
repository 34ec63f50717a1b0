mod context;
mod crop_service;
mod dataset_service;
mod error;
mod io_service;

#[cfg(test)]
mod tests;

pub use context::AppContext;
pub use crop_service::CropService;
pub use dataset_service::DatasetService;
pub use error::{AppError, Result};
pub use io_service::IoService;
