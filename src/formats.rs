mod api;
mod error;
mod layout;
mod raster;
mod tiff;
mod util;


pub use api::{read_dataset, save_preview, write_dataset};
pub use error::{IoError, Result};
pub use layout::{DatasetIndex, ImageEntry, SUMMARY_FILE};
