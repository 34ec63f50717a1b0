mod bounds;
mod error;
mod execute;
mod selection;


pub use bounds::{AxisRange, CropBounds, croppable_axes};
pub use error::{CropError, Result};
pub use execute::{CropSummary, crop, crop_into};
pub use selection::{RangeSelection, nearest_image};
