mod axis;
mod coords;
mod datastore;
mod error;
mod image;
mod metadata;


pub use axis::{Axis, PixelType, default_axis_order};
pub use coords::Coords;
pub use datastore::{DataProvider, Datastore};
pub use error::{CoreError, Result};
pub use image::{Image, Plane};
pub use metadata::SummaryMetadata;
