use serde::{Deserialize, Serialize};

use crate::crop::CropBounds;
use crate::model::Coords;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CropReport {
    pub recipe_name: Option<String>,
    pub bounds: CropBounds,
    pub source_images: usize,
    pub retained_images: usize,
    pub source_dimensions: Coords,
    pub output_dimensions: Coords,
    pub channel_names: Vec<String>,
    pub duration_ms: u64,
}
