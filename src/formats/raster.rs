use std::path::Path;

use crate::model::Image;
use image::{ImageBuffer, Luma};

use super::util::stretch_to_u8;
use super::{IoError, Result};

/// Writes a plane as 8-bit grayscale, stretched to its own intensity range.
/// The container is picked from the file extension.
pub(crate) fn write_preview(path: &Path, image: &Image) -> Result<()> {
    let (height, width) = (image.height(), image.width());
    let values = image.pixels().iter().copied().collect::<Vec<_>>();
    let bytes = stretch_to_u8(&values, image.min_max().unwrap_or((0.0, 0.0)));
    let image = ImageBuffer::<Luma<u8>, _>::from_vec(width as u32, height as u32, bytes)
        .ok_or_else(|| IoError::UnsupportedLayout("failed to construct gray image".into()))?;
    image.save(path)?;
    Ok(())
}
