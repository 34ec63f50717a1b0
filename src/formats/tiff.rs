use std::fs::File;
use std::path::Path;

use crate::model::{PixelType, Plane};
use ndarray::Array2;
use tiff::decoder::{Decoder, DecodingResult};
use tiff::encoder::{TiffEncoder, colortype};

use super::util::{to_u8_samples, to_u16_samples};
use super::{IoError, Result};

/// Reads a single-page grayscale TIFF. Sample values are kept as stored.
pub(crate) fn read_plane(path: &Path) -> Result<(Plane, PixelType)> {
    let file = File::open(path)?;
    let mut decoder = Decoder::new(file)?;
    let (width, height) = decoder.dimensions()?;
    let expected = width as usize * height as usize;
    let (values, pixel_type) = match decoder.read_image()? {
        DecodingResult::U8(buffer) => (
            buffer.into_iter().map(f32::from).collect::<Vec<_>>(),
            PixelType::U8,
        ),
        DecodingResult::U16(buffer) => (
            buffer.into_iter().map(f32::from).collect::<Vec<_>>(),
            PixelType::U16,
        ),
        DecodingResult::F32(buffer) => (buffer, PixelType::F32),
        other => {
            return Err(IoError::UnsupportedLayout(format!(
                "unsupported TIFF sample type: {other:?}"
            )));
        }
    };
    if values.len() != expected {
        return Err(IoError::UnsupportedLayout(format!(
            "{} holds {} samples for a {width}x{height} plane; RGB/alpha planes are not supported",
            path.display(),
            values.len()
        )));
    }
    if decoder.more_images() {
        return Err(IoError::UnsupportedLayout(format!(
            "{} has more than one page",
            path.display()
        )));
    }
    let plane = Array2::from_shape_vec((height as usize, width as usize), values)
        .map_err(|error| IoError::UnsupportedLayout(error.to_string()))?;
    Ok((plane, pixel_type))
}

pub(crate) fn write_plane(path: &Path, plane: &Plane, pixel_type: PixelType) -> Result<()> {
    let height = plane.nrows() as u32;
    let width = plane.ncols() as u32;
    let samples = plane.iter().copied().collect::<Vec<_>>();
    let file = File::create(path)?;
    let mut encoder = TiffEncoder::new(file)?;
    match pixel_type {
        PixelType::U8 => {
            let image = encoder.new_image::<colortype::Gray8>(width, height)?;
            image.write_data(&to_u8_samples(&samples))?;
        }
        PixelType::U16 => {
            let image = encoder.new_image::<colortype::Gray16>(width, height)?;
            image.write_data(&to_u16_samples(&samples))?;
        }
        PixelType::F32 => {
            let image = encoder.new_image::<colortype::Gray32Float>(width, height)?;
            image.write_data(&samples)?;
        }
    }
    Ok(())
}
