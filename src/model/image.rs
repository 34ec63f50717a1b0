use std::collections::BTreeMap;
use std::sync::Arc;

use ndarray::Array2;
use serde_json::Value;

use super::Coords;

/// Single 2-D pixel plane in `[Y, X]` order.
pub type Plane = Array2<f32>;

/// One plane of a dataset together with its coordinate.
///
/// Pixel data sits behind an `Arc` and is never mutated in place, so copies
/// made with [`Image::copy_at_coords`] can share it freely.
#[derive(Debug, Clone)]
pub struct Image {
    coords: Coords,
    pixels: Arc<Plane>,
    metadata: BTreeMap<String, Value>,
}

impl Image {
    pub fn new(pixels: Plane, coords: Coords) -> Self {
        Self::from_shared(Arc::new(pixels), coords)
    }

    pub fn from_shared(pixels: Arc<Plane>, coords: Coords) -> Self {
        Self {
            coords,
            pixels,
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_metadata(mut self, metadata: BTreeMap<String, Value>) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn coords(&self) -> &Coords {
        &self.coords
    }

    pub fn pixels(&self) -> &Plane {
        &self.pixels
    }

    pub fn metadata(&self) -> &BTreeMap<String, Value> {
        &self.metadata
    }

    pub fn height(&self) -> usize {
        self.pixels.nrows()
    }

    pub fn width(&self) -> usize {
        self.pixels.ncols()
    }

    /// Shallow copy placed at `coords`; pixels and metadata are shared.
    pub fn copy_at_coords(&self, coords: Coords) -> Self {
        Self {
            coords,
            pixels: Arc::clone(&self.pixels),
            metadata: self.metadata.clone(),
        }
    }

    pub fn shares_pixels_with(&self, other: &Image) -> bool {
        Arc::ptr_eq(&self.pixels, &other.pixels)
    }

    pub fn min_max(&self) -> Option<(f32, f32)> {
        let mut iter = self.pixels.iter().copied();
        let first = iter.next()?;
        let mut min = first;
        let mut max = first;
        for value in iter {
            if value < min {
                min = value;
            }
            if value > max {
                max = value;
            }
        }
        Some((min, max))
    }
}
