use std::collections::{BTreeSet, HashMap};

use super::{Axis, Coords, CoreError, Image, Result, SummaryMetadata, default_axis_order};

/// Read access to a populated dataset.
///
/// Only the image iterator, the summary and the frozen flag are required;
/// axis lengths and extents are derived from the images that are present.
pub trait DataProvider {
    fn summary_metadata(&self) -> Option<&SummaryMetadata>;

    /// Every image exactly once, in no particular order.
    fn unordered_images(&self) -> impl Iterator<Item = &Image>;

    fn image(&self, coords: &Coords) -> Option<&Image>;

    fn is_frozen(&self) -> bool;

    fn num_images(&self) -> usize {
        self.unordered_images().count()
    }

    /// Axes used by any image, in the declared (or default) axis order first
    /// and by name after that.
    fn axes(&self) -> Vec<Axis> {
        let present = self
            .unordered_images()
            .flat_map(|image| image.coords().axes().cloned())
            .collect::<BTreeSet<_>>();
        let declared = self
            .summary_metadata()
            .map(|summary| summary.axis_order.clone())
            .filter(|order| !order.is_empty())
            .unwrap_or_else(default_axis_order);
        let mut ordered = declared
            .into_iter()
            .filter(|axis| present.contains(axis))
            .collect::<Vec<_>>();
        for axis in present {
            if !ordered.contains(&axis) {
                ordered.push(axis);
            }
        }
        ordered
    }

    /// One past the largest index seen on `axis`, or 0 if no image uses it.
    fn axis_length(&self, axis: &str) -> usize {
        self.unordered_images()
            .filter_map(|image| image.coords().get(axis))
            .max()
            .map_or(0, |index| index + 1)
    }

    /// Per-axis lengths over [`DataProvider::axes`].
    fn max_indices(&self) -> Coords {
        self.axes()
            .into_iter()
            .map(|axis| {
                let length = self.axis_length(axis.name());
                (axis, length)
            })
            .collect()
    }
}

/// In-memory image store keyed by coordinate.
///
/// A store starts mutable; once its owner calls [`Datastore::freeze`] every
/// further insert or summary assignment fails with [`CoreError::Frozen`].
#[derive(Debug, Clone, Default)]
pub struct Datastore {
    images: HashMap<Coords, Image>,
    summary: Option<SummaryMetadata>,
    frozen: bool,
}

impl Datastore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_summary_metadata(&mut self, summary: SummaryMetadata) -> Result<()> {
        if self.frozen {
            return Err(CoreError::Frozen);
        }
        if self.summary.is_some() {
            return Err(CoreError::SummaryAlreadySet);
        }
        self.summary = Some(summary);
        Ok(())
    }

    pub fn put_image(&mut self, image: Image) -> Result<()> {
        if self.frozen {
            return Err(CoreError::Frozen);
        }
        if self.images.contains_key(image.coords()) {
            return Err(CoreError::Rewrite {
                coords: image.coords().clone(),
            });
        }
        if let Some(existing) = self.images.values().next() {
            if existing.height() != image.height() || existing.width() != image.width() {
                return Err(CoreError::PlaneSizeMismatch {
                    coords: image.coords().clone(),
                    expected_height: existing.height(),
                    expected_width: existing.width(),
                    height: image.height(),
                    width: image.width(),
                });
            }
        }
        self.images.insert(image.coords().clone(), image);
        Ok(())
    }

    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    pub fn has_summary_metadata(&self) -> bool {
        self.summary.is_some()
    }
}

impl DataProvider for Datastore {
    fn summary_metadata(&self) -> Option<&SummaryMetadata> {
        self.summary.as_ref()
    }

    fn unordered_images(&self) -> impl Iterator<Item = &Image> {
        self.images.values()
    }

    fn image(&self, coords: &Coords) -> Option<&Image> {
        self.images.get(coords)
    }

    fn is_frozen(&self) -> bool {
        self.frozen
    }

    fn num_images(&self) -> usize {
        self.images.len()
    }
}
