use log::debug;

use crate::model::{Axis, Coords, DataProvider, Image};

use super::{AxisRange, CropBounds, CropError, Result, croppable_axes};

#[derive(Debug, Clone, PartialEq, Eq)]
struct AxisSelection {
    axis: Axis,
    length: usize,
    range: AxisRange,
}

/// Interactive min/max choice for each croppable axis.
///
/// Every edit is clamped to the axis length and to the opposite end of the
/// range, and returns the coordinate that should be shown as a preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeSelection {
    axes: Vec<AxisSelection>,
    displayed: Coords,
}

impl RangeSelection {
    pub fn new(source: &impl DataProvider, displayed: Coords) -> Self {
        let axes = croppable_axes(source)
            .into_iter()
            .map(|(axis, length)| AxisSelection {
                axis,
                length,
                range: AxisRange::full(length),
            })
            .collect();
        Self { axes, displayed }
    }

    pub fn axes(&self) -> impl Iterator<Item = (&Axis, usize, AxisRange)> {
        self.axes
            .iter()
            .map(|selection| (&selection.axis, selection.length, selection.range))
    }

    pub fn range(&self, axis: &str) -> Option<AxisRange> {
        self.axes
            .iter()
            .find(|selection| selection.axis.name() == axis)
            .map(|selection| selection.range)
    }

    pub fn displayed(&self) -> &Coords {
        &self.displayed
    }

    pub fn set_min(&mut self, axis: &str, value: usize) -> Result<Coords> {
        let selection = self.selection_mut(axis)?;
        let value = value.clamp(1, selection.length).min(selection.range.max);
        selection.range.min = value;
        Ok(self.show(axis, value))
    }

    pub fn set_max(&mut self, axis: &str, value: usize) -> Result<Coords> {
        let selection = self.selection_mut(axis)?;
        let value = value.clamp(1, selection.length).max(selection.range.min);
        selection.range.max = value;
        Ok(self.show(axis, value))
    }

    /// Moves the preview along `axis` without touching its range.
    pub fn preview_at(&mut self, axis: &str, value: usize) -> Result<Coords> {
        let selection = self.selection_mut(axis)?;
        let value = value.clamp(1, selection.length);
        Ok(self.show(axis, value))
    }

    /// Image to display for the current preview coordinate.
    pub fn preview<'a, P: DataProvider>(&self, source: &'a P) -> Option<&'a Image> {
        nearest_image(source, &self.displayed)
    }

    pub fn bounds(&self) -> CropBounds {
        self.axes
            .iter()
            .map(|selection| (selection.axis.clone(), selection.range))
            .collect()
    }

    fn selection_mut(&mut self, axis: &str) -> Result<&mut AxisSelection> {
        self.axes
            .iter_mut()
            .find(|selection| selection.axis.name() == axis)
            .ok_or_else(|| CropError::InvalidBounds {
                axis: Axis::new(axis),
                reason: "axis has a single plane or is not part of the dataset".to_string(),
            })
    }

    fn show(&mut self, axis: &str, value: usize) -> Coords {
        self.displayed = self.displayed.with_index(axis, value - 1);
        debug!("previewing {}", self.displayed);
        self.displayed.clone()
    }
}

/// The image at `coords`, or the closest one when that plane was never
/// acquired. Ties go to the smaller coordinate.
pub fn nearest_image<'a, P: DataProvider>(source: &'a P, coords: &Coords) -> Option<&'a Image> {
    source.image(coords).or_else(|| {
        source.unordered_images().min_by(|left, right| {
            left.coords()
                .distance(coords)
                .cmp(&right.coords().distance(coords))
                .then_with(|| left.coords().cmp(right.coords()))
        })
    })
}
