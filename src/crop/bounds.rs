use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::{Axis, Coords, DataProvider};

use super::{CropError, Result};

/// Inclusive, 1-based range along one axis.
///
/// `min = 1` keeps the first plane; stored indices are 0-based, so the
/// retained window is `min - 1 .. max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: usize,
    pub max: usize,
}

impl AxisRange {
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    pub fn full(length: usize) -> Self {
        Self::new(1, length)
    }

    pub fn len(&self) -> usize {
        (self.max + 1).saturating_sub(self.min)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Amount subtracted from every retained 0-based index.
    pub fn offset(&self) -> usize {
        self.min.saturating_sub(1)
    }

    pub fn contains_index(&self, index: usize) -> bool {
        index >= self.offset() && index < self.max
    }

    pub fn covers(&self, length: usize) -> bool {
        self.min <= 1 && self.max >= length
    }
}

impl fmt::Display for AxisRange {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}:{}", self.min, self.max)
    }
}

impl FromStr for AxisRange {
    type Err = CropError;

    fn from_str(raw: &str) -> Result<Self> {
        let (min, max) = raw.split_once(':').ok_or_else(|| {
            CropError::Parse(format!("range `{raw}` must look like `min:max`"))
        })?;
        let parse = |value: &str| {
            value
                .trim()
                .parse::<usize>()
                .map_err(|_| CropError::Parse(format!("`{value}` is not a non-negative integer")))
        };
        Ok(Self::new(parse(min)?, parse(max)?))
    }
}

/// Per-axis bounds for a crop. Axes without an entry keep their full range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CropBounds {
    ranges: BTreeMap<Axis, AxisRange>,
}

impl CropBounds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full range on every axis a user could crop.
    pub fn full(source: &impl DataProvider) -> Self {
        croppable_axes(source)
            .into_iter()
            .map(|(axis, length)| (axis, AxisRange::full(length)))
            .collect()
    }

    pub fn with(mut self, axis: impl Into<Axis>, min: usize, max: usize) -> Self {
        self.insert(axis, AxisRange::new(min, max));
        self
    }

    pub fn insert(&mut self, axis: impl Into<Axis>, range: AxisRange) {
        self.ranges.insert(axis.into(), range);
    }

    pub fn get(&self, axis: &str) -> Option<AxisRange> {
        self.ranges.get(axis).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Axis, AxisRange)> {
        self.ranges.iter().map(|(axis, range)| (axis, *range))
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Parses a command-line assignment such as `time=2:4`.
    pub fn parse_assignment(raw: &str) -> Result<(Axis, AxisRange)> {
        let (axis, range) = raw.split_once('=').ok_or_else(|| {
            CropError::Parse(format!("bound `{raw}` must look like `axis=min:max`"))
        })?;
        let axis = axis.trim();
        if axis.is_empty() {
            return Err(CropError::Parse(format!("bound `{raw}` has an empty axis name")));
        }
        Ok((Axis::new(axis), range.parse()?))
    }

    /// Checks `1 <= min <= max <= length` for every bounded axis.
    pub fn validate_against(&self, source: &impl DataProvider) -> Result<()> {
        for (axis, range) in self.iter() {
            let length = source.axis_length(axis.name());
            let reason = if length == 0 {
                Some("axis is not present in the source dataset".to_string())
            } else if range.min < 1 {
                Some(format!("minimum {} is below 1", range.min))
            } else if range.min > range.max {
                Some(format!(
                    "minimum {} is above maximum {}",
                    range.min, range.max
                ))
            } else if range.max > length {
                Some(format!(
                    "maximum {} exceeds axis length {length}",
                    range.max
                ))
            } else {
                None
            };
            if let Some(reason) = reason {
                return Err(CropError::InvalidBounds {
                    axis: axis.clone(),
                    reason,
                });
            }
        }
        Ok(())
    }

    /// True when a coordinate lies inside every bounded range it carries.
    /// Axes the coordinate does not store are not filtered on.
    pub(crate) fn retains(&self, coords: &Coords) -> bool {
        self.iter().all(|(axis, range)| {
            coords
                .get(axis.name())
                .is_none_or(|index| range.contains_index(index))
        })
    }
}

impl FromIterator<(Axis, AxisRange)> for CropBounds {
    fn from_iter<I: IntoIterator<Item = (Axis, AxisRange)>>(iter: I) -> Self {
        Self {
            ranges: iter.into_iter().collect(),
        }
    }
}

/// Axes longer than one plane, with their lengths, in the source's axis order.
pub fn croppable_axes(source: &impl DataProvider) -> Vec<(Axis, usize)> {
    source
        .axes()
        .into_iter()
        .map(|axis| {
            let length = source.axis_length(axis.name());
            (axis, length)
        })
        .filter(|(_, length)| *length > 1)
        .collect()
}
