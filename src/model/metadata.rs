use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Axis, Coords, CoreError, PixelType, Result};

/// Dataset-level description shared by every image in a store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SummaryMetadata {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub channel_names: Vec<String>,
    /// Declared length along every axis, which may exceed what was acquired.
    #[serde(default)]
    pub intended_dimensions: Option<Coords>,
    #[serde(default)]
    pub axis_order: Vec<Axis>,
    #[serde(default)]
    pub pixel_type: PixelType,
    #[serde(default)]
    pub extras: BTreeMap<String, serde_json::Value>,
}

impl SummaryMetadata {
    pub fn with_channel_names(mut self, channel_names: Vec<String>) -> Self {
        self.channel_names = channel_names;
        self
    }

    pub fn with_intended_dimensions(mut self, dimensions: Coords) -> Self {
        self.intended_dimensions = Some(dimensions);
        self
    }

    pub fn with_axis_order(mut self, axis_order: Vec<Axis>) -> Self {
        self.axis_order = axis_order;
        self
    }

    pub fn validate(&self) -> Result<()> {
        for (position, axis) in self.axis_order.iter().enumerate() {
            if self.axis_order[..position].contains(axis) {
                return Err(CoreError::InvalidMetadata(format!(
                    "axis `{axis}` appears twice in the axis order"
                )));
            }
        }
        if let Some(dimensions) = &self.intended_dimensions {
            let declared = dimensions.index(Axis::CHANNEL);
            if !self.channel_names.is_empty()
                && dimensions.has_axis(Axis::CHANNEL)
                && declared != self.channel_names.len()
            {
                return Err(CoreError::ChannelCountMismatch {
                    names: self.channel_names.len(),
                    declared,
                });
            }
        }
        Ok(())
    }
}
