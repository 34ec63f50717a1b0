use serde::{Deserialize, Serialize};

use crate::crop::CropBounds;

use super::{Result, WorkflowError};

/// A named, reusable crop selection read from JSON or YAML.
///
/// ```yaml
/// name: first-three-timepoints
/// bounds:
///   time: { min: 1, max: 3 }
///   channel: { min: 2, max: 2 }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CropRecipe {
    pub name: Option<String>,
    #[serde(default)]
    pub bounds: CropBounds,
}

impl CropRecipe {
    pub fn validate(&self) -> Result<()> {
        for (axis, range) in self.bounds.iter() {
            if axis.name().trim().is_empty() {
                return Err(WorkflowError::Parse(
                    "recipe bounds contain an empty axis name".to_string(),
                ));
            }
            if range.min < 1 || range.min > range.max {
                return Err(WorkflowError::Parse(format!(
                    "bound for axis `{axis}` must satisfy 1 <= min <= max, found {range}"
                )));
            }
        }
        Ok(())
    }
}
