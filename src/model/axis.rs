use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Named dimension a dataset is indexed along.
///
/// Any name is accepted; the well-known acquisition axes have constructors so
/// call sites do not spell the strings out.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Axis(String);

impl Axis {
    pub const CHANNEL: &'static str = "channel";
    pub const TIME: &'static str = "time";
    pub const Z: &'static str = "z";
    pub const STAGE_POSITION: &'static str = "position";

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn channel() -> Self {
        Self::new(Self::CHANNEL)
    }

    pub fn time() -> Self {
        Self::new(Self::TIME)
    }

    pub fn z() -> Self {
        Self::new(Self::Z)
    }

    pub fn stage_position() -> Self {
        Self::new(Self::STAGE_POSITION)
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Axis {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Axis {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Axis {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

/// Acquisition order used when a dataset does not declare its own.
pub fn default_axis_order() -> Vec<Axis> {
    vec![
        Axis::channel(),
        Axis::z(),
        Axis::time(),
        Axis::stage_position(),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PixelType {
    U8,
    U16,
    #[default]
    F32,
}
