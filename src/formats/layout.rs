use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::{Coords, SummaryMetadata};

/// Name of the index file at the root of a dataset directory.
pub const SUMMARY_FILE: &str = "summary.json";

/// Contents of [`SUMMARY_FILE`]: the summary plus one entry per plane file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetIndex {
    #[serde(default)]
    pub summary: Option<SummaryMetadata>,
    #[serde(default)]
    pub images: Vec<ImageEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageEntry {
    pub coords: Coords,
    pub file: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, Value>,
}

/// `img_channel000_time003.tif` for `[channel=0, time=3]`.
pub(crate) fn plane_file_name(coords: &Coords) -> String {
    let mut name = String::from("img");
    for (axis, index) in coords.iter() {
        let label = axis
            .name()
            .chars()
            .map(|character| {
                if character.is_ascii_alphanumeric() {
                    character
                } else {
                    '-'
                }
            })
            .collect::<String>();
        name.push_str(&format!("_{label}{index:03}"));
    }
    name.push_str(".tif");
    name
}
