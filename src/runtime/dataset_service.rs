use crate::crop::croppable_axes;
use crate::model::{Axis, DataProvider};

use super::Result;

#[derive(Debug, Default, Clone, Copy)]
pub struct DatasetService;

impl DatasetService {
    pub fn validate(&self, dataset: &impl DataProvider) -> Result<()> {
        if let Some(summary) = dataset.summary_metadata() {
            summary.validate()?;
        }
        Ok(())
    }

    pub fn croppable_axes(&self, dataset: &impl DataProvider) -> Vec<(Axis, usize)> {
        croppable_axes(dataset)
    }
}
