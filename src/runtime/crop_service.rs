use std::path::Path;

use crate::crop::{CropBounds, RangeSelection};
use crate::model::{Coords, DataProvider, Datastore, Image};
use crate::workflow::{CropRecipe, CropReport, load_recipe, run_recipe, save_report};

use super::{AppError, Result};

#[derive(Debug, Default, Clone, Copy)]
pub struct CropService;

impl CropService {
    pub fn load_recipe(&self, path: impl AsRef<Path>) -> Result<CropRecipe> {
        Ok(load_recipe(path)?)
    }

    pub fn run(
        &self,
        recipe: &CropRecipe,
        source: &impl DataProvider,
    ) -> Result<(Datastore, CropReport)> {
        Ok(run_recipe(recipe, source)?)
    }

    pub fn save_report(&self, path: impl AsRef<Path>, report: &CropReport) -> Result<()> {
        save_report(path, report)?;
        Ok(())
    }

    /// Image shown while a bound on `axis` is being edited to the 1-based
    /// `index`, starting from the `displayed` coordinate.
    pub fn preview<'a, P: DataProvider>(
        &self,
        source: &'a P,
        displayed: Coords,
        axis: &str,
        index: usize,
    ) -> Result<&'a Image> {
        let mut selection = RangeSelection::new(source, displayed);
        selection.preview_at(axis, index)?;
        selection.preview(source).ok_or(AppError::EmptyDataset)
    }

    /// Bounds from the recipe, overridden per axis by explicit assignments.
    pub fn merge_bounds(&self, recipe: &mut CropRecipe, overrides: &CropBounds) {
        for (axis, range) in overrides.iter() {
            recipe.bounds.insert(axis.clone(), range);
        }
    }
}
