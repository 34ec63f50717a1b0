use std::time::Instant;

use crate::crop::crop_into;
use crate::model::{DataProvider, Datastore};

use super::{CropRecipe, CropReport, Result};

/// Applies a recipe to `source` and reports what was kept.
pub fn run_recipe(
    recipe: &CropRecipe,
    source: &impl DataProvider,
) -> Result<(Datastore, CropReport)> {
    recipe.validate()?;

    let started = Instant::now();
    let mut destination = Datastore::new();
    let summary = crop_into(source, &recipe.bounds, &mut destination)?;
    let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    let report = CropReport {
        recipe_name: recipe.name.clone(),
        bounds: recipe.bounds.clone(),
        source_images: summary.source_images,
        retained_images: summary.retained_images,
        source_dimensions: summary.source_dimensions,
        output_dimensions: summary.output_dimensions,
        channel_names: summary.channel_names,
        duration_ms,
    };
    Ok((destination, report))
}
