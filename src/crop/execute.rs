use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use crate::model::{Axis, Coords, CoreError, DataProvider, Datastore};

use super::{AxisRange, CropBounds, CropError, Result};

/// What a crop kept and how the dataset's shape changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropSummary {
    pub source_images: usize,
    pub retained_images: usize,
    pub source_dimensions: Coords,
    pub output_dimensions: Coords,
    pub channel_names: Vec<String>,
}

/// Copies the images of `source` that fall inside `bounds` into a new,
/// unfrozen store and re-zeroes every bounded axis.
pub fn crop(source: &impl DataProvider, bounds: &CropBounds) -> Result<Datastore> {
    let mut destination = Datastore::new();
    crop_into(source, bounds, &mut destination)?;
    Ok(destination)
}

/// Like [`crop`], but fills a caller-supplied store.
///
/// The destination is only replaced once every image has been placed, so on
/// error it is left exactly as it was passed in.
pub fn crop_into(
    source: &impl DataProvider,
    bounds: &CropBounds,
    destination: &mut Datastore,
) -> Result<CropSummary> {
    if !source.is_frozen() {
        return Err(CropError::SourceNotFrozen);
    }
    if destination.is_frozen() {
        return Err(CropError::DestinationFrozen);
    }
    bounds.validate_against(source)?;

    let source_summary = source.summary_metadata().cloned().unwrap_or_default();
    let source_dimensions = source.max_indices();
    let channel_names =
        cropped_channel_names(&source_summary.channel_names, bounds.get(Axis::CHANNEL));
    let output_dimensions = cropped_dimensions(&source_dimensions, bounds, &channel_names);
    let summary = source_summary
        .with_channel_names(channel_names.clone())
        .with_intended_dimensions(output_dimensions.clone());

    let mut staged = destination.clone();
    staged.set_summary_metadata(summary).map_err(store_error)?;

    let mut source_images = 0;
    let mut retained_images = 0;
    for image in source.unordered_images() {
        source_images += 1;
        if !bounds.retains(image.coords()) {
            trace!("excluding image at {}", image.coords());
            continue;
        }
        let coords = reindex(image.coords(), bounds);
        staged
            .put_image(image.copy_at_coords(coords))
            .map_err(store_error)?;
        retained_images += 1;
    }

    *destination = staged;
    info!(
        "cropped {source_images} images to {retained_images}: {source_dimensions} -> {output_dimensions}"
    );
    debug!("destination channel names: {channel_names:?}");

    Ok(CropSummary {
        source_images,
        retained_images,
        source_dimensions,
        output_dimensions,
        channel_names,
    })
}

fn store_error(error: CoreError) -> CropError {
    match error {
        CoreError::Frozen => CropError::DestinationFrozen,
        CoreError::Rewrite { coords } => CropError::CoordinateCollision { coords },
        other => CropError::Store(other),
    }
}

/// Bounded axes take their range length; the channel axis always matches the
/// retained names when there are any.
fn cropped_dimensions(
    source_dimensions: &Coords,
    bounds: &CropBounds,
    channel_names: &[String],
) -> Coords {
    let dimensions = bounds
        .iter()
        .fold(source_dimensions.clone(), |dimensions, (axis, range)| {
            dimensions.with_index(axis.clone(), range.len())
        });
    if channel_names.is_empty() {
        dimensions
    } else {
        dimensions.with_index(Axis::CHANNEL, channel_names.len())
    }
}

/// Inclusive `[min, max]` slice of the channel names when the channel axis is
/// narrowed, the full list otherwise.
pub(crate) fn cropped_channel_names(names: &[String], range: Option<AxisRange>) -> Vec<String> {
    match range {
        Some(range) if !range.covers(names.len()) => names
            .iter()
            .skip(range.offset())
            .take(range.len())
            .cloned()
            .collect(),
        _ => names.to_vec(),
    }
}

fn reindex(coords: &Coords, bounds: &CropBounds) -> Coords {
    bounds
        .iter()
        .fold(coords.clone(), |next, (axis, range)| {
            match coords.get(axis.name()) {
                Some(index) => next.with_index(axis.clone(), index - range.offset()),
                None => next,
            }
        })
}
