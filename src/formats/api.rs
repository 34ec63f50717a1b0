use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::debug;
use rayon::prelude::*;

use crate::model::{DataProvider, Datastore, Image};

use super::layout::{DatasetIndex, ImageEntry, SUMMARY_FILE, plane_file_name};
use super::raster::write_preview;
use super::tiff::{read_plane, write_plane};
use super::{IoError, Result};

/// Loads a dataset directory into a frozen in-memory store.
pub fn read_dataset(path: impl AsRef<Path>) -> Result<Datastore> {
    let root = path.as_ref();
    let raw = fs::read_to_string(root.join(SUMMARY_FILE))?;
    let index: DatasetIndex = serde_json::from_str(&raw)?;
    if let Some(summary) = &index.summary {
        summary.validate()?;
    }

    let planes = index
        .images
        .par_iter()
        .map(|entry| read_plane(&root.join(&entry.file)).map(|(plane, _)| (entry, plane)))
        .collect::<Result<Vec<_>>>()?;

    let mut store = Datastore::new();
    if let Some(summary) = index.summary.clone() {
        store.set_summary_metadata(summary)?;
    }
    for (entry, plane) in planes {
        store.put_image(
            Image::new(plane, entry.coords.clone()).with_metadata(entry.metadata.clone()),
        )?;
    }
    store.freeze();
    debug!(
        "read {} images from {}",
        store.num_images(),
        root.display()
    );
    Ok(store)
}

/// Writes every image as a single-page TIFF next to a [`SUMMARY_FILE`] index.
/// Sample format follows the summary's pixel type.
pub fn write_dataset(path: impl AsRef<Path>, dataset: &impl DataProvider) -> Result<()> {
    let root = path.as_ref();
    let index_path = root.join(SUMMARY_FILE);
    if index_path.exists() {
        return Err(IoError::AlreadyExists(root.to_path_buf()));
    }
    fs::create_dir_all(root)?;

    let summary = dataset.summary_metadata().cloned();
    let pixel_type = summary
        .as_ref()
        .map(|summary| summary.pixel_type)
        .unwrap_or_default();

    let mut images = dataset.unordered_images().collect::<Vec<_>>();
    images.sort_by(|left, right| left.coords().cmp(right.coords()));
    let entries = images
        .iter()
        .map(|image| ImageEntry {
            coords: image.coords().clone(),
            file: plane_file_name(image.coords()),
            metadata: image.metadata().clone(),
        })
        .collect::<Vec<_>>();
    let unique = entries
        .iter()
        .map(|entry| entry.file.as_str())
        .collect::<HashSet<_>>();
    if unique.len() != entries.len() {
        return Err(IoError::UnsupportedLayout(
            "axis names collide after sanitizing plane file names".into(),
        ));
    }

    images
        .par_iter()
        .zip(entries.par_iter())
        .try_for_each(|(image, entry)| {
            write_plane(&root.join(&entry.file), image.pixels(), pixel_type)
        })?;

    let index = DatasetIndex {
        summary,
        images: entries,
    };
    fs::write(&index_path, serde_json::to_string_pretty(&index)?)?;
    debug!("wrote {} images to {}", index.images.len(), root.display());
    Ok(())
}

/// Saves one plane as an 8-bit preview; the format comes from the extension.
pub fn save_preview(image: &Image, path: impl AsRef<Path>) -> Result<()> {
    write_preview(path.as_ref(), image)
}
