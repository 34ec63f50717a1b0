use std::path::Path;

use crate::formats::{read_dataset, save_preview, write_dataset};
use crate::model::{Datastore, Image};

use super::Result;

#[derive(Debug, Default, Clone, Copy)]
pub struct IoService;

impl IoService {
    pub fn read(&self, path: impl AsRef<Path>) -> Result<Datastore> {
        Ok(read_dataset(path)?)
    }

    pub fn write(&self, path: impl AsRef<Path>, dataset: &Datastore) -> Result<()> {
        write_dataset(path, dataset)?;
        Ok(())
    }

    pub fn save_preview(&self, image: &Image, path: impl AsRef<Path>) -> Result<()> {
        save_preview(image, path)?;
        Ok(())
    }
}
