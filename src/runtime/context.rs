use super::{CropService, DatasetService, IoService};

#[derive(Debug, Clone, Default)]
pub struct AppContext {
    dataset_service: DatasetService,
    io_service: IoService,
    crop_service: CropService,
}

impl AppContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dataset_service(&self) -> &DatasetService {
        &self.dataset_service
    }

    pub fn io_service(&self) -> &IoService {
        &self.io_service
    }

    pub fn crop_service(&self) -> &CropService {
        &self.crop_service
    }
}
