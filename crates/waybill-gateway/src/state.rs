use std::sync::Arc;

use waybill_generator::TrackingNumberService;

#[derive(Clone)]
pub struct AppState {
    service: Arc<dyn TrackingNumberService>,
}

impl AppState {
    pub fn new(service: Arc<dyn TrackingNumberService>) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &dyn TrackingNumberService {
        self.service.as_ref()
    }
}
