use std::sync::Arc;

use crate::core::client::pods::PodSource;
use crate::domain::pod::service::PodQueryService;

#[derive(Clone)]
pub struct AppState {
    pub pod_service: Arc<PodQueryService>,
}

pub fn build_app_state(source: Arc<dyn PodSource>, namespace: &str) -> AppState {
    AppState {
        pod_service: Arc::new(PodQueryService::new(source, namespace)),
    }
}
