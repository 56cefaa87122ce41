//! Pod routes (e.g., /pods/*)

use axum::{routing::get, Router};
use crate::api::controller::pod::PodController;
use crate::app_state::AppState;

pub fn pod_routes() -> Router<AppState> {
    Router::new()
        .route("/count", get(PodController::count_pods))
        .route("/list", get(PodController::list_pods_default))
        .route("/list/", get(PodController::list_pods_default))
        .route("/list/{sort}", get(PodController::list_pods))
}
