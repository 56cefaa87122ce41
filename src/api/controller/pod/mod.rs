use axum::extract::{Path, State};
use axum::Json;
use tracing::{debug, warn};

use crate::app_state::AppState;
use crate::core::client::kube_resources::Pod;
use crate::domain::pod::sort_key::SortKey;
use crate::errors::AppError;

pub struct PodController;

impl PodController {
    /// Number of pods in the served namespace, as plain text.
    pub async fn count_pods(State(state): State<AppState>) -> Result<String, AppError> {
        let count = state.pod_service.count().await?;
        Ok(count.to_string())
    }

    /// Pods sorted by `name`, `age` or `restarts` (case-insensitive).
    pub async fn list_pods(
        State(state): State<AppState>,
        Path(sort): Path<String>,
    ) -> Result<Json<Vec<Pod>>, AppError> {
        // Reject bad keys before touching the cluster
        let key: SortKey = sort.parse::<SortKey>().inspect_err(|_| {
            warn!("Rejected sort key '{}'", sort);
        })?;
        Self::list_sorted(state, key).await
    }

    /// Pods sorted by name when no sort key is given.
    pub async fn list_pods_default(
        State(state): State<AppState>,
    ) -> Result<Json<Vec<Pod>>, AppError> {
        Self::list_sorted(state, SortKey::Name).await
    }

    async fn list_sorted(state: AppState, key: SortKey) -> Result<Json<Vec<Pod>>, AppError> {
        debug!("Listing pods sorted by {}", key);
        let pods = state.pod_service.list_sorted(key).await?;
        Ok(Json(pods))
    }
}
