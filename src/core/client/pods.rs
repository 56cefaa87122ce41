use anyhow::Result;
use async_trait::async_trait;
use kube::api::ListParams;
use kube::{Api, Client};
use tracing::debug;

use crate::core::client::kube_resources::Pod;

/// Source of the current pod list for a namespace.
///
/// Implementations must be safe to call concurrently; every call is expected
/// to hit the backing store, nothing is cached.
#[async_trait]
pub trait PodSource: Send + Sync {
    async fn list_pods(&self, namespace: &str) -> Result<Vec<Pod>>;
}

/// [`PodSource`] backed by the cluster API server.
#[derive(Clone)]
pub struct KubePodSource {
    client: Client,
}

impl KubePodSource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PodSource for KubePodSource {
    async fn list_pods(&self, namespace: &str) -> Result<Vec<Pod>> {
        fetch_pods_by_namespace(&self.client, namespace).await
    }
}

/// Fetch pods in a specific namespace
pub async fn fetch_pods_by_namespace(client: &Client, namespace: &str) -> Result<Vec<Pod>> {
    let pods: Api<Pod> = Api::namespaced(client.clone(), namespace);
    let pod_list = pods.list(&ListParams::default()).await?;

    debug!("Discovered {} pod(s) in namespace '{}'", pod_list.items.len(), namespace);
    Ok(pod_list.items)
}
