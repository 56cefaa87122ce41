use std::path::Path;

use anyhow::{Context, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config};
use tracing::debug;

/// Creates a Kubernetes client, either from an explicit kubeconfig file or from
/// the default resolution chain (in-cluster service account, then `~/.kube/config`).
pub async fn build_kube_client(kubeconfig: Option<&Path>) -> Result<Client> {
    let client = match kubeconfig {
        Some(path) => {
            debug!("Using kubeconfig from {}", path.display());
            let kubeconfig = Kubeconfig::read_from(path)
                .with_context(|| format!("failed to read kubeconfig {}", path.display()))?;
            let config =
                Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default()).await?;
            Client::try_from(config)?
        }
        None => {
            debug!("Using default client configuration");
            Client::try_default().await?
        }
    };

    debug!("Kubernetes client initialized successfully");
    Ok(client)
}
