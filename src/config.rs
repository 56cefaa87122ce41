use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_NAMESPACE: &str = "default";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Runtime settings, read from `POD_QUERY_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Namespace whose pods are served.
    pub namespace: String,
    pub bind_addr: SocketAddr,
    /// Explicit kubeconfig; the default client resolution is used when unset.
    pub kubeconfig: Option<PathBuf>,
    /// Directory for rolling log files; stdout only when unset.
    pub log_dir: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let namespace = get("POD_QUERY_NAMESPACE").unwrap_or_else(|| DEFAULT_NAMESPACE.to_string());

        let bind_raw = get("POD_QUERY_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .parse::<SocketAddr>()
            .with_context(|| format!("invalid POD_QUERY_BIND_ADDR '{}'", bind_raw))?;

        Ok(Self {
            namespace,
            bind_addr,
            kubeconfig: get("POD_QUERY_KUBECONFIG").map(PathBuf::from),
            log_dir: get("POD_QUERY_LOG_DIR").map(PathBuf::from),
        })
    }
}
