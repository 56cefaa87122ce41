use thiserror::Error;

/// Failures surfaced by pod queries.
#[derive(Debug, Error)]
pub enum PodQueryError {
    /// The pod list could not be fetched from the cluster.
    #[error("{0}")]
    SourceUnavailable(String),

    /// Carries the rejected value; the message itself is fixed.
    #[error("invalid value for sortBy param, should be name, age or restarts. default is name")]
    InvalidSortKey(String),
}

impl PodQueryError {
    pub fn source_unavailable(err: anyhow::Error) -> Self {
        // `{:#}` keeps the whole context chain on one line
        PodQueryError::SourceUnavailable(format!("{err:#}"))
    }
}
