use std::sync::Arc;

use tracing::{debug, warn};

use crate::core::client::kube_resources::Pod;
use crate::core::client::pods::PodSource;
use crate::domain::pod::error::PodQueryError;
use crate::domain::pod::sort_key::SortKey;
use crate::domain::pod::sorter::sort_pods;

/// Answers pod queries for a single, fixed namespace.
///
/// Holds no per-request state: every call fetches the pod list again.
pub struct PodQueryService {
    source: Arc<dyn PodSource>,
    namespace: String,
}

impl PodQueryService {
    pub fn new(source: Arc<dyn PodSource>, namespace: impl Into<String>) -> Self {
        Self {
            source,
            namespace: namespace.into(),
        }
    }

    pub async fn count(&self) -> Result<usize, PodQueryError> {
        let pods = self.fetch().await?;
        Ok(pods.len())
    }

    pub async fn list_sorted(&self, key: SortKey) -> Result<Vec<Pod>, PodQueryError> {
        let pods = self.fetch().await?;
        debug!("Sorting {} pod(s) by {}", pods.len(), key);
        Ok(sort_pods(pods, key))
    }

    async fn fetch(&self) -> Result<Vec<Pod>, PodQueryError> {
        self.source.list_pods(&self.namespace).await.map_err(|err| {
            warn!("Failed to list pods in namespace '{}': {:#}", self.namespace, err);
            PodQueryError::source_unavailable(err)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pod::test_pods::{names, reference_pods};
    use anyhow::{anyhow, Result};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockPodSource {
        pods: Vec<Pod>,
        fail_with: Option<String>,
        calls: AtomicUsize,
        namespaces: Mutex<Vec<String>>,
    }

    impl MockPodSource {
        fn with_pods(pods: Vec<Pod>) -> Self {
            Self {
                pods,
                ..Default::default()
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                fail_with: Some(message.to_string()),
                ..Default::default()
            }
        }
    }

    #[async_trait]
    impl PodSource for MockPodSource {
        async fn list_pods(&self, namespace: &str) -> Result<Vec<Pod>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.namespaces.lock().unwrap().push(namespace.to_string());
            match &self.fail_with {
                Some(message) => Err(anyhow!(message.clone())),
                None => Ok(self.pods.clone()),
            }
        }
    }

    fn service(source: &Arc<MockPodSource>) -> PodQueryService {
        PodQueryService::new(source.clone(), "demo")
    }

    #[tokio::test]
    async fn count_returns_number_of_fetched_pods() {
        let source = Arc::new(MockPodSource::with_pods(reference_pods()));
        let svc = service(&source);

        assert_eq!(svc.count().await.unwrap(), 3);
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn queries_use_configured_namespace() {
        let source = Arc::new(MockPodSource::with_pods(reference_pods()));
        let svc = service(&source);

        svc.count().await.unwrap();
        svc.list_sorted(SortKey::Name).await.unwrap();

        assert_eq!(*source.namespaces.lock().unwrap(), vec!["demo", "demo"]);
    }

    #[tokio::test]
    async fn list_sorted_orders_reference_pods() {
        let source = Arc::new(MockPodSource::with_pods(reference_pods()));
        let svc = service(&source);

        let by_name = svc.list_sorted(SortKey::Name).await.unwrap();
        let by_age = svc.list_sorted(SortKey::Age).await.unwrap();
        let by_restarts = svc.list_sorted(SortKey::Restarts).await.unwrap();

        assert_eq!(names(&by_name), vec!["a", "b", "c"]);
        assert_eq!(names(&by_age), vec!["b", "c", "a"]);
        assert_eq!(names(&by_restarts), vec!["a", "c", "b"]);
    }

    #[tokio::test]
    async fn every_call_fetches_again() {
        let source = Arc::new(MockPodSource::with_pods(reference_pods()));
        let svc = service(&source);

        for key in [SortKey::Name, SortKey::Age, SortKey::Restarts] {
            let pods = svc.list_sorted(key).await.unwrap();
            assert_eq!(pods.len(), svc.count().await.unwrap());
        }
        assert_eq!(source.calls.load(Ordering::SeqCst), 6);
    }

    #[tokio::test]
    async fn source_failure_surfaces_as_source_unavailable() {
        let source = Arc::new(MockPodSource::failing("pods is forbidden"));
        let svc = service(&source);

        let count_err = svc.count().await.unwrap_err();
        let list_err = svc.list_sorted(SortKey::Age).await.unwrap_err();

        assert!(matches!(count_err, PodQueryError::SourceUnavailable(ref m) if m == "pods is forbidden"));
        assert!(matches!(list_err, PodQueryError::SourceUnavailable(_)));
    }

    #[tokio::test]
    async fn empty_namespace_counts_zero() {
        let source = Arc::new(MockPodSource::default());
        let svc = service(&source);

        assert_eq!(svc.count().await.unwrap(), 0);
        assert!(svc.list_sorted(SortKey::Restarts).await.unwrap().is_empty());
    }
}
