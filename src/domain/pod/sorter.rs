use std::cmp::Ordering;

use crate::core::client::kube_resources::{Pod, Time};
use crate::domain::pod::restarts::total_restarts;
use crate::domain::pod::sort_key::SortKey;

/// Sort pods ascending by `key`. Ties keep their fetched order.
pub fn sort_pods(mut pods: Vec<Pod>, key: SortKey) -> Vec<Pod> {
    match key {
        // restart totals are computed once per pod instead of once per comparison
        SortKey::Restarts => pods.sort_by_cached_key(total_restarts),
        _ => pods.sort_by(|a, b| compare_pods(a, b, key)),
    }
    pods
}

/// Pure comparator for two pods under `key`.
pub fn compare_pods(a: &Pod, b: &Pod, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => pod_name(a).cmp(pod_name(b)),
        SortKey::Age => compare_start_time(a, b),
        SortKey::Restarts => total_restarts(a).cmp(&total_restarts(b)),
    }
}

fn pod_name(pod: &Pod) -> &str {
    pod.metadata.name.as_deref().unwrap_or("")
}

fn start_time(pod: &Pod) -> Option<&Time> {
    pod.status.as_ref().and_then(|s| s.start_time.as_ref())
}

// Pods that have not started yet sort after every started pod.
fn compare_start_time(a: &Pod, b: &Pod) -> Ordering {
    match (start_time(a), start_time(b)) {
        (Some(ta), Some(tb)) => ta.cmp(&tb),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
