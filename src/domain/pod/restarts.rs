use crate::core::client::kube_resources::Pod;

/// Total restarts across all containers of a pod.
///
/// A pod without status or without container statuses has 0 restarts.
pub fn total_restarts(pod: &Pod) -> u64 {
    pod.status
        .as_ref()
        .and_then(|s| s.container_statuses.as_ref())
        .map(|statuses| {
            statuses
                .iter()
                .map(|c| u64::try_from(c.restart_count).unwrap_or(0))
                .sum()
        })
        .unwrap_or(0)
}
