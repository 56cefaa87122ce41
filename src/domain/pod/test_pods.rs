//! Pod fixtures shared by the unit tests.

use crate::core::client::kube_resources::{ContainerStatus, ObjectMeta, Pod, PodStatus, Time};

pub fn pod(name: &str, started_at: Option<&str>, restarts: &[i32]) -> Pod {
    let start_time = started_at.map(|ts| {
        serde_json::from_value::<Time>(serde_json::Value::String(ts.to_string()))
            .expect("valid RFC 3339 timestamp")
    });

    let container_statuses = restarts
        .iter()
        .enumerate()
        .map(|(i, count)| ContainerStatus {
            name: format!("container-{i}"),
            restart_count: *count,
            ..Default::default()
        })
        .collect();

    Pod {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            namespace: Some("demo".to_string()),
            ..Default::default()
        },
        status: Some(PodStatus {
            start_time,
            container_statuses: Some(container_statuses),
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// `b` started first with 5 restarts, `c` 100s later with 3, `a` last with none.
pub fn reference_pods() -> Vec<Pod> {
    vec![
        pod("a", Some("2024-05-01T10:03:20Z"), &[0]),
        pod("b", Some("2024-05-01T10:00:00Z"), &[5]),
        pod("c", Some("2024-05-01T10:01:40Z"), &[3]),
    ]
}

pub fn names(pods: &[Pod]) -> Vec<&str> {
    pods.iter()
        .map(|p| p.metadata.name.as_deref().unwrap_or(""))
        .collect()
}
