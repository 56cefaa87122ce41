/// Re-export the Kubernetes resource types used by the pod queries.
pub use k8s_openapi::api::core::v1::{ContainerStatus, Pod, PodStatus};

pub use k8s_openapi::apimachinery::pkg::apis::meta::v1::{ObjectMeta, Time};
