pub mod pod_query_service;

pub use pod_query_service::PodQueryService;
