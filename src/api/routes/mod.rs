//! API route declarations (e.g., /pods/*)

pub mod pod_routes;
