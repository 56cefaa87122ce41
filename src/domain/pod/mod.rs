//! Pod retrieval and ordering.

pub mod error;
pub mod restarts;
pub mod service;
pub mod sort_key;
pub mod sorter;

#[cfg(test)]
pub(crate) mod test_pods;
