//! Shared test fixtures for the swath-grid workspace.

pub mod swaths;

pub use swaths::{create_test_latitude, create_test_longitude};
