// Shared helpers for integration tests. Each test file pulls this in via
// `#[path = "../common/mod.rs"]`, so not every helper is used everywhere.
#![allow(dead_code)]

pub mod fixtures;

pub use libesam::test_support::{mock_esam, response_with_filler};
