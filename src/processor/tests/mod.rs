//! End-to-end tests for the processing engine.

pub mod error_handling;
