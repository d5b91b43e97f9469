//! Testing infrastructure for recylog integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `TestWorld`: isolated database + CLI execution environment
//! - `fixtures`: sample record builders and CSV file helpers

pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
