//! Test infrastructure for the persistence layer.
//!
//! Shared fixtures and helpers for running directory searches against real
//! and in-memory storage.

#![allow(dead_code)]

pub mod fixtures;
pub mod harness;

// Re-export commonly used items
pub use fixtures::*;
pub use harness::*;
