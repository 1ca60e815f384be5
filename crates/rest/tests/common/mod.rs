//! Common test utilities for API testing.
//!
//! - [`fixtures`] - The reference directory as JSON bodies
//! - [`harness`] - Test servers over SQLite and over a failing backend

#![allow(dead_code)]

pub mod fixtures;
pub mod harness;
