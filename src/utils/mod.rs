//! # Utilities Module
//!
//! Grid search helpers shared by generation and tests.

pub mod paths;

pub use paths::*;
