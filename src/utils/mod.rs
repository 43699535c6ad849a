//! Utility functions and helpers
//!
//! This module contains utility functions used throughout the crate.

pub mod query;
pub mod version;

pub use query::{percent_decode, query_item};
pub use version::{VERSION, get_version};
