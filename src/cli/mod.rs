//! Command line front-ends

pub mod resolve;

pub use resolve::{ResolveArgs, run_resolve_mode};
