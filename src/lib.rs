//! Blockfall (workspace facade crate).
//!
//! Re-exports the engine crates under stable `blockfall::{core, types}` paths so
//! tests, benches, and downstream callers depend on a single package.

pub use blockfall_core as core;
pub use blockfall_types as types;
