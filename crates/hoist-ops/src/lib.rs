//! High-level operations wiring the CLI to the hoist subsystems.
//!
//! Each `ops_*` module implements one user-facing operation end to end;
//! the CLI crate stays a thin argument-parsing layer.

pub mod ops_build;
pub mod ops_publish;
