//! Core data types for the hoist publishing tool.
//!
//! This crate defines the types that describe a hoist project: the
//! `Hoist.toml` manifest, the project's publication identity, and the
//! key-value property files that feed credential resolution.
//!
//! This crate is intentionally free of async code and network I/O.

pub mod identity;
pub mod manifest;
pub mod properties;
