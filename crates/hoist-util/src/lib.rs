//! Shared utilities for the hoist publishing tool.
//!
//! This crate provides the cross-cutting concerns used by all other hoist
//! crates: the unified error type, process spawning for the JDK tools, and
//! terminal status output.

pub mod errors;
pub mod process;
pub mod progress;
