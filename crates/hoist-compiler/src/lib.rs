//! JDK toolchain orchestration: discovery of an installed JDK, `javac`
//! invocation with diagnostic capture, and JAR packaging via the JDK's
//! `jar` tool.
//!
//! The toolchain is a black box to the rest of hoist: it either produces
//! the expected outputs or its own error is propagated unmodified.

pub mod jar;
pub mod javac;
pub mod jdk;
