//! Maven repository publishing: URL layout, layered credential resolution,
//! artifact assembly, checksum sidecars, and authenticated upload.

pub mod artifact;
pub mod auth;
pub mod checksum;
pub mod credentials;
pub mod publish;
pub mod repository;
