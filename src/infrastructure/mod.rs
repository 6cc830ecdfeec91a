//! Infrastructure layer
//!
//! Concrete implementations of the domain repositories.
//! This layer contains all filesystem access.

pub mod file_reader;
pub mod persistence;
