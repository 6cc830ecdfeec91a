//! Presentation layer
//!
//! Terminal user interface: command line parsing, menu and progress.

pub mod cli;
