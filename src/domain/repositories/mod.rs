//! Repository traits (interfaces)
//!
//! These traits define the contracts for external dependencies.
//! They follow the Dependency Inversion Principle (DIP) from SOLID.

mod header_reader;
mod report_writer;

pub use header_reader::HeaderReader;
pub use report_writer::{ReportError, ReportWriter};
