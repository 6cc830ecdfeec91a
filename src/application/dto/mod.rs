//! Data Transfer Objects

mod audit_options;

pub use audit_options::{AuditOptions, ReportFormat};
