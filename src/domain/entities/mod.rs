//! Domain entities
//!
//! Core business objects that represent the fundamental concepts
//! in the spoof detection domain.

mod audit_report;
mod file_signature;
mod verdict;

pub use audit_report::AuditReport;
pub use file_signature::{FileSignature, UNKNOWN_TYPE};
pub use verdict::{HEADER_LEN, HeaderBytes, Verdict};
