//! Domain services
//!
//! Core business logic services that operate on domain entities.

mod classifier;
mod signature_registry;

pub use classifier::{
    Classifier, EXTENSION_WIDTH, NAME_WIDTH, declared_extension, file_name, format_summary,
    is_spoofed,
};
pub use signature_registry::{BUILTIN_SIGNATURES, SignatureRegistry};
