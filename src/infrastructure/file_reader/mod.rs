//! Header readers

mod local_header_reader;

pub use local_header_reader::LocalHeaderReader;
