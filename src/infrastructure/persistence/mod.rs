//! Report persistence

mod report_writer;

pub use report_writer::{
    DEFAULT_REPORT_PATH, JsonReportWriter, TextReportWriter, render_text,
};
