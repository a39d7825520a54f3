//! File-facing collaborators: sequence loaders and report writers

pub mod report;
pub mod sequence;

pub use report::{render_json, render_text, write_report, ReportFormat, ReportTarget};
pub use sequence::{parse_queries, parse_reference, read_queries, read_reference};
