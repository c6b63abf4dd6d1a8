pub mod formatter;

pub use formatter::{DisplayReport, ReportFormatter};
