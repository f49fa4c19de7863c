//! Report assembly and rendering

pub mod formatter;
pub mod report;

pub use formatter::{resolve_save_path, save_report_to_file, suggest_filename, OutputFormatter, ReportGenerator};
pub use report::{ReportMetadata, ScoreReport};
