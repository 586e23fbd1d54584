pub mod probe;
pub mod report;
pub mod targets;

pub use probe::{ProbeLineCallback, ProbeOptions, execute_probe};
pub use report::{ReportError, RunMetadata, build_workbook, write_report, write_report_at};
pub use targets::default_targets;
