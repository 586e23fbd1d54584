// Spreadsheet report for a finished probe run

use chrono::{Local, NaiveDateTime};
use rust_xlsxwriter::{Format, Workbook, XlsxError};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, info};
use wafprobe_scanner::ProbeResult;

pub const METADATA_SHEET: &str = "Metadata";
pub const RESULTS_SHEET: &str = "Results";
pub const RESULTS_HEADER: [&str; 4] = ["order", "label", "status/error", "description"];

const FILE_PREFIX: &str = "awswaf_webtest_";

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to build workbook: {0}")]
    Xlsx(#[from] XlsxError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to save {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: tempfile::PersistError,
    },
}

/// Run-level information written to the metadata sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunMetadata {
    pub domain: String,
    pub executed_at: NaiveDateTime,
}

impl RunMetadata {
    pub fn new(domain: impl Into<String>, executed_at: NaiveDateTime) -> Self {
        Self {
            domain: domain.into(),
            executed_at,
        }
    }

    /// Stamp the run with the local wall clock
    pub fn now(domain: impl Into<String>) -> Self {
        Self::new(domain, Local::now().naive_local())
    }

    pub fn display_timestamp(&self) -> String {
        self.executed_at.format("%Y-%m-%d %H:%M:%S").to_string()
    }

    pub fn file_stamp(&self) -> String {
        self.executed_at.format("%Y%m%d_%H%M").to_string()
    }

    pub fn file_name(&self) -> String {
        format!("{}{}.xlsx", FILE_PREFIX, self.file_stamp())
    }
}

/// Render the two-sheet workbook into memory.
///
/// The metadata sheet has no header row. The results sheet has one header
/// row followed by one row per result, in the order given.
pub fn build_workbook(metadata: &RunMetadata, results: &[ProbeResult]) -> Result<Vec<u8>, ReportError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let sheet = workbook.add_worksheet();
    sheet.set_name(METADATA_SHEET)?;
    sheet.write_string(0, 0, "target domain")?;
    sheet.write_string(0, 1, &metadata.domain)?;
    sheet.write_string(1, 0, "executed at")?;
    sheet.write_string(1, 1, metadata.display_timestamp())?;
    sheet.set_column_width(0, 16.0)?;
    sheet.set_column_width(1, 40.0)?;

    let sheet = workbook.add_worksheet();
    sheet.set_name(RESULTS_SHEET)?;
    for (col, title) in RESULTS_HEADER.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *title, &header_format)?;
    }

    for (index, result) in results.iter().enumerate() {
        let row = (index + 1) as u32;
        sheet.write_number(row, 0, result.order as f64)?;
        sheet.write_string(row, 1, &result.label)?;
        sheet.write_string(row, 2, result.outcome.status_cell())?;
        sheet.write_string(row, 3, &result.description)?;
    }
    sheet.set_column_width(1, 50.0)?;
    sheet.set_column_width(2, 20.0)?;
    sheet.set_column_width(3, 24.0)?;

    debug!("Built workbook with {} result rows", results.len());
    Ok(workbook.save_to_buffer()?)
}

/// Write the report into `dir`, named after the run timestamp.
///
/// The document goes to a temporary file in the same directory first and is
/// renamed into place, so the final path either holds a complete workbook or
/// does not exist.
pub fn write_report_at(
    dir: &Path,
    metadata: &RunMetadata,
    results: &[ProbeResult],
) -> Result<PathBuf, ReportError> {
    let buffer = build_workbook(metadata, results)?;
    let path = dir.join(metadata.file_name());

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(&buffer)?;
    file.as_file().sync_all()?;
    file.persist(&path).map_err(|source| ReportError::Persist {
        path: path.clone(),
        source,
    })?;

    info!("Report written to {} ({} bytes)", path.display(), buffer.len());
    Ok(path)
}

/// Stamp the run now and write the report into the working directory
pub fn write_report(domain: &str, results: &[ProbeResult]) -> Result<PathBuf, ReportError> {
    let metadata = RunMetadata::now(domain);
    let dir = std::env::current_dir()?;
    write_report_at(&dir, &metadata, results)
}
