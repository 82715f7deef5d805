use crate::core::ports::{LeaveSource, PunchSource};
use crate::core::report::ReportLogic;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, ensure_writable, export_csv, export_json, report_rows};
use crate::models::window::DateWindow;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export of an aggregated report.
pub struct ExportLogic;

impl ExportLogic {
    /// Aggregate `window` and write the rows to `file`.
    ///
    /// Returns the number of rows written (zero when nothing was found).
    pub fn export<S>(
        store: &S,
        format: ExportFormat,
        file: &str,
        window: &DateWindow,
        worker: Option<&str>,
        force: bool,
    ) -> AppResult<usize>
    where
        S: PunchSource + LeaveSource,
    {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let report = ReportLogic::build(store, window, worker, None)?;

        if report.workers.is_empty() {
            warning("No punches or leave found for the selected range.");
            return Ok(0);
        }

        let rows = report_rows(&report);

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(rows.len())
    }
}
