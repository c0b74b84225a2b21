// Copyright © 2025 mailblast.io
// Licensed under MailBlast License Agreement v1.0
// Unauthorized copying, modification, or distribution is prohibited.

use crate::modules::engine::SendReport;
use crate::modules::error::code::ErrorCode;
use crate::modules::error::MailBlastResult;
use crate::raise_error;
use csv::Writer;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const PREVIEW_LIMIT: usize = 10;

pub fn log_summary(report: &SendReport) {
    info!(
        "Sent to {} recipients, failed for {}",
        report.succeeded.len(),
        report.failed.len()
    );

    if !report.succeeded.is_empty() {
        let preview: Vec<&str> = report
            .succeeded
            .iter()
            .take(PREVIEW_LIMIT)
            .map(String::as_str)
            .collect();
        info!(
            "Succeeded (first {}): {:?}",
            preview.len().min(PREVIEW_LIMIT),
            preview
        );
    }

    for failed in report.failed.iter().take(PREVIEW_LIMIT) {
        warn!("Failed '{}': {}", failed.address, failed.reason);
    }
    if report.failed.len() > PREVIEW_LIMIT {
        warn!("...and {} more failures", report.failed.len() - PREVIEW_LIMIT);
    }
}

/// Exports the partition as two tables: success.csv (one `Success` column)
/// and failed.csv (`Failed`, `Reason`).
pub fn write_report_files(
    report: &SendReport,
    output_dir: &Path,
) -> MailBlastResult<(PathBuf, PathBuf)> {
    let success_path = output_dir.join("success.csv");
    let failed_path = output_dir.join("failed.csv");

    let mut success_writer = open_writer(&success_path)?;
    success_writer
        .write_record(["Success"])
        .map_err(|e| write_error(&success_path, e))?;
    for address in &report.succeeded {
        success_writer
            .write_record([address])
            .map_err(|e| write_error(&success_path, e))?;
    }
    success_writer
        .flush()
        .map_err(|e| write_error(&success_path, csv::Error::from(e)))?;

    let mut failed_writer = open_writer(&failed_path)?;
    failed_writer
        .write_record(["Failed", "Reason"])
        .map_err(|e| write_error(&failed_path, e))?;
    for failed in &report.failed {
        failed_writer
            .write_record([&failed.address, &failed.reason])
            .map_err(|e| write_error(&failed_path, e))?;
    }
    failed_writer
        .flush()
        .map_err(|e| write_error(&failed_path, csv::Error::from(e)))?;

    Ok((success_path, failed_path))
}

fn open_writer(path: &Path) -> MailBlastResult<Writer<std::fs::File>> {
    Writer::from_path(path).map_err(|e| write_error(path, e))
}

fn write_error(path: &Path, error: csv::Error) -> crate::modules::error::MailBlastError {
    raise_error!(
        format!("Failed to write result file '{}': {}", path.display(), error),
        ErrorCode::InternalError
    )
}
