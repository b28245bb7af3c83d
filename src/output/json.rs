//! JSON report file.

use super::report::StatsReport;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs;
use std::path::Path;

/// Write the report of a scan as pretty JSON
///
/// **Public** - called by the scan command for `--json`
///
/// Missing parent directories are created. The whole document is written
/// with a single `write_all`, so a full disk surfaces as an error here.
///
/// # Errors
/// * `OutputError::InvalidPath` - empty path or an existing directory
/// * `OutputError::Io` - the file or its parents cannot be created or written
/// * `OutputError::Serialization` - the report cannot be encoded
pub fn write_report(report: &StatsReport, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let path = output_path.as_ref();

    check_target(path)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty() && !p.exists()) {
        debug!("Creating report directory {}", parent.display());
        fs::create_dir_all(parent).map_err(|source| OutputError::io(parent, source))?;
    }

    // encode first so that only filesystem failures remain once the file exists
    let mut body = serde_json::to_vec_pretty(report)?;
    body.push(b'\n');

    fs::write(path, &body).map_err(|source| OutputError::io(path, source))?;

    info!("Report for {} written to {} ({} bytes)", report.root, path.display(), body.len());
    Ok(())
}

/// Reject targets that can never hold a report
fn check_target(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("empty report path".to_string()));
    }

    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "{} is a directory",
            path.display()
        )));
    }

    Ok(())
}
