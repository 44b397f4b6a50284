/// Promotion of `KEEP:` lines from a daily memory log into `MEMORY.md`.
///
/// A daily log marks durable facts with bullets like:
///
/// ```text
/// - KEEP: staging deploys hit prod directly
/// ```
///
/// Each run appends one `## Promoted` section listing those facts, tagged
/// with the daily log's file stem.
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;
use tracing::{debug, info};

use crate::paths;
use crate::types::PromoteOutput;

static KEEP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-*]\s*KEEP:\s*(.+?)\s*$").expect("valid KEEP pattern"));

/// Errors from promoting KEEP lines.
#[derive(Debug, Error)]
pub enum PromoteError {
    #[error("Daily file not found: {}", path.display())]
    DailyNotFound { path: PathBuf },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Collect the text of every `KEEP:` bullet, in order.
#[must_use]
pub fn keep_lines(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| KEEP_RE.captures(line))
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_owned())
        .collect()
}

/// Append the `## Promoted` section for `lines` to `existing` memory text.
#[must_use]
pub fn append_promoted(existing: &str, lines: &[String], stamp: &str) -> String {
    let mut updated = existing.to_owned();
    if !updated.is_empty() && !updated.ends_with('\n') {
        updated.push('\n');
    }
    updated.push_str("\n## Promoted\n\n");
    for line in lines {
        updated.push_str(&format!("- {line} (from {stamp})\n"));
    }
    updated
}

fn expand(path: &Path) -> Result<PathBuf, PromoteError> {
    paths::expand(path).map_err(|source| PromoteError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Promote the KEEP lines of `daily` into `memory`.
///
/// The memory file and its parent directories are created when missing.
/// Nothing is written when the daily log has no KEEP lines.
///
/// # Errors
///
/// Returns `PromoteError::DailyNotFound` if the daily log does not exist,
/// or `PromoteError::Io` if a file cannot be read or written.
pub fn promote(daily: &Path, memory: &Path) -> Result<PromoteOutput, PromoteError> {
    let daily_path = expand(daily)?;
    let memory_path = expand(memory)?;

    if !daily_path.exists() {
        return Err(PromoteError::DailyNotFound { path: daily_path });
    }

    let daily_text = read(&daily_path)?;
    let lines = keep_lines(&daily_text);
    debug!(daily = %daily_path.display(), count = lines.len(), "collected KEEP lines");

    if lines.is_empty() {
        return Ok(PromoteOutput {
            promoted: 0,
            memory: None,
            daily: None,
        });
    }

    let stamp = daily_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let existing = if memory_path.exists() {
        read(&memory_path)?
    } else {
        String::new()
    };
    let updated = append_promoted(&existing, &lines, &stamp);

    if let Some(parent) = memory_path.parent() {
        fs::create_dir_all(parent).map_err(|source| PromoteError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(&memory_path, updated).map_err(|source| PromoteError::Io {
        path: memory_path.clone(),
        source,
    })?;

    info!(memory = %memory_path.display(), promoted = lines.len(), "promoted KEEP lines");
    Ok(PromoteOutput {
        promoted: lines.len(),
        memory: Some(memory_path.display().to_string()),
        daily: Some(daily_path.display().to_string()),
    })
}

fn read(path: &Path) -> Result<String, PromoteError> {
    fs::read_to_string(path).map_err(|source| PromoteError::Io {
        path: path.to_path_buf(),
        source,
    })
}
