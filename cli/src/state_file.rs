//! JSON persistence for locally recorded review statuses.
//!
//! A missing file is an empty store; an unreadable or malformed one is an
//! error, so a typo in `--state-file` never silently discards reviews.

#[cfg(test)]
#[path = "state_file_test.rs"]
mod state_file_test;

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use kanban::StatusOverrides;

use crate::CliError;

pub fn load(path: &Path) -> Result<StatusOverrides, CliError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(StatusOverrides::default()),
        Err(source) => return Err(CliError::StateFile { path: path.to_path_buf(), source }),
    };
    Ok(serde_json::from_str(&raw)?)
}

pub fn save(path: &Path, overrides: &StatusOverrides) -> Result<(), CliError> {
    let raw = serde_json::to_string_pretty(overrides)?;
    fs::write(path, raw).map_err(|source| CliError::StateFile { path: path.to_path_buf(), source })
}
