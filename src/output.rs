//! Step output file writer

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use crate::error::OutputError;
use crate::version::ComparisonResult;

/// Append-only `key=value` output file shared with other CI steps
#[derive(Debug, Clone)]
pub struct StepOutput {
    path: PathBuf,
}

impl StepOutput {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Appends the comparison outputs, leaving existing lines untouched
    pub fn write(&self, result: &ComparisonResult) -> Result<(), OutputError> {
        self.append(&result.outputs())
    }

    /// Appends one `key=value` line per pair
    pub fn append(&self, pairs: &[(&str, &str)]) -> Result<(), OutputError> {
        let lines: String = pairs
            .iter()
            .map(|(key, value)| format!("{key}={value}\n"))
            .collect();

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| self.write_error(source))?;

        file.write_all(lines.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|source| self.write_error(source))
    }

    fn write_error(&self, source: std::io::Error) -> OutputError {
        OutputError::Write {
            path: self.path.clone(),
            source,
        }
    }
}
