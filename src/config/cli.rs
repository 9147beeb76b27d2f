use crate::core::Storage;
use crate::utils::error::{CostReportError, Result};
use std::fs;
use std::io::ErrorKind;

/// Reads and writes paths on the local filesystem as given.
///
/// Parent directories of written files are not created.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        fs::read(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => CostReportError::InputNotFound {
                path: path.to_string(),
            },
            _ => CostReportError::InputUnreadable {
                path: path.to_string(),
                source,
            },
        })
    }

    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        fs::write(path, data).map_err(|source| CostReportError::OutputWriteError {
            path: path.to_string(),
            source,
        })
    }
}
