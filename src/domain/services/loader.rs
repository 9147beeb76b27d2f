use crate::domain::ports::Storage;
use crate::utils::error::{CostReportError, Result};
use serde_json::Value;

/// Parses raw export bytes as JSON without interpreting the layout.
pub fn parse_cost_document(bytes: &[u8]) -> Result<Value> {
    serde_json::from_slice(bytes).map_err(|e| CostReportError::DataError {
        message: e.to_string(),
    })
}

pub fn load_cost_document<S: Storage>(storage: &S, path: &str) -> Result<Value> {
    let bytes = storage.read_file(path)?;
    tracing::debug!("Read {} bytes from {}", bytes.len(), path);
    parse_cost_document(&bytes)
}
