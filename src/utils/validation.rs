use crate::utils::error::{CostReportError, Result};
use std::path::{Component, Path, PathBuf};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(CostReportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(CostReportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CostReportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Resolves the parent directory when it exists, so `dir/./r.html` and `dir/r.html` compare
/// equal. Paths under a missing directory are only normalized lexically.
fn normalized_path(path: &str) -> PathBuf {
    let path = Path::new(path);
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    match (parent.canonicalize(), path.file_name()) {
        (Ok(dir), Some(name)) => dir.join(name),
        _ => path
            .components()
            .filter(|component| !matches!(component, Component::CurDir))
            .collect(),
    }
}

/// Two outputs pointing at the same file would silently clobber each other.
pub fn validate_distinct_paths(field_name: &str, path: &str, other: &str) -> Result<()> {
    if normalized_path(path) == normalized_path(other) {
        return Err(CostReportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Must differ from the report output path".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("input_path", "costs.json").is_ok());
        assert!(validate_path("input_path", "").is_err());
        assert!(validate_path("input_path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("report.metric", "BlendedCost").is_ok());
        assert!(validate_non_empty_string("report.metric", "   ").is_err());
    }

    #[test]
    fn test_validate_distinct_paths() {
        assert!(validate_distinct_paths("export.csv_path", "a.csv", "a.html").is_ok());
        assert!(validate_distinct_paths("export.csv_path", "a.html", "a.html").is_err());
    }

    #[test]
    fn test_validate_distinct_paths_sees_through_aliases() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let dir = temp_dir.path().to_str().unwrap();
        let report = format!("{}/r.html", dir);

        assert!(validate_distinct_paths("csv", &format!("{}/./r.html", dir), &report).is_err());
        assert!(validate_distinct_paths("csv", &format!("{}//r.html", dir), &report).is_err());

        std::fs::create_dir(temp_dir.path().join("sub")).unwrap();
        assert!(validate_distinct_paths("csv", &format!("{}/sub/../r.html", dir), &report).is_err());
        assert!(validate_distinct_paths("csv", &format!("{}/sub/r.html", dir), &report).is_ok());
        assert!(validate_distinct_paths("csv", &format!("{}/r.csv", dir), &report).is_ok());
    }

    #[test]
    fn test_validate_distinct_paths_under_missing_directory() {
        assert!(validate_distinct_paths("csv", "no-such-dir/./r.html", "no-such-dir/r.html").is_err());
        assert!(validate_distinct_paths("csv", "./report.html", "report.html").is_err());
        assert!(validate_distinct_paths("csv", "no-such-dir/r.csv", "no-such-dir/r.html").is_ok());
    }
}
