use crate::domain::services::aggregator::DEFAULT_METRIC;
use crate::domain::services::renderer::{DEFAULT_CURRENCY_SYMBOL, DEFAULT_TITLE};
use crate::utils::error::{CostReportError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

/// Optional settings file. Every key has a default, so an empty file is valid.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportSettings {
    #[serde(default)]
    pub report: ReportSection,
    #[serde(default)]
    pub export: ExportSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportSection {
    pub title: Option<String>,
    pub currency_symbol: Option<String>,
    pub metric: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExportSection {
    pub csv_path: Option<String>,
}

impl ReportSettings {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| CostReportError::ConfigError {
                message: format!("cannot read settings file {}: {}", path.display(), e),
            })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CostReportError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CostReportError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn title(&self) -> &str {
        self.report.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    pub fn currency_symbol(&self) -> &str {
        self.report
            .currency_symbol
            .as_deref()
            .unwrap_or(DEFAULT_CURRENCY_SYMBOL)
    }

    pub fn metric(&self) -> &str {
        self.report.metric.as_deref().unwrap_or(DEFAULT_METRIC)
    }

    pub fn csv_path(&self) -> Option<&str> {
        self.export.csv_path.as_deref()
    }
}

impl Validate for ReportSettings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("report.title", self.title())?;
        validate_non_empty_string("report.currency_symbol", self.currency_symbol())?;
        validate_non_empty_string("report.metric", self.metric())?;
        if let Some(csv_path) = self.csv_path() {
            validate_path("export.csv_path", csv_path)?;
        }
        Ok(())
    }
}
