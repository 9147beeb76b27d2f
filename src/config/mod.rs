pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::{CostReportError, Result};
use crate::utils::validation::{
    validate_distinct_paths, validate_non_empty_string, validate_path, Validate,
};
use chrono::{DateTime, NaiveDateTime};
use toml_config::ReportSettings;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "cost-report")]
#[command(about = "Turn a cost breakdown export into a cost-optimization report")]
pub struct CliConfig {
    /// Cost breakdown JSON (ResultsByTime / Groups / Metrics)
    pub input_path: String,

    /// Destination of the HTML report, overwritten if present
    pub output_path: String,

    /// TOML settings file
    #[arg(long)]
    pub config: Option<String>,

    /// Period label shown in the report title, e.g. "September 2025"
    #[arg(long)]
    pub period: Option<String>,

    /// Fixed generation time ("YYYY-MM-DD HH:MM:SS" or RFC 3339)
    #[arg(long)]
    pub generated_at: Option<String>,

    /// Also write the cost breakdown as CSV
    #[arg(long)]
    pub csv: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

/// Everything a run needs, after merging the command line over the settings file.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input_path: String,
    pub output_path: String,
    pub csv_path: Option<String>,
    pub period_label: Option<String>,
    pub generated_at: Option<NaiveDateTime>,
    pub settings: ReportSettings,
}

impl RunConfig {
    pub fn new(input_path: impl Into<String>, output_path: impl Into<String>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            csv_path: None,
            period_label: None,
            generated_at: None,
            settings: ReportSettings::default(),
        }
    }

    #[cfg(feature = "cli")]
    pub fn from_cli(cli: &CliConfig) -> Result<Self> {
        let settings = match &cli.config {
            Some(path) => {
                tracing::debug!("Loading settings from {}", path);
                ReportSettings::from_file(path)?
            }
            None => ReportSettings::default(),
        };

        let generated_at = cli
            .generated_at
            .as_deref()
            .map(parse_timestamp)
            .transpose()?;

        Ok(Self {
            input_path: cli.input_path.clone(),
            output_path: cli.output_path.clone(),
            csv_path: cli
                .csv
                .clone()
                .or_else(|| settings.csv_path().map(str::to_string)),
            period_label: cli.period.clone(),
            generated_at,
            settings,
        })
    }
}

/// Accepts the report's own "%Y-%m-%d %H:%M:%S" form or RFC 3339 (offset dropped).
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| DateTime::parse_from_rfc3339(value).map(|dt| dt.naive_local()))
        .map_err(|e| CostReportError::InvalidConfigValueError {
            field: "generated_at".to_string(),
            value: value.to_string(),
            reason: format!("Unrecognized timestamp: {}", e),
        })
}

impl ConfigProvider for RunConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn csv_path(&self) -> Option<&str> {
        self.csv_path.as_deref()
    }

    fn metric(&self) -> &str {
        self.settings.metric()
    }

    fn title(&self) -> &str {
        self.settings.title()
    }

    fn currency_symbol(&self) -> &str {
        self.settings.currency_symbol()
    }

    fn period_label(&self) -> Option<&str> {
        self.period_label.as_deref()
    }

    fn generated_at(&self) -> Option<NaiveDateTime> {
        self.generated_at
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input_path", &self.input_path)?;
        validate_path("output_path", &self.output_path)?;
        if let Some(csv_path) = &self.csv_path {
            validate_path("csv_path", csv_path)?;
            validate_distinct_paths("csv_path", csv_path, &self.output_path)?;
        }
        if let Some(period) = &self.period_label {
            validate_non_empty_string("period", period)?;
        }
        self.settings.validate()
    }
}
