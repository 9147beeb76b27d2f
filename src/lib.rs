pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, RunConfig};
pub use core::{etl::ReportEngine, pipeline::CostReportPipeline};
pub use domain::services::classifier::{classify, ServiceTier};
pub use utils::error::{CostReportError, Result};
