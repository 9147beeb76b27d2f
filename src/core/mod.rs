pub mod etl;
pub mod pipeline;

pub use crate::domain::model::{CostBreakdown, CostReport, ServiceCost, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, RunSummary, Storage};
pub use crate::utils::error::Result;
