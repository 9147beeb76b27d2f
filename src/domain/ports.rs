use crate::domain::model::{CostReport, TransformResult};
use crate::utils::error::Result;
use chrono::NaiveDateTime;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn csv_path(&self) -> Option<&str>;
    fn metric(&self) -> &str;
    fn title(&self) -> &str;
    fn currency_symbol(&self) -> &str;
    /// Explicit period label; `None` derives it from the document or the clock.
    fn period_label(&self) -> Option<&str>;
    /// Fixed generation time; `None` uses the local clock.
    fn generated_at(&self) -> Option<NaiveDateTime>;
}

pub trait Pipeline {
    fn extract(&self) -> Result<serde_json::Value>;
    fn transform(&self, document: serde_json::Value) -> Result<TransformResult>;
    fn load(&self, result: TransformResult) -> Result<String>;
}

/// Summary of a finished run, returned by the engine.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub output_path: String,
    pub services: usize,
    pub total_cost: f64,
    pub potential_monthly_savings: f64,
}

impl RunSummary {
    pub fn from_report(output_path: String, report: &CostReport) -> Self {
        Self {
            output_path,
            services: report.breakdown.services.len(),
            total_cost: report.total_cost(),
            potential_monthly_savings: report.potential_monthly_savings(),
        }
    }
}
