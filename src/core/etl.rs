use crate::core::{Pipeline, RunSummary};
use crate::utils::error::Result;

pub struct ReportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ReportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs extract, transform and load once, stopping at the first error.
    pub fn run(&self) -> Result<RunSummary> {
        tracing::info!("Loading cost data...");
        let document = self.pipeline.extract()?;

        tracing::info!("Building report...");
        let result = self.pipeline.transform(document)?;
        tracing::info!(
            "Aggregated {} services, total {:.2}, potential savings {:.2}/month",
            result.report.breakdown.services.len(),
            result.report.total_cost(),
            result.report.potential_monthly_savings()
        );

        let report = result.report.clone();

        tracing::info!("Writing report...");
        let output_path = self.pipeline.load(result)?;
        tracing::info!("Report saved to: {}", output_path);

        Ok(RunSummary::from_report(output_path, &report))
    }
}
