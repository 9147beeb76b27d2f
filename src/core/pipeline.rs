use crate::core::{ConfigProvider, CostReport, Pipeline, Storage, TransformResult};
use crate::domain::services::aggregator::{aggregate, period_label};
use crate::domain::services::export::breakdown_to_csv;
use crate::domain::services::loader::load_cost_document;
use crate::domain::services::renderer::ReportRenderer;
use crate::utils::error::Result;
use chrono::Local;

pub struct CostReportPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    renderer: ReportRenderer,
}

impl<S: Storage, C: ConfigProvider> CostReportPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        let renderer = ReportRenderer::new(config.title(), config.currency_symbol());
        Self {
            storage,
            config,
            renderer,
        }
    }

    fn resolve_period_label(&self, document: &serde_json::Value) -> String {
        if let Some(label) = self.config.period_label() {
            return label.to_string();
        }
        period_label(document).unwrap_or_else(|| {
            tracing::debug!("No TimePeriod in document, labelling with the current month");
            Local::now().format("%B %Y").to_string()
        })
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for CostReportPipeline<S, C> {
    fn extract(&self) -> Result<serde_json::Value> {
        tracing::debug!("Reading cost export from {}", self.config.input_path());
        load_cost_document(&self.storage, self.config.input_path())
    }

    fn transform(&self, document: serde_json::Value) -> Result<TransformResult> {
        let breakdown = aggregate(&document, self.config.metric())?;
        let period_label = self.resolve_period_label(&document);
        let generated_at = self
            .config
            .generated_at()
            .unwrap_or_else(|| Local::now().naive_local());

        let report = CostReport::new(breakdown, period_label, generated_at);
        let html_output = self.renderer.render(&report);
        let csv_output = match self.config.csv_path() {
            Some(_) => Some(breakdown_to_csv(&report.breakdown)?),
            None => None,
        };

        Ok(TransformResult {
            report,
            html_output,
            csv_output,
        })
    }

    fn load(&self, result: TransformResult) -> Result<String> {
        let output_path = self.config.output_path();

        tracing::debug!(
            "Writing HTML report ({} bytes) to {}",
            result.html_output.len(),
            output_path
        );
        self.storage
            .write_file(output_path, result.html_output.as_bytes())?;

        if let (Some(csv_path), Some(csv_output)) = (self.config.csv_path(), &result.csv_output) {
            tracing::debug!("Writing CSV breakdown to {}", csv_path);
            self.storage.write_file(csv_path, csv_output.as_bytes())?;
        }

        Ok(output_path.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RunConfig;
    use crate::core::etl::ReportEngine;
    use crate::domain::services::classifier::ServiceTier;
    use crate::utils::error::CostReportError;
    use chrono::{NaiveDate, NaiveDateTime};
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn with_file(path: &str, data: &str) -> Self {
            let storage = Self::default();
            storage
                .files
                .lock()
                .unwrap()
                .insert(path.to_string(), data.as_bytes().to_vec());
            storage
        }

        fn get_file(&self, path: &str) -> Option<String> {
            let files = self.files.lock().unwrap();
            files
                .get(path)
                .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
        }
    }

    impl Storage for MockStorage {
        fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().unwrap();
            files
                .get(path)
                .cloned()
                .ok_or_else(|| CostReportError::InputNotFound {
                    path: path.to_string(),
                })
        }

        fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().unwrap();
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    const EXAMPLE_EXPORT: &str = r#"{
        "ResultsByTime": [{
            "TimePeriod": { "Start": "2025-09-01", "End": "2025-10-01" },
            "Groups": [
                { "Keys": ["Amazon Elastic Compute Cloud - Compute"],
                  "Metrics": { "BlendedCost": { "Amount": "100.00", "Unit": "USD" } } },
                { "Keys": ["AWS Config"],
                  "Metrics": { "BlendedCost": { "Amount": "20.00", "Unit": "USD" } } },
                { "Keys": ["Unknown Service"],
                  "Metrics": { "BlendedCost": { "Amount": "5.00", "Unit": "USD" } } },
                { "Keys": ["AWS Lambda"],
                  "Metrics": { "BlendedCost": { "Amount": "0.00", "Unit": "USD" } } }
            ]
        }]
    }"#;

    fn fixed_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 10, 1)
            .unwrap()
            .and_hms_opt(6, 0, 0)
            .unwrap()
    }

    fn config() -> RunConfig {
        let mut config = RunConfig::new("costs.json", "report.html");
        config.generated_at = Some(fixed_time());
        config
    }

    #[test]
    fn test_extract_reads_document() {
        let storage = MockStorage::with_file("costs.json", EXAMPLE_EXPORT);
        let pipeline = CostReportPipeline::new(storage, config());

        let document = pipeline.extract().unwrap();
        assert_eq!(document["ResultsByTime"][0]["Groups"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_extract_missing_input() {
        let pipeline = CostReportPipeline::new(MockStorage::default(), config());
        assert!(matches!(
            pipeline.extract().unwrap_err(),
            CostReportError::InputNotFound { .. }
        ));
    }

    #[test]
    fn test_extract_malformed_input() {
        let storage = MockStorage::with_file("costs.json", "{ not json");
        let pipeline = CostReportPipeline::new(storage, config());
        assert!(matches!(
            pipeline.extract().unwrap_err(),
            CostReportError::DataError { .. }
        ));
    }

    #[test]
    fn test_transform_example_figures() {
        let storage = MockStorage::with_file("costs.json", EXAMPLE_EXPORT);
        let pipeline = CostReportPipeline::new(storage, config());

        let document = pipeline.extract().unwrap();
        let result = pipeline.transform(document).unwrap();
        let report = &result.report;

        assert!((report.total_cost() - 125.0).abs() < 0.01);
        assert!((report.potential_monthly_savings() - 20.0).abs() < 0.01);
        assert!((report.potential_annual_savings() - 240.0).abs() < 0.01);
        assert_eq!(report.period_label, "September 2025");
        assert_eq!(report.breakdown.services.len(), 3);
        assert_eq!(report.services_in(ServiceTier::OptionalLowImpact).count(), 0);

        assert!(result.html_output.contains("Total Monthly Spend: $125.00"));
        assert!(!result.html_output.contains("Unknown Service"));
        assert!(!result.html_output.contains("AWS Lambda"));
        assert!(result.csv_output.is_none());
    }

    #[test]
    fn test_transform_without_high_impact_services() {
        let export = r#"{"ResultsByTime": [{"Groups": [
            { "Keys": ["Amazon Elastic Compute Cloud - Compute"],
              "Metrics": { "BlendedCost": { "Amount": "100.00" } } }
        ]}]}"#;
        let storage = MockStorage::with_file("costs.json", export);
        let pipeline = CostReportPipeline::new(storage, config());

        let result = pipeline.transform(pipeline.extract().unwrap()).unwrap();

        assert!(result
            .html_output
            .contains("<h2>💰 Potential Monthly Savings: $0.00</h2>"));
        assert!(result
            .html_output
            .contains("<p><strong>Annual Savings: $0.00</strong></p>"));
        assert!(result.html_output.contains("Total Monthly Spend: $100.00"));
    }

    #[test]
    fn test_transform_prefers_configured_period() {
        let storage = MockStorage::with_file("costs.json", EXAMPLE_EXPORT);
        let mut config = config();
        config.period_label = Some("Q3 close".to_string());
        let pipeline = CostReportPipeline::new(storage, config);

        let result = pipeline.transform(pipeline.extract().unwrap()).unwrap();
        assert_eq!(result.report.period_label, "Q3 close");
        assert!(result.html_output.contains("AWS Cost Optimization Report - Q3 close"));
    }

    #[test]
    fn test_transform_schema_error_propagates() {
        let storage = MockStorage::with_file("costs.json", r#"{"ResultsByTime": [{"Groups": [{}]}]}"#);
        let pipeline = CostReportPipeline::new(storage, config());

        let err = pipeline.transform(pipeline.extract().unwrap()).unwrap_err();
        assert!(matches!(err, CostReportError::SchemaError { .. }));
    }

    #[test]
    fn test_engine_writes_report_and_csv() {
        let storage = MockStorage::with_file("costs.json", EXAMPLE_EXPORT);
        let mut config = config();
        config.csv_path = Some("costs.csv".to_string());
        let engine = ReportEngine::new(CostReportPipeline::new(storage.clone(), config));

        let summary = engine.run().unwrap();

        assert_eq!(summary.output_path, "report.html");
        assert_eq!(summary.services, 3);
        assert!((summary.total_cost - 125.0).abs() < 0.01);

        let html = storage.get_file("report.html").unwrap();
        assert!(html.contains("Report generated on 2025-10-01 06:00:00"));

        let csv = storage.get_file("costs.csv").unwrap();
        assert!(csv.contains("Unknown Service,unclassified,5.00,60.00"));
    }

    #[test]
    fn test_engine_is_idempotent_with_fixed_timestamp() {
        let storage = MockStorage::with_file("costs.json", EXAMPLE_EXPORT);
        let engine = ReportEngine::new(CostReportPipeline::new(storage.clone(), config()));

        engine.run().unwrap();
        let first = storage.get_file("report.html").unwrap();
        engine.run().unwrap();
        let second = storage.get_file("report.html").unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_engine_writes_nothing_on_failure() {
        let storage = MockStorage::with_file("costs.json", r#"{"ResultsByTime": "oops"}"#);
        let engine = ReportEngine::new(CostReportPipeline::new(storage.clone(), config()));

        assert!(engine.run().is_err());
        assert!(storage.get_file("report.html").is_none());
    }
}
