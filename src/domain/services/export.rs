use crate::domain::model::CostBreakdown;
use crate::utils::error::{CostReportError, Result};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    service: &'a str,
    tier: &'static str,
    monthly_cost: String,
    annual_cost: String,
}

/// One row per retained service, unclassified ones included, in the breakdown's order.
pub fn breakdown_to_csv(breakdown: &CostBreakdown) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for service in &breakdown.services {
        writer.serialize(CsvRow {
            service: &service.name,
            tier: service.tier().label(),
            monthly_cost: format!("{:.2}", service.cost),
            annual_cost: format!("{:.2}", service.annual_cost()),
        })?;
    }

    // Without rows serde never emits the header.
    if breakdown.services.is_empty() {
        writer.write_record(["service", "tier", "monthly_cost", "annual_cost"])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| CostReportError::CsvError(e.into_error().into()))?;
    String::from_utf8(bytes).map_err(|e| CostReportError::DataError {
        message: format!("CSV output is not UTF-8: {}", e),
    })
}
