use crate::domain::model::{CostBreakdown, ServiceCost};
use crate::utils::error::{CostReportError, Result};
use chrono::NaiveDate;
use serde_json::Value;

pub const DEFAULT_METRIC: &str = "BlendedCost";

fn schema_error(path: impl Into<String>, message: impl Into<String>) -> CostReportError {
    CostReportError::SchemaError {
        path: path.into(),
        message: message.into(),
    }
}

fn required<'a>(value: &'a Value, key: &str, path: &str) -> Result<&'a Value> {
    value
        .get(key)
        .ok_or_else(|| schema_error(format!("{}.{}", path, key), "missing field"))
}

fn required_array<'a>(value: &'a Value, key: &str, path: &str) -> Result<&'a Vec<Value>> {
    required(value, key, path)?
        .as_array()
        .ok_or_else(|| schema_error(format!("{}.{}", path, key), "expected an array"))
}

/// Amounts arrive as decimal strings ("12.34") but plain JSON numbers are accepted too.
fn parse_amount(value: &Value, path: &str) -> Result<f64> {
    let amount = match value {
        Value::String(text) => text.trim().parse::<f64>().map_err(|_| {
            schema_error(path, format!("amount '{}' is not numeric", text))
        })?,
        Value::Number(number) => number
            .as_f64()
            .ok_or_else(|| schema_error(path, "amount is out of range"))?,
        other => {
            return Err(schema_error(
                path,
                format!("amount must be a number or numeric string, got {}", other),
            ))
        }
    };

    if !amount.is_finite() {
        return Err(schema_error(path, "amount is not a finite number"));
    }

    Ok(amount)
}

fn group_cost(group: &Value, metric: &str, path: &str) -> Result<ServiceCost> {
    let keys = required_array(group, "Keys", path)?;
    let name = keys
        .first()
        .ok_or_else(|| schema_error(format!("{}.Keys", path), "expected a service name"))?
        .as_str()
        .ok_or_else(|| schema_error(format!("{}.Keys[0]", path), "expected a string"))?;

    let metrics = required(group, "Metrics", path)?;
    let metric_path = format!("{}.Metrics", path);
    let metric_value = required(metrics, metric, &metric_path)?;
    let amount_path = format!("{}.{}.Amount", metric_path, metric);
    let amount = parse_amount(
        metric_value
            .get("Amount")
            .ok_or_else(|| schema_error(&amount_path, "missing field"))?,
        &amount_path,
    )?;

    Ok(ServiceCost::new(name, amount))
}

/// Flattens every group of every period into one cost list.
///
/// Non-positive amounts are dropped from both the list and the total. The list is
/// sorted by descending cost; equal costs keep their order of appearance.
pub fn aggregate(document: &Value, metric: &str) -> Result<CostBreakdown> {
    let periods = required_array(document, "ResultsByTime", "$")?;

    let mut services = Vec::new();
    let mut total_cost = 0.0;
    let mut skipped = 0usize;

    for (period_index, period) in periods.iter().enumerate() {
        let period_path = format!("ResultsByTime[{}]", period_index);
        let groups = required_array(period, "Groups", &period_path)?;

        for (group_index, group) in groups.iter().enumerate() {
            let group_path = format!("{}.Groups[{}]", period_path, group_index);
            let service = group_cost(group, metric, &group_path)?;

            if service.cost > 0.0 {
                total_cost += service.cost;
                services.push(service);
            } else {
                tracing::debug!(
                    "Skipping {} with non-positive cost {:.2}",
                    service.name,
                    service.cost
                );
                skipped += 1;
            }
        }
    }

    services.sort_by(|a, b| b.cost.total_cmp(&a.cost));

    tracing::debug!(
        "Aggregated {} services across {} periods ({} skipped)",
        services.len(),
        periods.len(),
        skipped
    );

    Ok(CostBreakdown {
        services,
        total_cost,
    })
}

/// "September 2025" from the first period's `TimePeriod.Start`, when present.
pub fn period_label(document: &Value) -> Option<String> {
    let start = document
        .get("ResultsByTime")?
        .as_array()?
        .first()?
        .get("TimePeriod")?
        .get("Start")?
        .as_str()?;

    NaiveDate::parse_from_str(start, "%Y-%m-%d")
        .ok()
        .map(|date| date.format("%B %Y").to_string())
}
