use crate::domain::services::classifier::{classify, ServiceTier};
use chrono::NaiveDateTime;

/// Months per year, used for every annualized figure.
pub const MONTHS_PER_YEAR: f64 = 12.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceCost {
    pub name: String,
    pub cost: f64,
}

impl ServiceCost {
    pub fn new(name: impl Into<String>, cost: f64) -> Self {
        Self {
            name: name.into(),
            cost,
        }
    }

    pub fn annual_cost(&self) -> f64 {
        self.cost * MONTHS_PER_YEAR
    }

    pub fn tier(&self) -> ServiceTier {
        classify(&self.name)
    }
}

/// Retained services sorted by descending cost, plus their sum.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CostBreakdown {
    pub services: Vec<ServiceCost>,
    pub total_cost: f64,
}

#[derive(Debug, Clone)]
pub struct CostReport {
    pub breakdown: CostBreakdown,
    pub period_label: String,
    pub generated_at: NaiveDateTime,
}

impl CostReport {
    pub fn new(
        breakdown: CostBreakdown,
        period_label: String,
        generated_at: NaiveDateTime,
    ) -> Self {
        Self {
            breakdown,
            period_label,
            generated_at,
        }
    }

    /// Services of one tier, in the breakdown's sorted order.
    pub fn services_in(&self, tier: ServiceTier) -> impl Iterator<Item = &ServiceCost> + '_ {
        self.breakdown
            .services
            .iter()
            .filter(move |service| service.tier() == tier)
    }

    pub fn total_cost(&self) -> f64 {
        self.breakdown.total_cost
    }

    pub fn potential_monthly_savings(&self) -> f64 {
        // An empty f64 sum is -0.0, which would print as "-0.00".
        self.services_in(ServiceTier::OptionalHighImpact)
            .fold(0.0, |acc, service| acc + service.cost)
    }

    pub fn potential_annual_savings(&self) -> f64 {
        self.potential_monthly_savings() * MONTHS_PER_YEAR
    }
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub report: CostReport,
    pub html_output: String,
    pub csv_output: Option<String>,
}
