//! HTML rendering of a [`CostReport`].
//!
//! The document is self-contained: styles are inlined so it can be mailed or opened as-is.

use crate::domain::model::CostReport;
use crate::domain::services::classifier::ServiceTier;
use std::fmt::{self, Write};

pub const DEFAULT_TITLE: &str = "AWS Cost Optimization Report";
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Low-impact services above this monthly cost are flagged for review.
pub const REVIEW_THRESHOLD: f64 = 5.0;

pub const CUT_NOW_MARKER: &str = "✂️ CUT NOW";
pub const ESSENTIAL_MARKER: &str = "✅ ESSENTIAL";

const STYLE: &str = r#"        body { font-family: Arial, sans-serif; margin: 20px; }
        .header { color: #2c3e50; }
        .cost-high { color: #e74c3c; font-weight: bold; }
        .cost-medium { color: #f39c12; }
        .cost-low { color: #27ae60; }
        .savings { background: #d5f4e6; padding: 10px; border-radius: 5px; margin: 10px 0; }
        table { border-collapse: collapse; width: 100%; }
        th, td { border: 1px solid #ddd; padding: 8px; text-align: left; }
        th { background-color: #f2f2f2; }
        .essential { background-color: #e8f5e8; }
        .optional-high { background-color: #ffe8e8; }
        .optional-low { background-color: #fff3cd; }
"#;

pub fn low_impact_recommendation(cost: f64) -> &'static str {
    if cost > REVIEW_THRESHOLD {
        "Consider reviewing"
    } else {
        "Monitor"
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[derive(Debug, Clone)]
pub struct ReportRenderer {
    title: String,
    currency_symbol: String,
}

impl Default for ReportRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE, DEFAULT_CURRENCY_SYMBOL)
    }
}

impl ReportRenderer {
    pub fn new(title: impl Into<String>, currency_symbol: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            currency_symbol: currency_symbol.into(),
        }
    }

    fn money(&self, amount: f64) -> String {
        format!("{}{:.2}", html_escape(&self.currency_symbol), amount)
    }

    pub fn render(&self, report: &CostReport) -> String {
        let mut html = String::new();
        let _ = self.write_document(&mut html, report);
        html
    }

    fn write_document(&self, html: &mut String, report: &CostReport) -> fmt::Result {
        write!(
            html,
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>{title} - {period}</title>
    <style>
{style}    </style>
</head>
<body>
    <h1 class="header">🎯 {title} - {period}</h1>

    <div class="savings">
        <h2>💰 Potential Monthly Savings: {monthly}</h2>
        <p><strong>Annual Savings: {annual}</strong></p>
    </div>

    <h2>📊 Total Monthly Spend: {total}</h2>
"#,
            title = html_escape(&self.title),
            period = html_escape(&report.period_label),
            style = STYLE,
            monthly = self.money(report.potential_monthly_savings()),
            annual = self.money(report.potential_annual_savings()),
            total = self.money(report.total_cost()),
        )?;

        self.write_high_impact(html, report)?;
        self.write_essential(html, report)?;
        self.write_low_impact(html, report)?;

        write!(
            html,
            r#"
    <p><em>Report generated on {}</em></p>
</body>
</html>
"#,
            report.generated_at.format("%Y-%m-%d %H:%M:%S")
        )
    }

    fn write_high_impact(&self, html: &mut String, report: &CostReport) -> fmt::Result {
        html.push_str(
            r#"
    <h2>🔥 High Impact Removals (Safe to Cut)</h2>
    <table id="high-impact">
        <tr><th>Service</th><th>Monthly Cost</th><th>Annual Cost</th><th>Action</th></tr>
"#,
        );
        for service in report.services_in(ServiceTier::OptionalHighImpact) {
            writeln!(
                html,
                r#"        <tr class="optional-high"><td>{}</td><td class="cost-high">{}</td><td class="cost-high">{}</td><td>{}</td></tr>"#,
                html_escape(&service.name),
                self.money(service.cost),
                self.money(service.annual_cost()),
                CUT_NOW_MARKER
            )?;
        }
        html.push_str("    </table>\n");
        Ok(())
    }

    fn write_essential(&self, html: &mut String, report: &CostReport) -> fmt::Result {
        html.push_str(
            r#"
    <h2>⚡ Essential Services (Keep Running)</h2>
    <table id="essential">
        <tr><th>Service</th><th>Monthly Cost</th><th>Status</th></tr>
"#,
        );
        for service in report.services_in(ServiceTier::Essential) {
            writeln!(
                html,
                r#"        <tr class="essential"><td>{}</td><td>{}</td><td>{}</td></tr>"#,
                html_escape(&service.name),
                self.money(service.cost),
                ESSENTIAL_MARKER
            )?;
        }
        html.push_str("    </table>\n");
        Ok(())
    }

    fn write_low_impact(&self, html: &mut String, report: &CostReport) -> fmt::Result {
        html.push_str(
            r#"
    <h2>🔍 Low Impact Optional Services</h2>
    <table id="low-impact">
        <tr><th>Service</th><th>Monthly Cost</th><th>Recommendation</th></tr>
"#,
        );
        for service in report.services_in(ServiceTier::OptionalLowImpact) {
            writeln!(
                html,
                r#"        <tr class="optional-low"><td>{}</td><td>{}</td><td>{}</td></tr>"#,
                html_escape(&service.name),
                self.money(service.cost),
                low_impact_recommendation(service.cost)
            )?;
        }
        html.push_str("    </table>\n");
        Ok(())
    }
}
