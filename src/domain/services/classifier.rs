//! Static service tier table.
//!
//! Names are the canonical `SERVICE` dimension values reported by AWS Cost Explorer and are
//! matched exactly. Anything not listed is [`ServiceTier::Unclassified`].

const ESSENTIAL: &[&str] = &[
    "Amazon Elastic Compute Cloud - Compute",
    "Amazon Relational Database Service",
    "Amazon Virtual Private Cloud",
    "Amazon Elastic Load Balancing",
    "Amazon Simple Storage Service",
    "EC2 - Other",
    "Amazon EC2 Container Registry (ECR)",
    "Amazon Elastic Container Service",
];

const OPTIONAL_HIGH_IMPACT: &[&str] = &[
    "AWS Config",
    "AWS Security Hub",
    "AWS Support (Business)",
    "Amazon QuickSight",
    "Amazon OpenSearch Service",
];

const OPTIONAL_LOW_IMPACT: &[&str] = &[
    "AWS Amplify",
    "AWS Secrets Manager",
    "Amazon Route 53",
    "CodeBuild",
    "AWS Lambda",
    "Amazon DynamoDB",
    "Amazon Simple Email Service",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceTier {
    Essential,
    OptionalHighImpact,
    OptionalLowImpact,
    Unclassified,
}

impl ServiceTier {
    /// Tiers that own a row in the table, in lookup order.
    pub const CLASSIFIED: [ServiceTier; 3] = [
        ServiceTier::Essential,
        ServiceTier::OptionalHighImpact,
        ServiceTier::OptionalLowImpact,
    ];

    pub const fn services(self) -> &'static [&'static str] {
        match self {
            ServiceTier::Essential => ESSENTIAL,
            ServiceTier::OptionalHighImpact => OPTIONAL_HIGH_IMPACT,
            ServiceTier::OptionalLowImpact => OPTIONAL_LOW_IMPACT,
            ServiceTier::Unclassified => &[],
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ServiceTier::Essential => "essential",
            ServiceTier::OptionalHighImpact => "optional_high_impact",
            ServiceTier::OptionalLowImpact => "optional_low_impact",
            ServiceTier::Unclassified => "unclassified",
        }
    }
}

pub fn classify(service_name: &str) -> ServiceTier {
    ServiceTier::CLASSIFIED
        .into_iter()
        .find(|tier| tier.services().contains(&service_name))
        .unwrap_or(ServiceTier::Unclassified)
}
