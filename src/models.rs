use serde::Serialize;
use std::fmt;
use utoipa::ToSchema;

/// Declares a unit enum whose serialized form and `as_str`/`Display` output
/// come from the same label literal.
macro_rules! labelled_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident { $($variant:ident => $label:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

// ============ Base Dataset ============

/// Sustainability metrics for a single company.
///
/// Percentage scores are on a 0-100 scale where higher is better.
/// `carbon_footprint` is an index where lower is better.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EsgRecord {
    /// Carbon footprint index (lower is better).
    pub carbon_footprint: f64,
    /// Energy efficiency score.
    pub energy_efficiency: u8,
    /// Waste management score.
    pub waste_management: u8,
    /// Employee diversity score.
    pub employee_diversity: u8,
    /// Board diversity score.
    pub board_diversity: u8,
    /// Regulatory compliance score.
    pub compliance_score: u8,
}

// ============ Derived Values ============

labelled_enum! {
    /// Risk tier derived from carbon footprint and compliance score.
    pub enum RiskFactor {
        Low => "Low Risk",
        Moderate => "Moderate Risk",
        High => "High Risk",
    }
}

impl RiskFactor {
    /// The investment recommendation attached to this tier.
    pub fn recommendation(&self) -> Recommendation {
        match self {
            RiskFactor::Low => Recommendation::LongTerm,
            RiskFactor::Moderate => Recommendation::NeedsImprovement,
            RiskFactor::High => Recommendation::Risky,
        }
    }
}

labelled_enum! {
    /// Investment recommendation, one per risk tier.
    pub enum Recommendation {
        LongTerm => "Good for Long-term Investment",
        NeedsImprovement => "Potential but Requires ESG Improvements",
        Risky => "Risky for Growth",
    }
}

/// Result of running the classifier over an [`EsgRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub risk_factor: RiskFactor,
    pub investment_recommendation: Recommendation,
}

// ============ API Responses ============

/// Response body for `GET /api/esg/{company_name}`.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct EsgReport {
    /// Canonical company name as stored in the directory.
    pub company: String,
    pub carbon_footprint: f64,
    pub energy_efficiency: u8,
    pub waste_management: u8,
    pub employee_diversity: u8,
    pub board_diversity: u8,
    pub compliance_score: u8,
    pub risk_factor: RiskFactor,
    pub investment_recommendation: Recommendation,
}

impl EsgReport {
    /// Assembles the response from a directory entry and its classification.
    pub fn new(company: impl Into<String>, record: &EsgRecord, classification: Classification) -> Self {
        Self {
            company: company.into(),
            carbon_footprint: record.carbon_footprint,
            energy_efficiency: record.energy_efficiency,
            waste_management: record.waste_management,
            employee_diversity: record.employee_diversity,
            board_diversity: record.board_diversity,
            compliance_score: record.compliance_score,
            risk_factor: classification.risk_factor,
            investment_recommendation: classification.investment_recommendation,
        }
    }
}

/// Error payload returned by every failing endpoint.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

/// Response body for `GET /health`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    /// Number of companies in the directory.
    pub companies: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_risk_factor_serializes_to_display_label() {
        assert_eq!(serde_json::to_value(RiskFactor::Low).unwrap(), json!("Low Risk"));
        assert_eq!(
            serde_json::to_value(RiskFactor::Moderate).unwrap(),
            json!("Moderate Risk")
        );
        assert_eq!(serde_json::to_value(RiskFactor::High).unwrap(), json!("High Risk"));
        assert_eq!(RiskFactor::High.to_string(), "High Risk");
    }

    #[test]
    fn test_labels_match_serialized_form() {
        for risk in [RiskFactor::Low, RiskFactor::Moderate, RiskFactor::High] {
            assert_eq!(serde_json::to_value(risk).unwrap(), json!(risk.as_str()));
            assert_eq!(risk.to_string(), risk.as_str());
        }
        for rec in [
            Recommendation::LongTerm,
            Recommendation::NeedsImprovement,
            Recommendation::Risky,
        ] {
            assert_eq!(serde_json::to_value(rec).unwrap(), json!(rec.as_str()));
            assert_eq!(rec.to_string(), rec.as_str());
        }
    }

    #[test]
    fn test_report_field_order_and_shape() {
        let record = EsgRecord {
            carbon_footprint: 30.0,
            energy_efficiency: 92,
            waste_management: 95,
            employee_diversity: 55,
            board_diversity: 40,
            compliance_score: 99,
        };
        let report = EsgReport::new(
            "HDFC Bank",
            &record,
            Classification {
                risk_factor: RiskFactor::Low,
                investment_recommendation: Recommendation::LongTerm,
            },
        );

        let body = serde_json::to_string(&report).unwrap();
        assert_eq!(
            body,
            r#"{"company":"HDFC Bank","carbon_footprint":30.0,"energy_efficiency":92,"waste_management":95,"employee_diversity":55,"board_diversity":40,"compliance_score":99,"risk_factor":"Low Risk","investment_recommendation":"Good for Long-term Investment"}"#
        );
    }
}
