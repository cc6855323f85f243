use crate::models::{Classification, EsgRecord, RiskFactor};

/// Carbon footprint must be strictly below this for a Low Risk rating.
pub const LOW_RISK_CARBON_CEILING: f64 = 50.0;
/// Compliance score must be strictly above this for a Low Risk rating.
pub const LOW_RISK_COMPLIANCE_FLOOR: u8 = 90;
/// Carbon footprint strictly below this (and not Low Risk) is Moderate Risk.
pub const MODERATE_RISK_CARBON_CEILING: f64 = 65.0;

/// Derives the risk tier for a record.
///
/// Only `carbon_footprint` and `compliance_score` take part in the decision.
/// Rules are checked in order and the first match wins:
///
/// 1. `carbon_footprint < 50` and `compliance_score > 90` → Low Risk
/// 2. `carbon_footprint < 65` → Moderate Risk
/// 3. otherwise → High Risk
pub fn risk_factor(record: &EsgRecord) -> RiskFactor {
    if record.carbon_footprint < LOW_RISK_CARBON_CEILING
        && record.compliance_score > LOW_RISK_COMPLIANCE_FLOOR
    {
        RiskFactor::Low
    } else if record.carbon_footprint < MODERATE_RISK_CARBON_CEILING {
        RiskFactor::Moderate
    } else {
        RiskFactor::High
    }
}

/// Classifies a record into a risk tier and its investment recommendation.
///
/// Pure: the record is left untouched, so repeated calls always agree.
pub fn classify(record: &EsgRecord) -> Classification {
    let risk_factor = risk_factor(record);
    Classification {
        risk_factor,
        investment_recommendation: risk_factor.recommendation(),
    }
}
