use crate::classifier::classify;
use crate::directory::CompanyDirectory;
use crate::errors::AppError;
use crate::models::{Classification, EsgReport};
use moka::future::Cache;
use std::sync::Arc;

/// Serves ESG reports from the directory.
///
/// Classifications are kept in an overlay cache keyed by canonical company
/// name, so the base dataset is never touched after startup.
#[derive(Clone)]
pub struct EsgService {
    directory: Arc<CompanyDirectory>,
    classifications: Cache<String, Classification>,
}

impl EsgService {
    pub fn new(directory: Arc<CompanyDirectory>) -> Self {
        let classifications = Cache::builder()
            .max_capacity(directory.len().max(1) as u64)
            .build();

        Self {
            directory,
            classifications,
        }
    }

    pub fn directory(&self) -> &CompanyDirectory {
        &self.directory
    }

    pub fn companies(&self) -> Vec<String> {
        self.directory
            .list_companies()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Builds the report for `name` (trimmed, exact match).
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` when no company matches.
    pub async fn report(&self, name: &str) -> Result<EsgReport, AppError> {
        let (company, record) = self
            .directory
            .get_record(name)
            .ok_or_else(AppError::company_not_found)?;

        let classification = self
            .classifications
            .get_with(company.to_string(), async {
                tracing::debug!("Classification cache miss: {}", company);
                classify(record)
            })
            .await;

        Ok(EsgReport::new(company, record, classification))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Recommendation, RiskFactor};

    fn service() -> EsgService {
        EsgService::new(Arc::new(CompanyDirectory::seeded().unwrap()))
    }

    #[tokio::test]
    async fn test_report_for_seeded_company() {
        let report = service().report("BSE Limited").await.unwrap();
        assert_eq!(report.company, "BSE Limited");
        assert_eq!(report.carbon_footprint, 40.5);
        assert_eq!(report.compliance_score, 97);
        assert_eq!(report.risk_factor, RiskFactor::Low);
        assert_eq!(report.investment_recommendation, Recommendation::LongTerm);
    }

    #[tokio::test]
    async fn test_unknown_company_is_not_found() {
        let err = service().report("Unknown Co").await.unwrap_err();
        assert_eq!(err, AppError::company_not_found());
    }

    #[tokio::test]
    async fn test_repeated_reports_agree_and_leave_dataset_unchanged() {
        let svc = service();
        let before = *svc.directory().get_record("Infosys Limited").unwrap().1;

        let first = svc.report("Infosys Limited").await.unwrap();
        let second = svc.report(" Infosys Limited ").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first.risk_factor, RiskFactor::Moderate);
        assert_eq!(*svc.directory().get_record("Infosys Limited").unwrap().1, before);
    }

    #[test]
    fn test_companies_in_directory_order() {
        let names = service().companies();
        assert_eq!(names.len(), 5);
        assert_eq!(names.first().map(String::as_str), Some("Infosys Limited"));
        assert_eq!(names.last().map(String::as_str), Some("HDFC Bank"));
    }
}
