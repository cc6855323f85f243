use crate::errors::AppError;
use crate::models::{ErrorBody, EsgReport, HealthResponse};
use crate::services::EsgService;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// ESG report service backed by the static directory.
    pub esg: EsgService,
}

/// Health check endpoint.
///
/// Returns the service status, version and the number of companies served.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is healthy", body = HealthResponse))
)]
pub async fn health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            service: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            companies: state.esg.directory().len(),
        }),
    )
}

/// GET /api/companies
///
/// Lists every company in the directory, in directory order.
#[utoipa::path(
    get,
    path = "/api/companies",
    responses((status = 200, description = "Company names", body = Vec<String>))
)]
pub async fn list_companies(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    tracing::info!("GET /api/companies");
    Json(state.esg.companies())
}

/// GET /api/esg/:company_name
///
/// Returns the company's metrics together with its risk factor and investment
/// recommendation. The name is trimmed and must match exactly.
///
/// # Returns
///
/// * `Result<Json<EsgReport>, AppError>` - The report, or 404 `{"error": "Company not found"}`.
#[utoipa::path(
    get,
    path = "/api/esg/{company_name}",
    params(("company_name" = String, Path, description = "Exact company name")),
    responses(
        (status = 200, description = "ESG metrics with derived classification", body = EsgReport),
        (status = 404, description = "Company not found", body = ErrorBody)
    )
)]
pub async fn get_esg_data(
    State(state): State<Arc<AppState>>,
    Path(company_name): Path<String>,
) -> Result<Json<EsgReport>, AppError> {
    tracing::info!("GET /api/esg/{}", company_name);

    let report = state.esg.report(&company_name).await?;

    tracing::info!(
        "ESG report for {}: {} ({})",
        report.company,
        report.risk_factor,
        report.investment_recommendation
    );

    Ok(Json(report))
}

/// Fallback for unknown routes.
pub async fn not_found() -> AppError {
    AppError::NotFound("Not found".to_string())
}
