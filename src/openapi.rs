use crate::handlers;
use crate::models::{ErrorBody, EsgReport, HealthResponse, Recommendation, RiskFactor};
use axum::{
    response::{Html, IntoResponse},
    Json,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "ESG Insight API",
        description = "Static ESG metrics with risk classification and investment recommendations"
    ),
    paths(handlers::health, handlers::list_companies, handlers::get_esg_data),
    components(schemas(EsgReport, RiskFactor, Recommendation, ErrorBody, HealthResponse))
)]
pub struct ApiDoc;

/// Serves the generated OpenAPI document as JSON.
pub async fn serve_openapi_spec() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

/// Path the generated OpenAPI document is served from.
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

const SWAGGER_UI_DIST: &str = "https://unpkg.com/swagger-ui-dist@5";

/// Serves a Swagger UI page that renders the document at [`OPENAPI_JSON_PATH`].
pub async fn serve_swagger_ui() -> Html<String> {
    Html(swagger_page(OPENAPI_JSON_PATH))
}

fn swagger_page(spec_url: &str) -> String {
    format!(
        r##"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<title>ESG Insight API docs</title>
<link rel="stylesheet" href="{dist}/swagger-ui.css">
</head>
<body>
<div id="docs"></div>
<script src="{dist}/swagger-ui-bundle.js"></script>
<script>
SwaggerUIBundle({{ url: "{spec_url}", dom_id: "#docs" }});
</script>
</body>
</html>
"##,
        dist = SWAGGER_UI_DIST,
        spec_url = spec_url,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_api_paths() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let paths = doc["paths"].as_object().unwrap();
        assert!(paths.contains_key("/api/companies"));
        assert!(paths.contains_key("/api/esg/{company_name}"));
        assert!(paths.contains_key("/health"));
    }

    #[test]
    fn test_swagger_page_points_at_document() {
        let page = swagger_page(OPENAPI_JSON_PATH);
        assert!(page.contains(r#"url: "/api-docs/openapi.json""#));
        assert!(page.contains("swagger-ui-bundle.js"));
    }
}
