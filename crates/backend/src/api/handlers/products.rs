use axum::http::StatusCode;
use axum::Json;
use contracts::shared::api::ErrorResponse;

use crate::catalog::{self, CatalogError};

/// GET /api/products
///
/// Pass-through proxy for the external catalog: relays the upstream JSON
/// body verbatim with 200, or answers 500 with the failure message.
pub async fn list_products() -> Result<Json<serde_json::Value>, (StatusCode, Json<ErrorResponse>)> {
    match catalog::client().fetch_products().await {
        Ok(body) => Ok(Json(body)),
        Err(e) => {
            tracing::error!("Failed to fetch products from catalog: {}", e);
            Err(internal_error(e))
        }
    }
}

fn internal_error(e: CatalogError) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            message: e.to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_failure_becomes_500_with_message_body() {
        let err = CatalogError::UpstreamStatus("Service Unavailable".to_string());
        let (status, Json(body)) = internal_error(err);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.message, "Erro ao buscar produtos: Service Unavailable");
    }
}
