use contracts::domain::product::Product;
use contracts::shared::api::ErrorResponse;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Fetch the product list through the backend proxy.
pub async fn fetch_products() -> Result<Vec<Product>, String> {
    let response = Request::get(&api_url("/api/products"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        // the proxy answers failures with a {"message": ...} body
        if let Ok(err) = response.json::<ErrorResponse>().await {
            return Err(err.message);
        }
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: Vec<Product> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}
