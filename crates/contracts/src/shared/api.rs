use serde::{Deserialize, Serialize};

/// JSON body returned by the backend when a request fails.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}
