use serde::{Deserialize, Serialize};

/// Produto do catálogo remoto.
///
/// Fields mirror the third-party payload; extra fields the service may add
/// are ignored on deserialization, and `description`/`image` default to
/// empty when absent. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub image: String,
    pub category: String,
}
