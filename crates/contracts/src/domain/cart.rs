use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::product::Product;

/// Um produto do catálogo colocado no carrinho.
///
/// `id_unico` is assigned at add-to-cart time, so the same product id can
/// appear in the cart as distinct entries. The serialized shape is the
/// product's fields plus an `idUnico` key, which is also the layout of the
/// persisted cart in browser storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    #[serde(rename = "idUnico")]
    pub id_unico: Uuid,
}

impl CartItem {
    pub fn new(product: Product, id_unico: Uuid) -> Self {
        Self { product, id_unico }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cart_item_serializes_flattened_with_id_unico() {
        let item = CartItem::new(
            Product {
                id: 1,
                title: "Red Tee".to_string(),
                description: String::new(),
                price: 10.0,
                image: String::new(),
                category: "T-shirts".to_string(),
            },
            Uuid::nil(),
        );

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["title"], "Red Tee");
        assert_eq!(value["idUnico"], Uuid::nil().to_string());
        // product fields live at the top level, not under a nested key
        assert!(value.get("product").is_none());
    }
}
