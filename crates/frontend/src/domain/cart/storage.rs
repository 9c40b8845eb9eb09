use contracts::domain::cart::CartItem;

/// Storage key the cart is persisted under, shared with what the store has
/// always written to browser storage.
const STORAGE_KEY: &str = "produtos-selecionados";

/// Load/save contract for cart persistence. The whole cart is written on
/// every mutation (overwrite, no merge) and read once at startup.
pub trait CartStore: Send + Sync {
    fn load(&self) -> Option<Vec<CartItem>>;
    fn save(&self, items: &[CartItem]);
}

/// Browser localStorage persistence.
#[derive(Default)]
pub struct LocalStorageCartStore;

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl CartStore for LocalStorageCartStore {
    fn load(&self) -> Option<Vec<CartItem>> {
        let raw = storage()?.get_item(STORAGE_KEY).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }

    fn save(&self, items: &[CartItem]) {
        let Some(storage) = storage() else { return };
        let Ok(raw) = serde_json::to_string(items) else {
            return;
        };
        let _ = storage.set_item(STORAGE_KEY, &raw);
    }
}

/// In-memory store for tests and headless contexts.
#[derive(Default)]
pub struct MemoryCartStore {
    raw: std::sync::Mutex<Option<String>>,
}

impl CartStore for MemoryCartStore {
    fn load(&self) -> Option<Vec<CartItem>> {
        let raw = self.raw.lock().ok()?;
        serde_json::from_str(raw.as_deref()?).ok()
    }

    fn save(&self, items: &[CartItem]) {
        if let (Ok(raw), Ok(mut slot)) = (serde_json::to_string(items), self.raw.lock()) {
            *slot = Some(raw);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::product::Product;
    use uuid::Uuid;

    fn item(id: i64, price: f64, id_unico: u128) -> CartItem {
        CartItem::new(
            Product {
                id,
                title: format!("Produto {id}"),
                description: String::new(),
                price,
                image: String::new(),
                category: "T-shirts".to_string(),
            },
            Uuid::from_u128(id_unico),
        )
    }

    #[test]
    fn empty_store_loads_nothing() {
        let store = MemoryCartStore::default();
        assert!(store.load().is_none());
    }

    #[test]
    fn saved_cart_loads_back_in_order() {
        let store = MemoryCartStore::default();
        store.save(&[item(1, 10.0, 1), item(2, 5.0, 2)]);

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].product.id, 1);
        assert_eq!(loaded[1].product.id, 2);
    }

    #[test]
    fn save_overwrites_previous_contents() {
        let store = MemoryCartStore::default();
        store.save(&[item(1, 10.0, 1), item(2, 5.0, 2)]);
        store.save(&[item(3, 7.5, 3)]);

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].product.id, 3);
    }
}
