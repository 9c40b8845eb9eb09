use std::sync::Arc;

use contracts::domain::cart::CartItem;
use contracts::domain::product::Product;
use leptos::prelude::*;
use uuid::Uuid;

use super::model::{self, IdGenerator};
use super::storage::CartStore;

/// Reactive cart handle for the UI.
///
/// Hydrates once from the injected store at construction and writes the
/// whole cart back after every mutation.
#[derive(Clone)]
pub struct CartContext {
    items: RwSignal<Vec<CartItem>>,
    store: Arc<dyn CartStore>,
    ids: Arc<dyn IdGenerator>,
}

impl CartContext {
    pub fn new(store: Arc<dyn CartStore>, ids: Arc<dyn IdGenerator>) -> Self {
        let initial = store.load().unwrap_or_default();
        Self {
            items: RwSignal::new(initial),
            store,
            ids,
        }
    }

    pub fn items(&self) -> RwSignal<Vec<CartItem>> {
        self.items
    }

    pub fn add(&self, product: Product) {
        self.items
            .update(|items| model::add_item(items, product, self.ids.as_ref()));
        self.persist();
    }

    pub fn remove(&self, id_unico: Uuid) {
        self.items.update(|items| model::remove_item(items, id_unico));
        self.persist();
    }

    /// Reactive running total.
    pub fn total(&self) -> f64 {
        model::cart_total(&self.items.get())
    }

    fn persist(&self) {
        self.store.save(&self.items.get_untracked());
    }
}
