use contracts::domain::cart::CartItem;
use contracts::domain::product::Product;
use uuid::Uuid;

/// Capability for minting cart-entry identifiers, injected so tests can
/// use deterministic ids.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> Uuid;
}

/// Random v4 ids, the production generator.
#[derive(Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Append `product` to the cart as a new entry with a fresh id.
/// Insertion order is display order.
pub fn add_item(items: &mut Vec<CartItem>, product: Product, ids: &dyn IdGenerator) {
    items.push(CartItem::new(product, ids.next_id()));
}

/// Remove the entry with the given id. No-op when absent.
pub fn remove_item(items: &mut Vec<CartItem>, id_unico: Uuid) {
    items.retain(|item| item.id_unico != id_unico);
}

/// Sum of prices over the current entries.
pub fn cart_total(items: &[CartItem]) -> f64 {
    items.iter().map(|item| item.product.price).sum()
}
