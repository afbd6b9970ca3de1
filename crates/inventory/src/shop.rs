use tracing::{debug, trace};

use shelflife_core::DomainResult;

use crate::item::Item;

/// The shop's inventory.
///
/// Owns an ordered collection of items and mutates them in place, applying
/// each item's category rule exactly once per day. Iteration order is the
/// caller-supplied order and is preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shop {
    items: Vec<Item>,
}

impl Shop {
    /// Build a shop from items accepted as-is.
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Build a shop, rejecting items with an out-of-range initial quality.
    ///
    /// Stricter intake than [`Shop::new`]; see [`Item::validate`].
    pub fn validated(items: Vec<Item>) -> DomainResult<Self> {
        for item in &items {
            item.validate()?;
        }
        Ok(Self::new(items))
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Advance the whole inventory by one day.
    ///
    /// Resolves each item's category from its name and applies the matching
    /// rule in place, in collection order. Rule application cannot fail; the
    /// call mutates every item exactly once.
    pub fn advance_day(&mut self) {
        debug!(items = self.items.len(), "advancing inventory by one day");
        for item in &mut self.items {
            let category = item.category();
            category.advance(item);
            trace!(
                name = item.name(),
                sell_in = item.sell_in(),
                quality = item.quality(),
                ?category,
                "item aged"
            );
        }
    }
}
