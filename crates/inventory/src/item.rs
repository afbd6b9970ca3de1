use serde::{Deserialize, Serialize};

use shelflife_core::{DomainError, DomainResult};

use crate::category::Category;

/// Lowest quality any item can degrade to.
pub const MIN_QUALITY: i32 = 0;

/// Highest quality any non-legendary item can reach.
pub const MAX_QUALITY: i32 = 50;

/// A single shop item.
///
/// The name is the item's identity and never changes after construction; it
/// also selects the aging rule (see [`Category::for_name`]). `sell_in` counts
/// the days left before the sell-by date, goes negative once that date has
/// passed, and has no lower bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub(crate) name: String,
    pub(crate) sell_in: i32,
    pub(crate) quality: i32,
}

impl Item {
    /// Create an item with the given initial state, accepted as-is.
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sell_in(&self) -> i32 {
        self.sell_in
    }

    pub fn quality(&self) -> i32 {
        self.quality
    }

    /// Category resolved from the item name.
    pub fn category(&self) -> Category {
        Category::for_name(&self.name)
    }

    /// Optional stricter intake, separate from construction.
    ///
    /// [`Item::new`] accepts any initial state. Callers that want validated
    /// intake can reject non-legendary items whose quality starts outside
    /// `[MIN_QUALITY, MAX_QUALITY]`; legendary items are exempt from the
    /// quality bounds.
    pub fn validate(&self) -> DomainResult<()> {
        if self.category() == Category::Legendary {
            return Ok(());
        }
        if self.quality < MIN_QUALITY || self.quality > MAX_QUALITY {
            return Err(DomainError::validation(format!(
                "initial quality {} of \"{}\" is outside [{MIN_QUALITY}, {MAX_QUALITY}]",
                self.quality, self.name
            )));
        }
        Ok(())
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_accepts_values_as_is() {
        let item = Item::new("Mouldy Loaf", -4, 99);
        assert_eq!(item.name(), "Mouldy Loaf");
        assert_eq!(item.sell_in(), -4);
        assert_eq!(item.quality(), 99);
    }

    #[test]
    fn category_is_resolved_from_the_name() {
        assert_eq!(Item::new("Aged Brie", 1, 1).category(), Category::AgedBrie);
        assert_eq!(Item::new("Mana Potion", 1, 1).category(), Category::Normal);
    }

    #[test]
    fn validate_rejects_out_of_range_initial_quality() {
        let err = Item::new("Mana Potion", 3, 51).validate().unwrap_err();
        match err {
            DomainError::Validation(msg) => {
                assert!(msg.contains("Mana Potion"));
                assert!(msg.contains("51"));
            }
            _ => panic!("Expected validation error"),
        }

        assert!(Item::new("Mana Potion", 3, -1).validate().is_err());
        assert!(Item::new("Mana Potion", 3, 0).validate().is_ok());
        assert!(Item::new("Mana Potion", 3, 50).validate().is_ok());
    }

    #[test]
    fn validate_exempts_legendary_items() {
        assert!(Item::new("Sulfuras", 0, 80).validate().is_ok());
    }

    #[test]
    fn display_renders_name_sell_in_quality() {
        let item = Item::new("Aged Brie", -1, 4);
        assert_eq!(item.to_string(), "Aged Brie, -1, 4");
    }
}
