use serde::{Deserialize, Serialize};

/// Aging behavior of an item, resolved from its name.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Loses quality, twice as fast past the sell date.
    Normal,
    /// Gains quality with age.
    AgedBrie,
    /// Gains quality in steps as the event nears, worthless afterwards.
    BackstagePasses,
    /// Degrades twice as fast as a normal item.
    Conjured,
    /// Never ages and never degrades.
    Legendary,
}

/// Exact-match table of special item names. Anything not listed here ages as
/// [`Category::Normal`].
const SPECIAL_NAMES: &[(&str, Category)] = &[
    ("Aged Brie", Category::AgedBrie),
    ("Backstage passes", Category::BackstagePasses),
    ("Conjured Mana Cake", Category::Conjured),
    ("Sulfuras", Category::Legendary),
];

impl Category {
    /// Resolve the category for an item name.
    ///
    /// Total lookup: an unknown name is not an error, it ages as a normal
    /// item.
    pub fn for_name(name: &str) -> Category {
        SPECIAL_NAMES
            .iter()
            .find(|(special, _)| *special == name)
            .map(|&(_, category)| category)
            .unwrap_or(Category::Normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn special_names_resolve_to_their_category() {
        assert_eq!(Category::for_name("Aged Brie"), Category::AgedBrie);
        assert_eq!(
            Category::for_name("Backstage passes"),
            Category::BackstagePasses
        );
        assert_eq!(Category::for_name("Conjured Mana Cake"), Category::Conjured);
        assert_eq!(Category::for_name("Sulfuras"), Category::Legendary);
    }

    #[test]
    fn unknown_names_fall_back_to_normal() {
        assert_eq!(Category::for_name("Elixir of the Mongoose"), Category::Normal);
        assert_eq!(Category::for_name(""), Category::Normal);
    }

    #[test]
    fn lookup_is_case_sensitive_exact_match() {
        assert_eq!(Category::for_name("aged brie"), Category::Normal);
        assert_eq!(Category::for_name("Sulfuras "), Category::Normal);
    }
}
