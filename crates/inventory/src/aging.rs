//! Per-category aging rules.
//!
//! Each rule advances one item by exactly one day. Every threshold compares
//! the pre-decrement `sell_in`; the decrement always happens last.

use crate::category::Category;
use crate::item::{Item, MAX_QUALITY, MIN_QUALITY};

impl Category {
    /// Apply this category's one-day rule to `item`, mutating it in place.
    pub fn advance(self, item: &mut Item) {
        match self {
            Category::Normal => degrade(item, 1, 2),
            Category::AgedBrie => ripen(item),
            Category::BackstagePasses => expire_passes(item),
            Category::Conjured => degrade(item, 2, 4),
            Category::Legendary => {}
        }
    }
}

/// Quality loss floored at [`MIN_QUALITY`]; the loss doubles once the sell
/// date has passed.
fn degrade(item: &mut Item, loss: i32, loss_past_date: i32) {
    let loss = if item.sell_in > 0 { loss } else { loss_past_date };
    item.quality = (item.quality - loss).max(MIN_QUALITY);
    item.sell_in -= 1;
}

/// Quality gain capped at [`MAX_QUALITY`]; the gain doubles once the sell
/// date has passed.
fn ripen(item: &mut Item) {
    let gain = if item.sell_in <= 0 { 2 } else { 1 };
    item.quality = (item.quality + gain).min(MAX_QUALITY);
    item.sell_in -= 1;
}

/// Passes gain value in steps as the event nears and drop to zero afterwards.
///
/// Quality is only touched when its current value already sits inside
/// `[MIN_QUALITY, MAX_QUALITY]`; `sell_in` drops either way.
fn expire_passes(item: &mut Item) {
    if (MIN_QUALITY..=MAX_QUALITY).contains(&item.quality) {
        if item.sell_in <= 0 {
            item.quality = 0;
        } else {
            let gain = if item.sell_in <= 5 {
                3
            } else if item.sell_in <= 10 {
                2
            } else {
                1
            };
            item.quality = (item.quality + gain).min(MAX_QUALITY);
        }
    }
    item.sell_in -= 1;
}
