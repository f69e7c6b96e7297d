//! Aggregate view over the current item set.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::item::{Category, Item, Rarity};

/// Counts, average price, groupings and the highest-level item.
///
/// Groupings only contain keys that occur in the item set. The average is
/// an exact decimal quotient, not rounded to cents.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub total_items: usize,
    pub average_price: Decimal,
    pub items_by_category: BTreeMap<Category, usize>,
    pub items_by_rarity: BTreeMap<Rarity, usize>,
    pub highest_level_item: Option<Item>,
}

impl Analytics {
    /// Single pass over `items`. The first item reaching the maximum level
    /// requirement wins ties.
    pub fn compute(items: &[Item]) -> Self {
        let mut analytics = Analytics {
            total_items: items.len(),
            ..Default::default()
        };
        let mut price_sum = Decimal::ZERO;
        let mut highest: Option<&Item> = None;

        for item in items {
            price_sum += item.price;
            *analytics.items_by_category.entry(item.category).or_insert(0) += 1;
            *analytics.items_by_rarity.entry(item.rarity).or_insert(0) += 1;

            match highest {
                Some(best) if best.level_requirement >= item.level_requirement => {}
                _ => highest = Some(item),
            }
        }

        if !items.is_empty() {
            analytics.average_price = price_sum / Decimal::from(items.len());
        }
        analytics.highest_level_item = highest.cloned();
        analytics
    }
}
