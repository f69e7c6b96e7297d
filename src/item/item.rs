use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Category, Rarity};

/// Store-assigned item identifier. Starts at 1; 0 marks an unsaved item.
pub type ItemId = u32;

/// A catalog record.
///
/// `id` and `created_at` belong to the store: they are written once by
/// `ItemStore::add` and left untouched by updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub category: Category,
    pub level_requirement: i32,
    pub price: Decimal,
    pub rarity: Rarity,
    pub created_at: DateTime<Utc>,
}

impl Item {
    /// Build an unsaved item (id 0, epoch timestamp).
    pub fn new(
        name: impl Into<String>,
        category: Category,
        level_requirement: i32,
        price: Decimal,
        rarity: Rarity,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            category,
            level_requirement,
            price,
            rarity,
            created_at: DateTime::<Utc>::default(),
        }
    }

    /// Same fields, with an explicit id. Used to express updates.
    pub fn with_id(mut self, id: ItemId) -> Self {
        self.id = id;
        self
    }

    pub fn is_saved(&self) -> bool {
        self.id != 0
    }

    /// Copy every mutable field from `other`, keeping identity and timestamp.
    pub(crate) fn overwrite_from(&mut self, other: &Item) {
        self.name = other.name.clone();
        self.category = other.category;
        self.level_requirement = other.level_requirement;
        self.price = other.price;
        self.rarity = other.rarity;
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} - {} | Level {} | {} | {} | Created: {}",
            self.id,
            self.name,
            self.category,
            self.level_requirement,
            format_currency(self.price),
            self.rarity,
            self.created_at.format("%Y-%m-%d")
        )
    }
}

/// `$1,234.50` style: two decimals, thousands grouped with commas.
pub fn format_currency(amount: Decimal) -> String {
    let fixed = format!("{:.2}", amount.round_dp(2).abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount.is_sign_negative() && !amount.round_dp(2).is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}${}.{}", sign, grouped, cents)
}
