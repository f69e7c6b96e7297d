//! Random item generation from fixed lookup tables.
//!
//! Every roll uses a half-open range: `random_range(min..max)` yields
//! values in `[min, max)`.

use std::ops::Range;

use rand::Rng;
use rust_decimal::Decimal;

use crate::item::{Category, Item, Rarity};

/// Number of candidate names per category.
pub const NAMES_PER_CATEGORY: usize = 8;

/// Range of the numeric suffix appended to generated names.
pub const NAME_SUFFIX: Range<u32> = 1000..9999;

/// Candidate base names, indexed in `Category::ALL` order.
static ITEM_NAMES: [(Category, [&str; NAMES_PER_CATEGORY]); 8] = [
    (
        Category::Weapon,
        [
            "Arakh",
            "Dothraki Blade",
            "Westerosi Longsword",
            "Crossbow",
            "War Hammer",
            "Battle Axe",
            "Spear of the Unsullied",
            "Scorpion Bolt",
        ],
    ),
    (
        Category::Armor,
        [
            "Knight's Plate Armor",
            "Wildling Furs",
            "Kingsguard White Cloak",
            "Chainmail",
            "Leather Armor",
            "Dragon Scale Vest",
            "Unsullied Helmet",
            "Ironborn Armor",
        ],
    ),
    (
        Category::Dragon,
        [
            "Young Dragon",
            "Fire Drake",
            "Ice Dragon",
            "Shadow Wyrm",
            "Blood Dragon",
            "Golden Drake",
            "War Dragon",
            "Ancient Wyrm",
        ],
    ),
    (
        Category::Artifact,
        [
            "Dragon Glass",
            "Ancient Horn",
            "Weirwood Seed",
            "Wildfire Cache",
            "Three-Eyed Raven Token",
            "Faceless Coin",
            "Obsidian Candle",
            "Dragon Bone",
        ],
    ),
    (
        Category::ValyrianSteel,
        [
            "Valyrian Dagger",
            "Valyrian Longsword",
            "Valyrian Arakh",
            "Valyrian Greatsword",
            "Valyrian Axe",
            "Valyrian Spear",
            "Valyrian Knife",
            "Valyrian Chain",
        ],
    ),
    (
        Category::WildlingItem,
        [
            "Mammoth Tusk",
            "Giant's Weapon",
            "Bone Spear",
            "Wildling Bow",
            "Fur Cloak",
            "Tribal Mask",
            "Stone Hammer",
            "Bone Dagger",
        ],
    ),
    (
        Category::Potion,
        [
            "Maester's Remedy",
            "Poison Vial",
            "Antidote",
            "Sleeping Draught",
            "Healing Salve",
            "Essence of Nightshade",
            "Greyscale Cure",
            "Dragon's Breath Elixir",
        ],
    ),
    (
        Category::Crown,
        [
            "Dornish Coronet",
            "Tyrell Crown",
            "Baratheon Antler Crown",
            "Targaryen Crown",
            "Stark Circlet",
            "Lannister Diadem",
            "Greyjoy Kraken Crown",
            "Martell Sun Crown",
        ],
    ),
];

/// Level and price bands per rarity, indexed in `Rarity::ALL` order.
static RARITY_BANDS: [(Rarity, RarityBand); 6] = [
    (Rarity::Common, RarityBand::new(1..10, 10..100)),
    (Rarity::Uncommon, RarityBand::new(10..20, 100..500)),
    (Rarity::Rare, RarityBand::new(20..40, 500..2000)),
    (Rarity::Epic, RarityBand::new(40..60, 2000..5000)),
    (Rarity::Legendary, RarityBand::new(60..80, 5000..20000)),
    (Rarity::Mythic, RarityBand::new(80..100, 20000..100000)),
];

/// Half-open level and price ranges for one rarity tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RarityBand {
    pub level: Range<i32>,
    pub price: Range<i32>,
}

impl RarityBand {
    const fn new(level: Range<i32>, price: Range<i32>) -> Self {
        Self { level, price }
    }

    pub fn for_rarity(rarity: Rarity) -> &'static RarityBand {
        &RARITY_BANDS[rarity as usize].1
    }
}

/// Candidate base names for a category.
pub fn names_for(category: Category) -> &'static [&'static str; NAMES_PER_CATEGORY] {
    &ITEM_NAMES[category as usize].1
}

/// Draw one unsaved item: uniform category, uniform rarity, uniform name
/// from the category table plus a `#NNNN` suffix, and level/price from the
/// rarity band.
pub fn random_item<R: Rng + ?Sized>(rng: &mut R) -> Item {
    let category = Category::ALL[rng.random_range(0..Category::ALL.len())];
    let rarity = Rarity::ALL[rng.random_range(0..Rarity::ALL.len())];

    let names = names_for(category);
    let base = names[rng.random_range(0..names.len())];
    let name = format!("{} #{}", base, rng.random_range(NAME_SUFFIX));

    let band = RarityBand::for_rarity(rarity);
    let level = rng.random_range(band.level.clone());
    let price = rng.random_range(band.price.clone());

    Item::new(name, category, level, Decimal::from(price), rarity)
}
