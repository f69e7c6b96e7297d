use rust_decimal::Decimal;

use crate::item::{Category, Item, Rarity};

/// The themed sample catalog a freshly constructed store starts with.
pub fn seed_items() -> Vec<Item> {
    use Category::*;
    use Rarity::*;

    let rows: [(&str, Category, i32, i64, Rarity); 20] = [
        ("Ice (Ned Stark's Greatsword)", ValyrianSteel, 80, 50000, Legendary),
        ("Longclaw (Jon Snow's Bastard Sword)", ValyrianSteel, 75, 45000, Legendary),
        ("Oathkeeper (Brienne's Sword)", ValyrianSteel, 70, 42000, Legendary),
        ("Widow's Wail (Joffrey's Sword)", ValyrianSteel, 65, 40000, Epic),
        ("Drogon (Black Dragon)", Dragon, 100, 100000, Mythic),
        ("Rhaegal (Green Dragon)", Dragon, 100, 100000, Mythic),
        ("Viserion (Cream Dragon)", Dragon, 100, 100000, Mythic),
        ("Iron Crown of the North", Crown, 60, 25000, Epic),
        ("Crown of the Seven Kingdoms", Crown, 90, 75000, Legendary),
        ("The Hound's Helmet", Armor, 55, 15000, Rare),
        ("Lannister Golden Armor", Armor, 50, 18000, Epic),
        ("Night's Watch Black Cloak", Armor, 30, 5000, Uncommon),
        ("Dragon Eggs (Set of 3)", Artifact, 1, 1000, Legendary),
        ("The Iron Throne", Artifact, 95, 999999, Mythic),
        ("Arya's Needle", Weapon, 20, 3000, Rare),
        ("Wildling Bone Armor", WildlingItem, 25, 2000, Uncommon),
        ("Giant's Bone Club", WildlingItem, 40, 8000, Rare),
        ("Maester's Healing Potion", Potion, 10, 500, Common),
        ("The Strangler Poison", Potion, 45, 12000, Epic),
        ("Milk of the Poppy", Potion, 15, 750, Uncommon),
    ];

    rows.into_iter()
        .map(|(name, category, level, price, rarity)| {
            Item::new(name, category, level, Decimal::from(price), rarity)
        })
        .collect()
}
