use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ParseEnumError;

/// The closed set of item kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Weapon,
    Armor,
    Dragon,
    Artifact,
    ValyrianSteel,
    WildlingItem,
    Potion,
    Crown,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 8] = [
        Category::Weapon,
        Category::Armor,
        Category::Dragon,
        Category::Artifact,
        Category::ValyrianSteel,
        Category::WildlingItem,
        Category::Potion,
        Category::Crown,
    ];

    /// The textual name used in JSON payloads.
    pub fn name(self) -> &'static str {
        match self {
            Category::Weapon => "Weapon",
            Category::Armor => "Armor",
            Category::Dragon => "Dragon",
            Category::Artifact => "Artifact",
            Category::ValyrianSteel => "ValyrianSteel",
            Category::WildlingItem => "WildlingItem",
            Category::Potion => "Potion",
            Category::Crown => "Crown",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|c| c.name()).collect()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseEnumError::new("category", s))
    }
}
