use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Menu section a dish is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DishCategory {
    Appetizers,
    Mains,
    Desserts,
    Beverages,
    Salads,
    Soups,
}

impl DishCategory {
    /// Every category, in the order the form offers them.
    pub const ALL: [DishCategory; 6] = [
        DishCategory::Appetizers,
        DishCategory::Mains,
        DishCategory::Desserts,
        DishCategory::Beverages,
        DishCategory::Salads,
        DishCategory::Soups,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DishCategory::Appetizers => "appetizers",
            DishCategory::Mains => "mains",
            DishCategory::Desserts => "desserts",
            DishCategory::Beverages => "beverages",
            DishCategory::Salads => "salads",
            DishCategory::Soups => "soups",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            DishCategory::Appetizers => "Appetizers",
            DishCategory::Mains => "Main Courses",
            DishCategory::Desserts => "Desserts",
            DishCategory::Beverages => "Beverages",
            DishCategory::Salads => "Salads",
            DishCategory::Soups => "Soups",
        }
    }
}

impl fmt::Display for DishCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for DishCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DishCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Category selector of the listing view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(DishCategory),
}

impl CategoryFilter {
    pub fn matches(&self, category: DishCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}
