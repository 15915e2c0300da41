//! Menu Option Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Menu category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuCategory {
    #[default]
    Main,
    Vegetarian,
    Vegan,
    GlutenFree,
    Kids,
    Other,
}

impl fmt::Display for MenuCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Main => write!(f, "main"),
            Self::Vegetarian => write!(f, "vegetarian"),
            Self::Vegan => write!(f, "vegan"),
            Self::GlutenFree => write!(f, "gluten_free"),
            Self::Kids => write!(f, "kids"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Menu option entity (a dish guests can be assigned)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuOption {
    pub id: String,
    pub name: String,
    pub category: MenuCategory,
    /// `#rrggbb`
    pub color: String,
}

/// Create menu option payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuOptionCreate {
    pub name: String,
    #[serde(default)]
    pub category: MenuCategory,
    /// Picked from the palette when omitted
    pub color: Option<String>,
}

/// Update menu option payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuOptionUpdate {
    pub name: Option<String>,
    pub category: Option<MenuCategory>,
    pub color: Option<String>,
}

/// Built-in menu catalog seeded at initialization
pub const DEFAULT_MENU_CATALOG: &[(&str, MenuCategory, &str)] = &[
    ("Chicken", MenuCategory::Main, "#f59e0b"),
    ("Beef", MenuCategory::Main, "#ef4444"),
    ("Fish", MenuCategory::Main, "#3b82f6"),
    ("Vegetarian", MenuCategory::Vegetarian, "#22c55e"),
    ("Vegan", MenuCategory::Vegan, "#10b981"),
    ("Kids Menu", MenuCategory::Kids, "#a855f7"),
];
