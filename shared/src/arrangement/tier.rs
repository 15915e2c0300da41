//! Plan tiers and their table ceilings

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Pricing tier; each maps to a maximum table count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    Free,
    #[default]
    Basic,
    Premium,
    Unlimited,
}

impl PlanTier {
    pub const fn table_limit(&self) -> u32 {
        match self {
            PlanTier::Free => 5,
            PlanTier::Basic => 15,
            PlanTier::Premium => 50,
            PlanTier::Unlimited => u32::MAX,
        }
    }
}

impl fmt::Display for PlanTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Free => write!(f, "free"),
            Self::Basic => write!(f, "basic"),
            Self::Premium => write!(f, "premium"),
            Self::Unlimited => write!(f, "unlimited"),
        }
    }
}

impl FromStr for PlanTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "free" => Ok(Self::Free),
            "basic" => Ok(Self::Basic),
            "premium" => Ok(Self::Premium),
            "unlimited" => Ok(Self::Unlimited),
            other => Err(format!("unknown plan tier: {other}")),
        }
    }
}
