use shared::arrangement::PlanTier;
use shared::models::{DEFAULT_ROOM_HEIGHT, DEFAULT_ROOM_WIDTH};

/// Default event broadcast channel capacity
pub const DEFAULT_EVENT_CHANNEL_CAPACITY: usize = 1024;

/// Engine configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | SEATING_TIER | basic | plan tier naming the table limit |
/// | SEATING_TABLE_LIMIT | (tier) | explicit table limit, overrides the tier |
/// | DEFAULT_ROOM_NAME | Main Hall | name of the room created at initialization |
/// | DEFAULT_ROOM_WIDTH | 1200 | width of that room |
/// | DEFAULT_ROOM_HEIGHT | 800 | height of that room |
/// | EVENT_CHANNEL_CAPACITY | 1024 | broadcast channel size |
/// | LOG_LEVEL | info | logger level |
/// | LOG_DIR | (unset) | directory for daily rolling log files |
///
/// # Example
///
/// ```ignore
/// SEATING_TIER=premium LOG_LEVEL=debug seating-engine plan.json csv
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub tier: PlanTier,
    /// Explicit ceiling; `None` means use the tier's
    pub table_limit: Option<u32>,
    pub default_room_name: String,
    pub default_room_width: f64,
    pub default_room_height: f64,
    pub event_channel_capacity: usize,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tier: PlanTier::default(),
            table_limit: None,
            default_room_name: "Main Hall".into(),
            default_room_width: DEFAULT_ROOM_WIDTH,
            default_room_height: DEFAULT_ROOM_HEIGHT,
            event_channel_capacity: DEFAULT_EVENT_CHANNEL_CAPACITY,
            log_level: "info".into(),
            log_dir: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparsable variables fall back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            tier: std::env::var("SEATING_TIER")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(defaults.tier),
            table_limit: std::env::var("SEATING_TABLE_LIMIT")
                .ok()
                .and_then(|l| l.parse().ok()),
            default_room_name: std::env::var("DEFAULT_ROOM_NAME")
                .ok()
                .filter(|n| !n.trim().is_empty())
                .unwrap_or(defaults.default_room_name),
            default_room_width: std::env::var("DEFAULT_ROOM_WIDTH")
                .ok()
                .and_then(|w| w.parse().ok())
                .unwrap_or(defaults.default_room_width),
            default_room_height: std::env::var("DEFAULT_ROOM_HEIGHT")
                .ok()
                .and_then(|h| h.parse().ok())
                .unwrap_or(defaults.default_room_height),
            event_channel_capacity: std::env::var("EVENT_CHANNEL_CAPACITY")
                .ok()
                .and_then(|c| c.parse().ok())
                .filter(|c: &usize| *c > 0)
                .unwrap_or(defaults.event_channel_capacity),
            log_level: std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }

    /// Use a fixed table limit (common in tests)
    pub fn with_table_limit(mut self, limit: u32) -> Self {
        self.table_limit = Some(limit);
        self
    }

    /// Effective table ceiling: explicit limit first, then the tier's
    pub fn effective_table_limit(&self) -> u32 {
        self.table_limit.unwrap_or_else(|| self.tier.table_limit())
    }
}
