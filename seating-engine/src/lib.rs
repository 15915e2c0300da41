//! Seating Engine - wedding table arrangement core
//!
//! # Overview
//!
//! In-memory store for one wedding's seating layout: rooms, tables with their
//! derived seats, guest and menu assignments, decorative obstacles, and the
//! plan-tier table limit. Every mutation is validated up front and announced
//! as an [`ArrangementEvent`] to listeners and broadcast subscribers.
//!
//! # Module Layout
//!
//! ```text
//! seating-engine/src/
//! ├── core/          # configuration
//! ├── arrangement/   # store, seat reconciliation, export, restore, events
//! └── utils/         # logging, input validation
//! ```

pub mod arrangement;
pub mod core;
pub mod utils;

pub use arrangement::{
    ArrangementStore, EntityKind, ExportFormat, InitializeResult, SharedArrangementStore,
    StoreError, StoreResult, TableUpdateResult,
};
pub use core::Config;
pub use shared::arrangement::{ArrangementEvent, ArrangementStatistics, ArrangementSnapshot};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env`, read the configuration and start logging
pub fn setup_environment() -> Config {
    // A missing .env file is fine; the process environment still applies
    let _ = dotenv::dotenv();

    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    config
}
