//! Shared types for the seating engine
//!
//! Entity models, event and snapshot types, error codes, and the id/color
//! helpers used by both the engine and the UI layer.

pub mod arrangement;
pub mod color;
pub mod error;
pub mod models;
pub mod types;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use arrangement::{ArrangementEvent, ArrangementEventType, EventPayload};
pub use error::{AppError, AppResult, ErrorCode, ErrorKind};
