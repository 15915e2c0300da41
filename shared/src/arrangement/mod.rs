//! Arrangement types shared between the engine and its UI callers
//!
//! - [`ArrangementEvent`]: notification envelope emitted after each mutation
//! - [`ArrangementSnapshot`]: full-store document for JSON export/restore
//! - [`ArrangementStatistics`]: occupancy and menu usage
//! - [`PlanTier`]: named table ceilings

pub mod event;
pub mod snapshot;
pub mod stats;
pub mod tier;

pub use event::{ArrangementEvent, ArrangementEventType, EventPayload};
pub use snapshot::ArrangementSnapshot;
pub use stats::{ArrangementStatistics, MenuUsage, TableOccupancy, percentage};
pub use tier::PlanTier;
