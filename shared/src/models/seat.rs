//! Seat Model

use serde::{Deserialize, Serialize};

/// Seat entity, derived from its table's capacity
///
/// Seats are never created or deleted directly; only capacity
/// reconciliation does that. `position` is 0-based and dense per table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seat {
    pub id: String,
    pub table_id: String,
    pub position: u32,
    /// Guest directory id; a guest sits on at most one seat
    pub guest_id: Option<String>,
    pub menu_option_id: Option<String>,
    pub special_requirements: Option<String>,
}

impl Seat {
    pub fn is_occupied(&self) -> bool {
        self.guest_id.is_some()
    }
}
