//! Full-store snapshot used by JSON export and restore

use crate::models::{DiningTable, MenuOption, Obstacle, Room, Seat};
use crate::types::Timestamp;
use serde::{Deserialize, Serialize};

/// Everything the arrangement store holds, as one document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrangementSnapshot {
    pub tables: Vec<DiningTable>,
    pub seats: Vec<Seat>,
    pub menu_options: Vec<MenuOption>,
    pub rooms: Vec<Room>,
    pub obstacles: Vec<Obstacle>,
    pub current_room_id: Option<String>,
    pub table_limit: u32,
    pub exported_at: Timestamp,
}
