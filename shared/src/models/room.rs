//! Room Model

use serde::{Deserialize, Serialize};

/// Default canvas width for new rooms
pub const DEFAULT_ROOM_WIDTH: f64 = 1200.0;
/// Default canvas height for new rooms
pub const DEFAULT_ROOM_HEIGHT: f64 = 800.0;

/// Room entity (layout canvas: ballroom, garden, terrace...)
///
/// Tables are placed by coordinate only, so a room owns nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub name: String,
    pub width: f64,
    pub height: f64,
    /// Background image reference or CSS color, opaque to the engine
    pub background: Option<String>,
}

/// Create room payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoomCreate {
    pub name: String,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub background: Option<String>,
}

/// Update room payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoomUpdate {
    pub name: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub background: Option<String>,
}
