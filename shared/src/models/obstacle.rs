//! Obstacle Model

use serde::{Deserialize, Serialize};

pub const DEFAULT_OBSTACLE_SIZE: f64 = 50.0;

/// Kind of non-seating layout element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObstacleKind {
    DanceFloor,
    Stage,
    Bar,
    Buffet,
    Pillar,
    DjBooth,
    Entrance,
    #[default]
    Other,
}

/// Obstacle entity (decorative, no references to other entities)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: String,
    pub name: String,
    pub kind: ObstacleKind,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
}

/// Create obstacle payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObstacleCreate {
    pub name: String,
    #[serde(default)]
    pub kind: ObstacleKind,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub rotation: Option<f64>,
}

/// Update obstacle payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObstacleUpdate {
    pub name: Option<String>,
    pub kind: Option<ObstacleKind>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub rotation: Option<f64>,
}
