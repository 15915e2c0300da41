//! Dining Table Model

use serde::{Deserialize, Serialize};

/// Default position for tables created without coordinates
pub const DEFAULT_TABLE_POSITION: (f64, f64) = (100.0, 100.0);

/// Table shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableShape {
    #[default]
    Round,
    Rectangle,
    Custom,
}

/// Canonical (capacity, width, height) applied when a create payload omits them
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeDefaults {
    pub capacity: u32,
    pub width: f64,
    pub height: f64,
}

impl TableShape {
    pub const fn defaults(&self) -> ShapeDefaults {
        match self {
            TableShape::Round => ShapeDefaults {
                capacity: 8,
                width: 150.0,
                height: 150.0,
            },
            TableShape::Rectangle => ShapeDefaults {
                capacity: 8,
                width: 200.0,
                height: 100.0,
            },
            TableShape::Custom => ShapeDefaults {
                capacity: 6,
                width: 120.0,
                height: 120.0,
            },
        }
    }
}

/// Dining table entity
///
/// Owns `capacity` seats (see [`super::Seat`]); the engine keeps the seat
/// collection in step with this field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiningTable {
    pub id: String,
    pub name: String,
    pub shape: TableShape,
    pub capacity: u32,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Degrees, clockwise
    pub rotation: f64,
}

/// Create dining table payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiningTableCreate {
    pub name: String,
    #[serde(default)]
    pub shape: TableShape,
    pub capacity: Option<u32>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub rotation: Option<f64>,
}

/// Update dining table payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiningTableUpdate {
    pub name: Option<String>,
    pub shape: Option<TableShape>,
    pub capacity: Option<u32>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub rotation: Option<f64>,
}
