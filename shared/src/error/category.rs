//! Error category and kind classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Room errors
/// - 2xxx: Table errors
/// - 3xxx: Seat errors
/// - 4xxx: Menu option errors
/// - 5xxx: Obstacle errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Room errors (1xxx)
    Room,
    /// Table errors (2xxx)
    Table,
    /// Seat errors (3xxx)
    Seat,
    /// Menu option errors (4xxx)
    Menu,
    /// Obstacle errors (5xxx)
    Obstacle,
    /// System errors (9xxx and unassigned ranges)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Room,
            2000..3000 => Self::Table,
            3000..4000 => Self::Seat,
            4000..5000 => Self::Menu,
            5000..6000 => Self::Obstacle,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Room => "room",
            Self::Table => "table",
            Self::Seat => "seat",
            Self::Menu => "menu",
            Self::Obstacle => "obstacle",
            Self::System => "system",
        }
    }
}

/// How the caller should treat a failure, independent of the entity involved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// An id did not resolve to an entity
    NotFound,
    /// Input was missing or malformed
    ValidationFailed,
    /// The tier's table ceiling was reached
    CapacityExceeded,
    /// The entity is still referenced elsewhere
    ReferentialConflict,
    /// Unexpected failure inside the engine
    Internal,
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }

    /// Get the failure kind for this error code
    pub fn kind(&self) -> ErrorKind {
        match self {
            ErrorCode::NotFound
            | ErrorCode::RoomNotFound
            | ErrorCode::TableNotFound
            | ErrorCode::SeatNotFound
            | ErrorCode::MenuOptionNotFound
            | ErrorCode::ObstacleNotFound => ErrorKind::NotFound,
            ErrorCode::ValidationFailed
            | ErrorCode::RequiredField
            | ErrorCode::ValueOutOfRange
            | ErrorCode::UnsupportedFormat => ErrorKind::ValidationFailed,
            ErrorCode::TableLimitReached => ErrorKind::CapacityExceeded,
            ErrorCode::LastRoom
            | ErrorCode::ActiveRoom
            | ErrorCode::TableHasGuests
            | ErrorCode::MenuOptionInUse => ErrorKind::ReferentialConflict,
            ErrorCode::Success
            | ErrorCode::Unknown
            | ErrorCode::InternalError
            | ErrorCode::SerializationError => ErrorKind::Internal,
        }
    }
}
