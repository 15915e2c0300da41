//! Unified error codes for the seating engine
//!
//! Error codes are organized by the entity they concern:
//! - 0xxx: General errors
//! - 1xxx: Room errors
//! - 2xxx: Table errors
//! - 3xxx: Seat errors
//! - 4xxx: Menu option errors
//! - 5xxx: Obstacle errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so the UI layer can map them
/// to localized messages without parsing strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,
    /// Export format not supported
    UnsupportedFormat = 9,

    // ==================== 1xxx: Room ====================
    /// Room not found
    RoomNotFound = 1001,
    /// The last remaining room cannot be removed
    LastRoom = 1002,
    /// The current room cannot be removed
    ActiveRoom = 1003,

    // ==================== 2xxx: Table ====================
    /// Table not found
    TableNotFound = 2001,
    /// Table limit of the current tier reached
    TableLimitReached = 2002,
    /// Table still has guests seated
    TableHasGuests = 2003,

    // ==================== 3xxx: Seat ====================
    /// Seat not found
    SeatNotFound = 3001,

    // ==================== 4xxx: Menu ====================
    /// Menu option not found
    MenuOptionNotFound = 4001,
    /// Menu option still selected by a seat
    MenuOptionInUse = 4002,

    // ==================== 5xxx: Obstacle ====================
    /// Obstacle not found
    ObstacleNotFound = 5001,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Serialization error
    SerializationError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",
            ErrorCode::UnsupportedFormat => "Export format is not supported",

            // Room
            ErrorCode::RoomNotFound => "Room not found",
            ErrorCode::LastRoom => "Cannot remove the last room",
            ErrorCode::ActiveRoom => "Cannot remove the current room",

            // Table
            ErrorCode::TableNotFound => "Table not found",
            ErrorCode::TableLimitReached => "Table limit reached for the current tier",
            ErrorCode::TableHasGuests => "Table has guests assigned",

            // Seat
            ErrorCode::SeatNotFound => "Seat not found",

            // Menu
            ErrorCode::MenuOptionNotFound => "Menu option not found",
            ErrorCode::MenuOptionInUse => "Menu option is still in use",

            // Obstacle
            ErrorCode::ObstacleNotFound => "Obstacle not found",

            // System
            ErrorCode::InternalError => "Internal error",
            ErrorCode::SerializationError => "Serialization error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),
            9 => Ok(ErrorCode::UnsupportedFormat),

            // Room
            1001 => Ok(ErrorCode::RoomNotFound),
            1002 => Ok(ErrorCode::LastRoom),
            1003 => Ok(ErrorCode::ActiveRoom),

            // Table
            2001 => Ok(ErrorCode::TableNotFound),
            2002 => Ok(ErrorCode::TableLimitReached),
            2003 => Ok(ErrorCode::TableHasGuests),

            // Seat
            3001 => Ok(ErrorCode::SeatNotFound),

            // Menu
            4001 => Ok(ErrorCode::MenuOptionNotFound),
            4002 => Ok(ErrorCode::MenuOptionInUse),

            // Obstacle
            5001 => Ok(ErrorCode::ObstacleNotFound),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::SerializationError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}
