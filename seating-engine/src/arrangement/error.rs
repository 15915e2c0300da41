use shared::error::{AppError, ErrorCode, ErrorKind};
use std::fmt;
use thiserror::Error;

/// Entity kinds the store can fail to find
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Room,
    Table,
    Seat,
    MenuOption,
    Obstacle,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Room => write!(f, "Room"),
            Self::Table => write!(f, "Table"),
            Self::Seat => write!(f, "Seat"),
            Self::MenuOption => write!(f, "Menu option"),
            Self::Obstacle => write!(f, "Obstacle"),
        }
    }
}

/// Store errors
///
/// Every variant is raised before any state changes, so a failed call leaves
/// the store exactly as it was.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: EntityKind, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Table limit reached ({limit} tables)")]
    TableLimitReached { limit: u32 },

    #[error("Table {table_id} has {count} guest(s) assigned; reassign them first")]
    GuestsAssigned { table_id: String, count: usize },

    #[error("Menu option {id} is still selected by {count} seat(s)")]
    MenuOptionInUse { id: String, count: usize },

    #[error("Cannot remove the last room")]
    LastRoom,

    #[error("Cannot remove the current room: {0}")]
    ActiveRoom(String),

    #[error("Unknown export format: {0}")]
    UnknownExportFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    pub(crate) fn not_found(entity: EntityKind, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Caller-facing failure class
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::NotFound { .. } => ErrorKind::NotFound,
            StoreError::Validation(_) | StoreError::UnknownExportFormat(_) => {
                ErrorKind::ValidationFailed
            }
            StoreError::TableLimitReached { .. } => ErrorKind::CapacityExceeded,
            StoreError::GuestsAssigned { .. }
            | StoreError::MenuOptionInUse { .. }
            | StoreError::LastRoom
            | StoreError::ActiveRoom(_) => ErrorKind::ReferentialConflict,
            StoreError::Serialization(_) => ErrorKind::Internal,
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        let message = err.to_string();
        match err {
            StoreError::NotFound { entity, id } => {
                let code = match entity {
                    EntityKind::Room => ErrorCode::RoomNotFound,
                    EntityKind::Table => ErrorCode::TableNotFound,
                    EntityKind::Seat => ErrorCode::SeatNotFound,
                    EntityKind::MenuOption => ErrorCode::MenuOptionNotFound,
                    EntityKind::Obstacle => ErrorCode::ObstacleNotFound,
                };
                AppError::with_message(code, message).with_detail("id", id)
            }
            StoreError::Validation(_) => AppError::with_message(ErrorCode::ValidationFailed, message),
            StoreError::TableLimitReached { limit } => {
                AppError::with_message(ErrorCode::TableLimitReached, message)
                    .with_detail("limit", limit)
            }
            StoreError::GuestsAssigned { table_id, count } => {
                AppError::with_message(ErrorCode::TableHasGuests, message)
                    .with_detail("table_id", table_id)
                    .with_detail("count", count)
            }
            StoreError::MenuOptionInUse { id, count } => {
                AppError::with_message(ErrorCode::MenuOptionInUse, message)
                    .with_detail("id", id)
                    .with_detail("count", count)
            }
            StoreError::LastRoom => AppError::with_message(ErrorCode::LastRoom, message),
            StoreError::ActiveRoom(id) => {
                AppError::with_message(ErrorCode::ActiveRoom, message).with_detail("id", id)
            }
            StoreError::UnknownExportFormat(format) => {
                AppError::with_message(ErrorCode::UnsupportedFormat, message)
                    .with_detail("format", format)
            }
            StoreError::Serialization(e) => {
                tracing::error!(error = %e, "Snapshot serialization failed");
                AppError::with_message(ErrorCode::SerializationError, message)
            }
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
