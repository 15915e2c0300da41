//! Unified error system for the seating engine
//!
//! - [`ErrorCode`]: Standardized error codes
//! - [`ErrorCategory`]: Classification of errors by entity
//! - [`ErrorKind`]: Classification of errors by how the caller reacts
//! - [`AppError`]: Rich error type with codes, messages, and details
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Room errors
//! - 2xxx: Table errors
//! - 3xxx: Seat errors
//! - 4xxx: Menu option errors
//! - 5xxx: Obstacle errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ErrorKind};
//!
//! let err = AppError::with_message(ErrorCode::TableHasGuests, "Table has 3 guests assigned")
//!     .with_detail("count", 3);
//! assert_eq!(err.kind(), ErrorKind::ReferentialConflict);
//! ```

mod category;
mod codes;
mod types;

pub use category::{ErrorCategory, ErrorKind};
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
