//! Input validation helpers
//!
//! Centralized text length constants and validation functions used by the
//! store before it touches any state.

use crate::arrangement::{StoreError, StoreResult};

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: room, table, menu option, obstacle
pub const MAX_NAME_LEN: usize = 200;

/// Seat special requirements (allergies, accessibility notes)
pub const MAX_NOTE_LEN: usize = 500;

/// Guest directory ids and background references
pub const MAX_SHORT_TEXT_LEN: usize = 2048;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> StoreResult<()> {
    if value.trim().is_empty() {
        return Err(StoreError::Validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(StoreError::Validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> StoreResult<()> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(StoreError::Validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

/// Validate an optional rename: absent is fine, present must be a valid name.
pub fn validate_optional_name(value: &Option<String>, field: &str) -> StoreResult<()> {
    match value {
        Some(v) => validate_required_text(v, field, MAX_NAME_LEN),
        None => Ok(()),
    }
}

/// Geometry must be finite; sizes must also be non-negative.
pub fn validate_dimension(value: Option<f64>, field: &str) -> StoreResult<()> {
    if let Some(v) = value
        && (!v.is_finite() || v < 0.0)
    {
        return Err(StoreError::Validation(format!(
            "{field} must be a finite, non-negative number"
        )));
    }
    Ok(())
}

/// Coordinates and rotation must be finite.
pub fn validate_coordinate(value: Option<f64>, field: &str) -> StoreResult<()> {
    if let Some(v) = value
        && !v.is_finite()
    {
        return Err(StoreError::Validation(format!(
            "{field} must be a finite number"
        )));
    }
    Ok(())
}

/// Normalize a color to `#rrggbb` or reject it.
pub fn validate_color(value: &str) -> StoreResult<String> {
    shared::color::normalize_hex_color(value)
        .ok_or_else(|| StoreError::Validation(format!("color must be a hex color, got {value}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("Head Table", "name", MAX_NAME_LEN).is_ok());
        assert!(validate_required_text("   ", "name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text(&"x".repeat(201), "name", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn test_optional_text() {
        assert!(validate_optional_text(&None, "note", MAX_NOTE_LEN).is_ok());
        assert!(validate_optional_text(&Some("".into()), "note", MAX_NOTE_LEN).is_ok());
        assert!(validate_optional_text(&Some("x".repeat(501)), "note", MAX_NOTE_LEN).is_err());
    }

    #[test]
    fn test_geometry() {
        assert!(validate_dimension(Some(0.0), "width").is_ok());
        assert!(validate_dimension(Some(-1.0), "width").is_err());
        assert!(validate_dimension(Some(f64::NAN), "width").is_err());
        assert!(validate_coordinate(Some(-40.0), "x").is_ok());
        assert!(validate_coordinate(Some(f64::INFINITY), "x").is_err());
    }

    #[test]
    fn test_color() {
        assert_eq!(validate_color("#ABC").unwrap(), "#aabbcc");
        assert!(validate_color("teal").is_err());
    }
}
