//! Rebuild a store from an exported snapshot

use super::tables::validate_capacity;
use super::{ArrangementStore, StoreError, StoreResult};
use crate::core::Config;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_color, validate_coordinate,
    validate_dimension, validate_optional_text, validate_required_text,
};
use shared::arrangement::ArrangementSnapshot;
use std::collections::{HashMap, HashSet};

fn invalid(message: impl Into<String>) -> StoreError {
    StoreError::Validation(message.into())
}

/// Reject duplicate ids within one collection
fn check_unique<'a>(ids: impl Iterator<Item = &'a str>, collection: &str) -> StoreResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(invalid(format!("duplicate {collection} id: {id}")));
        }
    }
    Ok(())
}

/// Field checks the mutation API applies on create/update
fn validate_entities(snapshot: &ArrangementSnapshot) -> StoreResult<()> {
    for room in &snapshot.rooms {
        validate_required_text(&room.name, "room name", MAX_NAME_LEN)?;
        validate_dimension(Some(room.width), "room width")?;
        validate_dimension(Some(room.height), "room height")?;
        validate_optional_text(&room.background, "room background", MAX_SHORT_TEXT_LEN)?;
    }
    for table in &snapshot.tables {
        validate_required_text(&table.name, "table name", MAX_NAME_LEN)?;
        validate_capacity(Some(table.capacity))?;
        validate_dimension(Some(table.width), "table width")?;
        validate_dimension(Some(table.height), "table height")?;
        validate_coordinate(Some(table.x), "table x")?;
        validate_coordinate(Some(table.y), "table y")?;
        validate_coordinate(Some(table.rotation), "table rotation")?;
    }
    for option in &snapshot.menu_options {
        validate_required_text(&option.name, "menu option name", MAX_NAME_LEN)?;
        validate_color(&option.color)?;
    }
    for obstacle in &snapshot.obstacles {
        validate_required_text(&obstacle.name, "obstacle name", MAX_NAME_LEN)?;
        validate_dimension(Some(obstacle.width), "obstacle width")?;
        validate_dimension(Some(obstacle.height), "obstacle height")?;
        validate_coordinate(Some(obstacle.x), "obstacle x")?;
        validate_coordinate(Some(obstacle.y), "obstacle y")?;
        validate_coordinate(Some(obstacle.rotation), "obstacle rotation")?;
    }
    for seat in &snapshot.seats {
        if let Some(guest_id) = seat.guest_id.as_deref() {
            validate_required_text(guest_id, "guest_id", MAX_SHORT_TEXT_LEN)?;
        }
        validate_optional_text(
            &seat.special_requirements,
            "special_requirements",
            MAX_NOTE_LEN,
        )?;
    }
    Ok(())
}

fn validate_snapshot(snapshot: &ArrangementSnapshot) -> StoreResult<()> {
    if snapshot.rooms.is_empty() {
        return Err(invalid("snapshot has no rooms"));
    }
    check_unique(snapshot.rooms.iter().map(|r| r.id.as_str()), "room")?;
    check_unique(snapshot.tables.iter().map(|t| t.id.as_str()), "table")?;
    check_unique(snapshot.seats.iter().map(|s| s.id.as_str()), "seat")?;
    check_unique(snapshot.menu_options.iter().map(|m| m.id.as_str()), "menu option")?;
    check_unique(snapshot.obstacles.iter().map(|o| o.id.as_str()), "obstacle")?;
    validate_entities(snapshot)?;

    if let Some(current) = snapshot.current_room_id.as_deref()
        && !snapshot.rooms.iter().any(|r| r.id == current)
    {
        return Err(invalid(format!("current room {current} does not exist")));
    }

    let menu_ids: HashSet<&str> = snapshot.menu_options.iter().map(|m| m.id.as_str()).collect();
    let mut positions: HashMap<&str, Vec<u32>> = snapshot
        .tables
        .iter()
        .map(|t| (t.id.as_str(), Vec::new()))
        .collect();
    let mut guests = HashSet::new();

    for seat in &snapshot.seats {
        let Some(table_positions) = positions.get_mut(seat.table_id.as_str()) else {
            return Err(invalid(format!(
                "seat {} references unknown table {}",
                seat.id, seat.table_id
            )));
        };
        table_positions.push(seat.position);

        if let Some(menu_id) = seat.menu_option_id.as_deref()
            && !menu_ids.contains(menu_id)
        {
            return Err(invalid(format!(
                "seat {} references unknown menu option {menu_id}",
                seat.id
            )));
        }
        if let Some(guest_id) = seat.guest_id.as_deref()
            && !guests.insert(guest_id)
        {
            return Err(invalid(format!("guest {guest_id} is seated twice")));
        }
    }

    for table in &snapshot.tables {
        let mut table_positions = positions.remove(table.id.as_str()).unwrap_or_default();
        table_positions.sort_unstable();
        let dense = table_positions
            .iter()
            .enumerate()
            .all(|(expected, &position)| position as usize == expected);
        if !dense {
            return Err(invalid(format!(
                "seat positions of table {} are not 0..n-1",
                table.id
            )));
        }
        // Reconciliation never leaves fewer seats than the capacity; a
        // surplus is what a blocked shrink keeps
        if (table_positions.len() as u64) < u64::from(table.capacity) {
            return Err(invalid(format!(
                "table {} has {} seat(s) for capacity {}",
                table.id,
                table_positions.len(),
                table.capacity
            )));
        }
    }
    Ok(())
}

impl ArrangementStore {
    /// Restore a validated snapshot into a fresh, initialized store.
    ///
    /// The snapshot's table limit wins over the configured one. A missing
    /// current room falls back to the first room.
    pub fn from_snapshot(snapshot: ArrangementSnapshot, config: &Config) -> StoreResult<Self> {
        validate_snapshot(&snapshot)?;

        let mut store = Self::new(config);
        store.current_room_id = snapshot
            .current_room_id
            .or_else(|| snapshot.rooms.first().map(|r| r.id.clone()));
        store.rooms = snapshot.rooms;
        store.tables = snapshot.tables;
        store.seats = snapshot.seats;
        store.menu_options = snapshot.menu_options;
        store.obstacles = snapshot.obstacles;
        store.table_limit = snapshot.table_limit;
        store.initialized = true;

        tracing::info!(
            rooms = store.rooms.len(),
            tables = store.tables.len(),
            seats = store.seats.len(),
            exported_at = snapshot.exported_at,
            "Arrangement restored from snapshot"
        );
        Ok(store)
    }

    /// Parse and restore a JSON export
    pub fn from_json(json: &str, config: &Config) -> StoreResult<Self> {
        let snapshot: ArrangementSnapshot = serde_json::from_str(json)?;
        Self::from_snapshot(snapshot, config)
    }
}
