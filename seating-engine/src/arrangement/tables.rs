//! Table lifecycle and seat reconciliation

use super::{ArrangementStore, SEAT_ID_PREFIX, StoreError, StoreResult, TABLE_ID_PREFIX};
use crate::utils::validation::{
    MAX_NAME_LEN, validate_coordinate, validate_dimension, validate_optional_name,
    validate_required_text,
};
use shared::arrangement::EventPayload;
use shared::models::{DEFAULT_TABLE_POSITION, DiningTable, DiningTableCreate, DiningTableUpdate, Seat};
use shared::util::generate_id;
use std::collections::HashSet;

/// Upper bound on seats per table
pub const MAX_TABLE_CAPACITY: u32 = 500;

/// Result of [`ArrangementStore::update_table`]
#[derive(Debug, Clone, PartialEq)]
pub struct TableUpdateResult {
    pub table: DiningTable,
    /// Occupied seats kept beyond `table.capacity` because a shrink could not
    /// remove them; 0 when the seat count matches the capacity
    pub seats_over_capacity: u32,
}

fn vacant_seat(table_id: &str, position: u32) -> Seat {
    Seat {
        id: generate_id(SEAT_ID_PREFIX),
        table_id: table_id.to_string(),
        position,
        guest_id: None,
        menu_option_id: None,
        special_requirements: None,
    }
}

pub(super) fn validate_capacity(capacity: Option<u32>) -> StoreResult<()> {
    if let Some(c) = capacity
        && c > MAX_TABLE_CAPACITY
    {
        return Err(StoreError::Validation(format!(
            "capacity must be at most {MAX_TABLE_CAPACITY}, got {c}"
        )));
    }
    Ok(())
}

impl ArrangementStore {
    /// Create a table and its `capacity` vacant seats (positions 0..capacity)
    pub fn add_table(&mut self, input: DiningTableCreate) -> StoreResult<DiningTable> {
        validate_required_text(&input.name, "name", MAX_NAME_LEN)?;
        validate_capacity(input.capacity)?;
        validate_dimension(input.width, "width")?;
        validate_dimension(input.height, "height")?;
        validate_coordinate(input.x, "x")?;
        validate_coordinate(input.y, "y")?;
        validate_coordinate(input.rotation, "rotation")?;

        if self.is_table_limit_reached() {
            tracing::warn!(
                limit = self.table_limit,
                tables = self.tables.len(),
                "Add table rejected: table limit reached"
            );
            return Err(StoreError::TableLimitReached {
                limit: self.table_limit,
            });
        }

        let defaults = input.shape.defaults();
        let table = DiningTable {
            id: generate_id(TABLE_ID_PREFIX),
            name: input.name,
            shape: input.shape,
            capacity: input.capacity.unwrap_or(defaults.capacity),
            x: input.x.unwrap_or(DEFAULT_TABLE_POSITION.0),
            y: input.y.unwrap_or(DEFAULT_TABLE_POSITION.1),
            width: input.width.unwrap_or(defaults.width),
            height: input.height.unwrap_or(defaults.height),
            rotation: input.rotation.unwrap_or(0.0),
        };
        let seats: Vec<Seat> = (0..table.capacity)
            .map(|position| vacant_seat(&table.id, position))
            .collect();

        self.tables.push(table.clone());
        self.seats.extend(seats.iter().cloned());

        tracing::debug!(
            table_id = %table.id,
            capacity = table.capacity,
            "Table added"
        );
        self.events.emit(EventPayload::TableAdded {
            table: table.clone(),
            seats,
        });
        Ok(table)
    }

    /// Patch a table. A capacity change reconciles its seats.
    pub fn update_table(
        &mut self,
        id: &str,
        patch: DiningTableUpdate,
    ) -> StoreResult<TableUpdateResult> {
        let index = self.table_index(id)?;
        validate_optional_name(&patch.name, "name")?;
        validate_capacity(patch.capacity)?;
        validate_dimension(patch.width, "width")?;
        validate_dimension(patch.height, "height")?;
        validate_coordinate(patch.x, "x")?;
        validate_coordinate(patch.y, "y")?;
        validate_coordinate(patch.rotation, "rotation")?;

        let table = &mut self.tables[index];
        let previous_capacity = table.capacity;
        if let Some(name) = patch.name {
            table.name = name;
        }
        if let Some(shape) = patch.shape {
            table.shape = shape;
        }
        if let Some(capacity) = patch.capacity {
            table.capacity = capacity;
        }
        if let Some(x) = patch.x {
            table.x = x;
        }
        if let Some(y) = patch.y {
            table.y = y;
        }
        if let Some(width) = patch.width {
            table.width = width;
        }
        if let Some(height) = patch.height {
            table.height = height;
        }
        if let Some(rotation) = patch.rotation {
            table.rotation = rotation;
        }
        let table = table.clone();

        // Re-sending the same capacity retries a previously blocked shrink
        if let Some(capacity) = patch.capacity
            && (capacity != previous_capacity || self.live_seat_count(&table.id) != capacity)
        {
            self.reconcile_seats(&table.id, capacity);
        }

        let seats_over_capacity = self.over_capacity(&table);
        if seats_over_capacity > 0 {
            tracing::warn!(
                table_id = %table.id,
                capacity = table.capacity,
                seats_over_capacity,
                "Shrink blocked by occupied seats"
            );
        }
        tracing::debug!(table_id = %table.id, "Table updated");

        self.events.emit(EventPayload::TableUpdated {
            table: table.clone(),
            seats_over_capacity,
        });
        Ok(TableUpdateResult {
            table,
            seats_over_capacity,
        })
    }

    /// Remove a table and its seats. Rejected while any seat has a guest.
    pub fn remove_table(&mut self, id: &str) -> StoreResult<DiningTable> {
        let index = self.table_index(id)?;
        let assigned = self
            .seats
            .iter()
            .filter(|s| s.table_id == id && s.is_occupied())
            .count();
        if assigned > 0 {
            tracing::warn!(table_id = %id, assigned, "Remove table rejected: guests assigned");
            return Err(StoreError::GuestsAssigned {
                table_id: id.to_string(),
                count: assigned,
            });
        }

        let table = self.tables.remove(index);
        let (mut removed, kept): (Vec<Seat>, Vec<Seat>) = std::mem::take(&mut self.seats)
            .into_iter()
            .partition(|s| s.table_id == table.id);
        self.seats = kept;
        removed.sort_by_key(|s| s.position);

        tracing::debug!(table_id = %table.id, seats = removed.len(), "Table removed");
        self.events.emit(EventPayload::TableRemoved {
            table: table.clone(),
            seats: removed,
        });
        Ok(table)
    }

    /// Unseat every guest at a table; returns the cleared guest ids in seat order
    pub fn clear_table_guests(&mut self, table_id: &str) -> StoreResult<Vec<String>> {
        self.table_index(table_id)?;

        let mut cleared: Vec<(u32, usize, String)> = Vec::new();
        for (index, seat) in self.seats.iter_mut().enumerate() {
            if seat.table_id == table_id
                && let Some(guest_id) = seat.guest_id.take()
            {
                cleared.push((seat.position, index, guest_id));
            }
        }
        cleared.sort_by_key(|(position, _, _)| *position);

        tracing::debug!(table_id = %table_id, cleared = cleared.len(), "Table guests cleared");
        let mut guest_ids = Vec::with_capacity(cleared.len());
        for (_, index, guest_id) in cleared {
            self.events.emit(EventPayload::GuestRemoved {
                seat: self.seats[index].clone(),
                previous_guest_id: Some(guest_id.clone()),
            });
            guest_ids.push(guest_id);
        }
        Ok(guest_ids)
    }

    /// Live seats beyond the table's capacity; `None` for an unknown table
    pub fn seats_over_capacity(&self, table_id: &str) -> Option<u32> {
        self.tables
            .iter()
            .find(|t| t.id == table_id)
            .map(|t| self.over_capacity(t))
    }

    pub(super) fn over_capacity(&self, table: &DiningTable) -> u32 {
        self.live_seat_count(&table.id).saturating_sub(table.capacity)
    }

    fn live_seat_count(&self, table_id: &str) -> u32 {
        self.seats.iter().filter(|s| s.table_id == table_id).count() as u32
    }

    /// Bring the table's seat count toward `capacity`.
    ///
    /// Growing appends vacant seats after the last position. Shrinking removes
    /// vacant seats at positions >= capacity; occupied ones stay and the
    /// survivors are renumbered densely in their previous order.
    fn reconcile_seats(&mut self, table_id: &str, capacity: u32) {
        let live = self.live_seat_count(table_id);

        if capacity > live {
            // Positions are dense, so the next free one is `live`
            let added: Vec<Seat> = (live..capacity)
                .map(|position| vacant_seat(table_id, position))
                .collect();
            tracing::debug!(table_id = %table_id, added = added.len(), "Seats added");
            self.seats.extend(added);
            return;
        }

        if capacity < live {
            let removable: HashSet<String> = self
                .seats
                .iter()
                .filter(|s| s.table_id == table_id && s.position >= capacity && !s.is_occupied())
                .map(|s| s.id.clone())
                .collect();
            tracing::debug!(table_id = %table_id, removed = removable.len(), "Seats removed");
            self.seats.retain(|s| !removable.contains(&s.id));
            self.renumber_seats(table_id);
        }
    }

    /// Reset positions of one table to 0..n-1, keeping their relative order
    fn renumber_seats(&mut self, table_id: &str) {
        let mut order: Vec<(u32, usize)> = self
            .seats
            .iter()
            .enumerate()
            .filter(|(_, s)| s.table_id == table_id)
            .map(|(index, s)| (s.position, index))
            .collect();
        order.sort_unstable();
        for (position, (_, index)) in order.into_iter().enumerate() {
            self.seats[index].position = position as u32;
        }
    }
}
