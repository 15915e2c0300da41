//! ArrangementStore - in-memory seating layout and its mutation API
//!
//! The store owns five collections (rooms, tables, seats, obstacles, menu
//! options) plus the current room pointer and the table limit. UI code reads
//! through the query methods and writes through the mutation methods; nothing
//! else touches the collections.
//!
//! # Mutation Flow
//!
//! ```text
//! mutation(id, input)
//!     ├─ 1. Resolve referenced ids (NotFound)
//!     ├─ 2. Validate input (ValidationFailed)
//!     ├─ 3. Check guards (CapacityExceeded / ReferentialConflict)
//!     ├─ 4. Apply the change
//!     ├─ 5. Reconcile derived seats (table capacity only)
//!     └─ 6. Emit event(s) to listeners and subscribers
//! ```
//!
//! Steps 1-3 never modify state, so a rejected call leaves the store as it
//! was and emits nothing.
//!
//! Mutations take `&mut self`: one store per editing session, one writer at a
//! time. Share across threads with [`SharedArrangementStore`].

mod assignment;
mod error;
mod events;
mod export;
mod menu;
mod obstacles;
mod restore;
mod rooms;
mod statistics;
mod tables;

#[cfg(test)]
mod tests;

pub use error::*;
pub use events::{EventBus, ListenerId};
pub use export::{CSV_HEADER, ExportFormat};
pub use tables::{MAX_TABLE_CAPACITY, TableUpdateResult};

use crate::core::Config;
use parking_lot::Mutex;
use shared::arrangement::{ArrangementEvent, EventPayload, PlanTier};
use shared::models::{
    DEFAULT_MENU_CATALOG, DiningTable, MenuOption, MenuOptionCreate, Obstacle, Room, RoomCreate,
    Seat,
};
use std::sync::Arc;
use tokio::sync::broadcast;

pub(crate) const ROOM_ID_PREFIX: &str = "room";
pub(crate) const TABLE_ID_PREFIX: &str = "table";
pub(crate) const SEAT_ID_PREFIX: &str = "seat";
pub(crate) const MENU_ID_PREFIX: &str = "menu";
pub(crate) const OBSTACLE_ID_PREFIX: &str = "obstacle";

/// Store handle for callers that share one editing session across threads
pub type SharedArrangementStore = Arc<Mutex<ArrangementStore>>;

/// State returned by [`ArrangementStore::initialize`]
#[derive(Debug, Clone, PartialEq)]
pub struct InitializeResult {
    pub menu_options: Vec<MenuOption>,
    pub rooms: Vec<Room>,
    pub current_room_id: Option<String>,
}

/// Seating arrangement store for one editing session
#[derive(Debug)]
pub struct ArrangementStore {
    rooms: Vec<Room>,
    tables: Vec<DiningTable>,
    seats: Vec<Seat>,
    obstacles: Vec<Obstacle>,
    menu_options: Vec<MenuOption>,
    current_room_id: Option<String>,
    table_limit: u32,
    initialized: bool,
    /// Room created by `initialize`
    default_room: RoomCreate,
    events: EventBus,
}

impl ArrangementStore {
    /// Create an empty, uninitialized store
    pub fn new(config: &Config) -> Self {
        Self {
            rooms: Vec::new(),
            tables: Vec::new(),
            seats: Vec::new(),
            obstacles: Vec::new(),
            menu_options: Vec::new(),
            current_room_id: None,
            table_limit: config.effective_table_limit(),
            initialized: false,
            default_room: RoomCreate {
                name: config.default_room_name.clone(),
                width: Some(config.default_room_width),
                height: Some(config.default_room_height),
                background: None,
            },
            events: EventBus::new(config.event_channel_capacity),
        }
    }

    /// Wrap the store for shared use
    pub fn into_shared(self) -> SharedArrangementStore {
        Arc::new(Mutex::new(self))
    }

    /// Seed the default menu catalog and the default room.
    ///
    /// Runs once per store; later calls return the current state unchanged.
    pub fn initialize(&mut self) -> StoreResult<InitializeResult> {
        if self.initialized {
            tracing::debug!("Arrangement store already initialized, skipping seed");
            return Ok(self.initialize_result());
        }

        for (name, category, color) in DEFAULT_MENU_CATALOG {
            self.add_menu_option(MenuOptionCreate {
                name: (*name).to_string(),
                category: *category,
                color: Some((*color).to_string()),
            })?;
        }
        // The first room becomes current automatically
        let default_room = self.default_room.clone();
        self.add_room(default_room)?;

        self.initialized = true;
        tracing::info!(
            menu_options = self.menu_options.len(),
            table_limit = self.table_limit,
            "Arrangement store initialized"
        );
        Ok(self.initialize_result())
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn initialize_result(&self) -> InitializeResult {
        InitializeResult {
            menu_options: self.menu_options.clone(),
            rooms: self.rooms.clone(),
            current_room_id: self.current_room_id.clone(),
        }
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Subscribe to events emitted after this call
    pub fn subscribe(&self) -> broadcast::Receiver<ArrangementEvent> {
        self.events.subscribe()
    }

    /// Register a callback invoked synchronously after each committed mutation
    pub fn add_listener<F>(&mut self, listener: F) -> ListenerId
    where
        F: Fn(&ArrangementEvent) + Send + Sync + 'static,
    {
        self.events.add_listener(listener)
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.events.remove_listener(id)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn table(&self, id: &str) -> Option<DiningTable> {
        self.tables.iter().find(|t| t.id == id).cloned()
    }

    pub fn seat(&self, id: &str) -> Option<Seat> {
        self.seats.iter().find(|s| s.id == id).cloned()
    }

    pub fn room(&self, id: &str) -> Option<Room> {
        self.rooms.iter().find(|r| r.id == id).cloned()
    }

    pub fn menu_option(&self, id: &str) -> Option<MenuOption> {
        self.menu_options.iter().find(|m| m.id == id).cloned()
    }

    pub fn obstacle(&self, id: &str) -> Option<Obstacle> {
        self.obstacles.iter().find(|o| o.id == id).cloned()
    }

    pub fn tables(&self) -> Vec<DiningTable> {
        self.tables.clone()
    }

    pub fn seats(&self) -> Vec<Seat> {
        self.seats.clone()
    }

    pub fn rooms(&self) -> Vec<Room> {
        self.rooms.clone()
    }

    pub fn menu_options(&self) -> Vec<MenuOption> {
        self.menu_options.clone()
    }

    pub fn obstacles(&self) -> Vec<Obstacle> {
        self.obstacles.clone()
    }

    /// Seats of one table ordered by position (empty for an unknown table)
    pub fn seats_for_table(&self, table_id: &str) -> Vec<Seat> {
        let mut seats: Vec<Seat> = self
            .seats
            .iter()
            .filter(|s| s.table_id == table_id)
            .cloned()
            .collect();
        seats.sort_by_key(|s| s.position);
        seats
    }

    /// The seat holding this guest, if any (at most one by construction)
    pub fn seat_for_guest(&self, guest_id: &str) -> Option<Seat> {
        self.seats
            .iter()
            .find(|s| s.guest_id.as_deref() == Some(guest_id))
            .cloned()
    }

    /// Every seated guest id, in seat storage order
    pub fn assigned_guest_ids(&self) -> Vec<String> {
        self.seats
            .iter()
            .filter_map(|s| s.guest_id.clone())
            .collect()
    }

    pub fn current_room_id(&self) -> Option<&str> {
        self.current_room_id.as_deref()
    }

    pub fn current_room(&self) -> Option<Room> {
        self.current_room_id.as_deref().and_then(|id| self.room(id))
    }

    // =========================================================================
    // Capacity tier
    // =========================================================================

    pub fn table_limit(&self) -> u32 {
        self.table_limit
    }

    /// Replace the table ceiling. Existing tables are never removed; a limit
    /// below the current count only blocks further adds.
    pub fn set_table_limit(&mut self, limit: u32) {
        if (self.tables.len() as u64) > u64::from(limit) {
            tracing::info!(
                limit,
                tables = self.tables.len(),
                "Table limit set below current table count"
            );
        }
        self.table_limit = limit;
        self.events.emit(EventPayload::TableLimitChanged { limit });
    }

    pub fn set_tier(&mut self, tier: PlanTier) {
        tracing::debug!(tier = %tier, "Switching plan tier");
        self.set_table_limit(tier.table_limit());
    }

    pub fn is_table_limit_reached(&self) -> bool {
        (self.tables.len() as u64) >= u64::from(self.table_limit)
    }

    // =========================================================================
    // Index lookups (NotFound on miss)
    // =========================================================================

    fn table_index(&self, id: &str) -> StoreResult<usize> {
        self.tables
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| StoreError::not_found(EntityKind::Table, id))
    }

    fn seat_index(&self, id: &str) -> StoreResult<usize> {
        self.seats
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| StoreError::not_found(EntityKind::Seat, id))
    }

    fn room_index(&self, id: &str) -> StoreResult<usize> {
        self.rooms
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| StoreError::not_found(EntityKind::Room, id))
    }

    fn menu_option_index(&self, id: &str) -> StoreResult<usize> {
        self.menu_options
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| StoreError::not_found(EntityKind::MenuOption, id))
    }

    fn obstacle_index(&self, id: &str) -> StoreResult<usize> {
        self.obstacles
            .iter()
            .position(|o| o.id == id)
            .ok_or_else(|| StoreError::not_found(EntityKind::Obstacle, id))
    }
}

impl Default for ArrangementStore {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
