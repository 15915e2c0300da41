//! Room lifecycle and the current-room pointer

use super::{ArrangementStore, ROOM_ID_PREFIX, StoreError, StoreResult};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_dimension, validate_optional_name,
    validate_optional_text, validate_required_text,
};
use shared::arrangement::EventPayload;
use shared::models::{DEFAULT_ROOM_HEIGHT, DEFAULT_ROOM_WIDTH, Room, RoomCreate, RoomUpdate};
use shared::util::generate_id;

impl ArrangementStore {
    /// Create a room. The first room of a store also becomes the current one.
    pub fn add_room(&mut self, input: RoomCreate) -> StoreResult<Room> {
        validate_required_text(&input.name, "name", MAX_NAME_LEN)?;
        validate_dimension(input.width, "width")?;
        validate_dimension(input.height, "height")?;
        validate_optional_text(&input.background, "background", MAX_SHORT_TEXT_LEN)?;

        let room = Room {
            id: generate_id(ROOM_ID_PREFIX),
            name: input.name,
            width: input.width.unwrap_or(DEFAULT_ROOM_WIDTH),
            height: input.height.unwrap_or(DEFAULT_ROOM_HEIGHT),
            background: input.background.filter(|b| !b.is_empty()),
        };
        self.rooms.push(room.clone());
        let becomes_current = self.current_room_id.is_none();
        if becomes_current {
            self.current_room_id = Some(room.id.clone());
        }

        tracing::debug!(room_id = %room.id, name = %room.name, "Room added");
        self.events
            .emit(EventPayload::RoomAdded { room: room.clone() });
        if becomes_current {
            self.events.emit(EventPayload::CurrentRoomChanged {
                room: room.clone(),
                previous_room_id: None,
            });
        }
        Ok(room)
    }

    /// Patch a room. An empty `background` clears it.
    pub fn update_room(&mut self, id: &str, patch: RoomUpdate) -> StoreResult<Room> {
        let index = self.room_index(id)?;
        validate_optional_name(&patch.name, "name")?;
        validate_dimension(patch.width, "width")?;
        validate_dimension(patch.height, "height")?;
        validate_optional_text(&patch.background, "background", MAX_SHORT_TEXT_LEN)?;

        let room = &mut self.rooms[index];
        if let Some(name) = patch.name {
            room.name = name;
        }
        if let Some(width) = patch.width {
            room.width = width;
        }
        if let Some(height) = patch.height {
            room.height = height;
        }
        if let Some(background) = patch.background {
            room.background = (!background.is_empty()).then_some(background);
        }
        let room = room.clone();

        tracing::debug!(room_id = %room.id, "Room updated");
        self.events
            .emit(EventPayload::RoomUpdated { room: room.clone() });
        Ok(room)
    }

    /// Remove a room that is neither the last one nor the current one.
    ///
    /// Tables are positioned by coordinate only, so nothing cascades.
    pub fn remove_room(&mut self, id: &str) -> StoreResult<Room> {
        let index = self.room_index(id)?;
        if self.rooms.len() <= 1 {
            tracing::warn!(room_id = %id, "Remove room rejected: last room");
            return Err(StoreError::LastRoom);
        }
        if self.current_room_id.as_deref() == Some(id) {
            tracing::warn!(room_id = %id, "Remove room rejected: current room");
            return Err(StoreError::ActiveRoom(id.to_string()));
        }

        let room = self.rooms.remove(index);
        tracing::debug!(room_id = %room.id, "Room removed");
        self.events
            .emit(EventPayload::RoomRemoved { room: room.clone() });
        Ok(room)
    }

    pub fn set_current_room(&mut self, id: &str) -> StoreResult<Room> {
        let index = self.room_index(id)?;
        let room = self.rooms[index].clone();
        let previous_room_id = self.current_room_id.replace(room.id.clone());

        tracing::debug!(room_id = %room.id, previous_room_id = ?previous_room_id, "Current room changed");
        self.events.emit(EventPayload::CurrentRoomChanged {
            room: room.clone(),
            previous_room_id,
        });
        Ok(room)
    }
}
