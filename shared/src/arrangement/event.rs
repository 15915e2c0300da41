//! Arrangement events - notifications emitted after a mutation commits

use crate::models::{DiningTable, MenuOption, Obstacle, Room, Seat};
use crate::types::Timestamp;
use serde::{Deserialize, Serialize};

/// Arrangement event envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrangementEvent {
    /// Event unique ID
    pub event_id: String,
    /// Per-store sequence number, starting at 1
    pub sequence: u64,
    /// Unix milliseconds
    pub timestamp: Timestamp,
    pub event_type: ArrangementEventType,
    pub payload: EventPayload,
}

impl ArrangementEvent {
    pub fn new(sequence: u64, payload: EventPayload) -> Self {
        Self {
            event_id: uuid::Uuid::new_v4().to_string(),
            sequence,
            timestamp: crate::util::now_millis(),
            event_type: payload.event_type(),
            payload,
        }
    }
}

/// Event type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArrangementEventType {
    // Tables
    TableAdded,
    TableUpdated,
    TableRemoved,
    TableLimitChanged,

    // Seats
    GuestAssigned,
    GuestRemoved,
    MenuAssigned,
    SpecialRequirementsAdded,

    // Menu options
    MenuOptionAdded,
    MenuOptionUpdated,
    MenuOptionRemoved,

    // Rooms
    RoomAdded,
    RoomUpdated,
    RoomRemoved,
    CurrentRoomChanged,

    // Obstacles
    ObstacleAdded,
    ObstacleUpdated,
    ObstacleRemoved,
}

impl std::fmt::Display for ArrangementEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::TableAdded => "table-added",
            Self::TableUpdated => "table-updated",
            Self::TableRemoved => "table-removed",
            Self::TableLimitChanged => "table-limit-changed",
            Self::GuestAssigned => "guest-assigned",
            Self::GuestRemoved => "guest-removed",
            Self::MenuAssigned => "menu-assigned",
            Self::SpecialRequirementsAdded => "special-requirements-added",
            Self::MenuOptionAdded => "menu-option-added",
            Self::MenuOptionUpdated => "menu-option-updated",
            Self::MenuOptionRemoved => "menu-option-removed",
            Self::RoomAdded => "room-added",
            Self::RoomUpdated => "room-updated",
            Self::RoomRemoved => "room-removed",
            Self::CurrentRoomChanged => "current-room-changed",
            Self::ObstacleAdded => "obstacle-added",
            Self::ObstacleUpdated => "obstacle-updated",
            Self::ObstacleRemoved => "obstacle-removed",
        };
        f.write_str(name)
    }
}

/// Event payload variants, each carrying the resulting (or removed) entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum EventPayload {
    // ========== Tables ==========
    TableAdded {
        table: DiningTable,
        seats: Vec<Seat>,
    },
    TableUpdated {
        table: DiningTable,
        /// Occupied seats kept beyond the stated capacity
        seats_over_capacity: u32,
    },
    TableRemoved {
        table: DiningTable,
        seats: Vec<Seat>,
    },
    TableLimitChanged {
        limit: u32,
    },

    // ========== Seats ==========
    GuestAssigned {
        seat: Seat,
        /// Seat the guest was moved away from, if any
        #[serde(skip_serializing_if = "Option::is_none")]
        previous_seat_id: Option<String>,
        /// Guest who held the target seat before and is now unseated
        #[serde(skip_serializing_if = "Option::is_none")]
        displaced_guest_id: Option<String>,
    },
    GuestRemoved {
        seat: Seat,
        #[serde(skip_serializing_if = "Option::is_none")]
        previous_guest_id: Option<String>,
    },
    MenuAssigned {
        seat: Seat,
    },
    SpecialRequirementsAdded {
        seat: Seat,
    },

    // ========== Menu options ==========
    MenuOptionAdded {
        menu_option: MenuOption,
    },
    MenuOptionUpdated {
        menu_option: MenuOption,
    },
    MenuOptionRemoved {
        menu_option: MenuOption,
    },

    // ========== Rooms ==========
    RoomAdded {
        room: Room,
    },
    RoomUpdated {
        room: Room,
    },
    RoomRemoved {
        room: Room,
    },
    CurrentRoomChanged {
        room: Room,
        #[serde(skip_serializing_if = "Option::is_none")]
        previous_room_id: Option<String>,
    },

    // ========== Obstacles ==========
    ObstacleAdded {
        obstacle: Obstacle,
    },
    ObstacleUpdated {
        obstacle: Obstacle,
    },
    ObstacleRemoved {
        obstacle: Obstacle,
    },
}

impl EventPayload {
    pub fn event_type(&self) -> ArrangementEventType {
        match self {
            Self::TableAdded { .. } => ArrangementEventType::TableAdded,
            Self::TableUpdated { .. } => ArrangementEventType::TableUpdated,
            Self::TableRemoved { .. } => ArrangementEventType::TableRemoved,
            Self::TableLimitChanged { .. } => ArrangementEventType::TableLimitChanged,
            Self::GuestAssigned { .. } => ArrangementEventType::GuestAssigned,
            Self::GuestRemoved { .. } => ArrangementEventType::GuestRemoved,
            Self::MenuAssigned { .. } => ArrangementEventType::MenuAssigned,
            Self::SpecialRequirementsAdded { .. } => {
                ArrangementEventType::SpecialRequirementsAdded
            }
            Self::MenuOptionAdded { .. } => ArrangementEventType::MenuOptionAdded,
            Self::MenuOptionUpdated { .. } => ArrangementEventType::MenuOptionUpdated,
            Self::MenuOptionRemoved { .. } => ArrangementEventType::MenuOptionRemoved,
            Self::RoomAdded { .. } => ArrangementEventType::RoomAdded,
            Self::RoomUpdated { .. } => ArrangementEventType::RoomUpdated,
            Self::RoomRemoved { .. } => ArrangementEventType::RoomRemoved,
            Self::CurrentRoomChanged { .. } => ArrangementEventType::CurrentRoomChanged,
            Self::ObstacleAdded { .. } => ArrangementEventType::ObstacleAdded,
            Self::ObstacleUpdated { .. } => ArrangementEventType::ObstacleUpdated,
            Self::ObstacleRemoved { .. } => ArrangementEventType::ObstacleRemoved,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_display_matches_wire_name() {
        for event_type in [
            ArrangementEventType::TableAdded,
            ArrangementEventType::SpecialRequirementsAdded,
            ArrangementEventType::CurrentRoomChanged,
            ArrangementEventType::MenuOptionRemoved,
        ] {
            let json = serde_json::to_string(&event_type).unwrap();
            assert_eq!(json, format!("\"{}\"", event_type));
        }
    }

    #[test]
    fn test_new_event_derives_type_from_payload() {
        let event = ArrangementEvent::new(7, EventPayload::TableLimitChanged { limit: 3 });
        assert_eq!(event.sequence, 7);
        assert_eq!(event.event_type, ArrangementEventType::TableLimitChanged);
        assert!(!event.event_id.is_empty());
    }

    #[test]
    fn test_payload_tagged_serialization() {
        let payload = EventPayload::TableLimitChanged { limit: 12 };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["type"], "table-limit-changed");
        assert_eq!(json["limit"], 12);
    }
}
