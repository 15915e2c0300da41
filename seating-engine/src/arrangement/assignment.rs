//! Per-seat assignments: guest, menu option, special requirements

use super::{ArrangementStore, StoreResult};
use crate::utils::validation::{
    MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text, validate_required_text,
};
use shared::arrangement::EventPayload;
use shared::models::Seat;

impl ArrangementStore {
    /// Seat a guest. A guest sits on at most one seat, so any other seat
    /// holding the same guest is cleared first.
    pub fn assign_guest_to_seat(&mut self, seat_id: &str, guest_id: &str) -> StoreResult<Seat> {
        let target = self.seat_index(seat_id)?;
        validate_required_text(guest_id, "guest_id", MAX_SHORT_TEXT_LEN)?;

        let mut previous_seat_id = None;
        if let Some(previous) = self
            .seats
            .iter_mut()
            .find(|s| s.id != seat_id && s.guest_id.as_deref() == Some(guest_id))
        {
            previous.guest_id = None;
            previous_seat_id = Some(previous.id.clone());
        }

        let seat = &mut self.seats[target];
        let displaced_guest_id = seat
            .guest_id
            .replace(guest_id.to_string())
            .filter(|g| g != guest_id);
        let seat = seat.clone();

        if let Some(displaced) = &displaced_guest_id {
            tracing::info!(
                seat_id = %seat.id,
                displaced_guest_id = %displaced,
                "Guest assignment displaced the seat's previous guest"
            );
        }
        tracing::debug!(
            seat_id = %seat.id,
            guest_id = %guest_id,
            previous_seat_id = ?previous_seat_id,
            "Guest assigned"
        );
        self.events.emit(EventPayload::GuestAssigned {
            seat: seat.clone(),
            previous_seat_id,
            displaced_guest_id,
        });
        Ok(seat)
    }

    /// Clear the seat's guest; returns who was sitting there
    pub fn remove_guest_from_seat(&mut self, seat_id: &str) -> StoreResult<Option<String>> {
        let index = self.seat_index(seat_id)?;
        let previous_guest_id = self.seats[index].guest_id.take();
        let seat = self.seats[index].clone();

        tracing::debug!(seat_id = %seat.id, previous_guest_id = ?previous_guest_id, "Guest removed");
        self.events.emit(EventPayload::GuestRemoved {
            seat,
            previous_guest_id: previous_guest_id.clone(),
        });
        Ok(previous_guest_id)
    }

    /// Select a menu option for the seat; `None` clears the selection
    pub fn assign_menu_to_seat(
        &mut self,
        seat_id: &str,
        menu_option_id: Option<&str>,
    ) -> StoreResult<Seat> {
        let index = self.seat_index(seat_id)?;
        if let Some(menu_id) = menu_option_id {
            self.menu_option_index(menu_id)?;
        }

        let seat = &mut self.seats[index];
        seat.menu_option_id = menu_option_id.map(str::to_string);
        let seat = seat.clone();

        tracing::debug!(seat_id = %seat.id, menu_option_id = ?seat.menu_option_id, "Menu assigned");
        self.events
            .emit(EventPayload::MenuAssigned { seat: seat.clone() });
        Ok(seat)
    }

    /// Overwrite the seat's free-text requirements; empty text clears them
    pub fn add_special_requirements(&mut self, seat_id: &str, text: &str) -> StoreResult<Seat> {
        let index = self.seat_index(seat_id)?;
        let text = (!text.is_empty()).then(|| text.to_string());
        validate_optional_text(&text, "special_requirements", MAX_NOTE_LEN)?;

        let seat = &mut self.seats[index];
        seat.special_requirements = text;
        let seat = seat.clone();

        tracing::debug!(seat_id = %seat.id, "Special requirements updated");
        self.events
            .emit(EventPayload::SpecialRequirementsAdded { seat: seat.clone() });
        Ok(seat)
    }
}
