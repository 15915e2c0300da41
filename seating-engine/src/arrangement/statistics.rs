//! Occupancy and menu usage statistics

use super::ArrangementStore;
use shared::arrangement::{ArrangementStatistics, MenuUsage, TableOccupancy, percentage};
use std::collections::HashMap;

impl ArrangementStore {
    /// Occupancy and menu usage computed from the current state
    pub fn statistics(&self) -> ArrangementStatistics {
        let total_seats = self.seats.len();
        let assigned_seats = self.seats.iter().filter(|s| s.is_occupied()).count();

        // table_id -> (seat count, assigned count)
        let mut per_table: HashMap<&str, (usize, usize)> = HashMap::new();
        let mut per_menu: HashMap<&str, usize> = HashMap::new();
        for seat in &self.seats {
            let entry = per_table.entry(seat.table_id.as_str()).or_default();
            entry.0 += 1;
            if seat.is_occupied() {
                entry.1 += 1;
            }
            if let Some(menu_id) = seat.menu_option_id.as_deref() {
                *per_menu.entry(menu_id).or_default() += 1;
            }
        }

        let tables: Vec<TableOccupancy> = self
            .tables
            .iter()
            .map(|table| {
                let (seat_count, assigned) =
                    per_table.get(table.id.as_str()).copied().unwrap_or_default();
                TableOccupancy {
                    table_id: table.id.clone(),
                    table_name: table.name.clone(),
                    capacity: table.capacity,
                    seat_count,
                    assigned,
                    occupancy_rate: percentage(assigned, table.capacity as usize),
                    seats_over_capacity: self.over_capacity(table),
                }
            })
            .collect();

        let menu_usage = self
            .menu_options
            .iter()
            .map(|option| {
                let count = per_menu.get(option.id.as_str()).copied().unwrap_or(0);
                MenuUsage {
                    menu_option_id: option.id.clone(),
                    name: option.name.clone(),
                    count,
                    percentage: percentage(count, total_seats),
                }
            })
            .collect();

        ArrangementStatistics {
            total_tables: self.tables.len(),
            total_seats,
            assigned_seats,
            unassigned_seats: total_seats - assigned_seats,
            occupancy_rate: percentage(assigned_seats, total_seats),
            seats_over_capacity: tables.iter().map(|t| t.seats_over_capacity).sum(),
            tables,
            menu_usage,
        }
    }
}
