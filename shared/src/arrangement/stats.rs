//! Occupancy and menu statistics

use serde::{Deserialize, Serialize};

/// Store-wide statistics, computed from current state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrangementStatistics {
    pub total_tables: usize,
    pub total_seats: usize,
    pub assigned_seats: usize,
    pub unassigned_seats: usize,
    /// Percent of seats with a guest, 0 when there are no seats
    pub occupancy_rate: f64,
    /// Sum of occupied seats kept beyond their table's capacity
    pub seats_over_capacity: u32,
    pub tables: Vec<TableOccupancy>,
    pub menu_usage: Vec<MenuUsage>,
}

/// Per-table occupancy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableOccupancy {
    pub table_id: String,
    pub table_name: String,
    pub capacity: u32,
    pub seat_count: usize,
    pub assigned: usize,
    /// `assigned / capacity * 100`, 0 when capacity is 0
    pub occupancy_rate: f64,
    pub seats_over_capacity: u32,
}

/// Per-menu-option usage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuUsage {
    pub menu_option_id: String,
    pub name: String,
    pub count: usize,
    /// Share of all seats, 0 when there are no seats
    pub percentage: f64,
}

/// `part / whole * 100`, defined as 0 for an empty whole
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_zero_guard() {
        assert_eq!(percentage(0, 0), 0.0);
        assert_eq!(percentage(3, 0), 0.0);
        assert!(!percentage(0, 0).is_nan());
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(1, 4), 25.0);
        assert_eq!(percentage(8, 8), 100.0);
    }
}
