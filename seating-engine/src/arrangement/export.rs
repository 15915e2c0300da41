//! Snapshot export (JSON document or per-seat CSV)

use super::{ArrangementStore, StoreError, StoreResult};
use shared::arrangement::ArrangementSnapshot;
use shared::util::now_millis;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Header row of the CSV export
pub const CSV_HEADER: &str = "Table,Seat,Guest,Menu,Special Requirements";

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl FromStr for ExportFormat {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(StoreError::UnknownExportFormat(s.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

/// Quote a field when it contains a delimiter, quote or line break
fn quote_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

impl ArrangementStore {
    /// Copy of the full state, stamped with the current time
    pub fn snapshot(&self) -> ArrangementSnapshot {
        ArrangementSnapshot {
            tables: self.tables.clone(),
            seats: self.seats.clone(),
            menu_options: self.menu_options.clone(),
            rooms: self.rooms.clone(),
            obstacles: self.obstacles.clone(),
            current_room_id: self.current_room_id.clone(),
            table_limit: self.table_limit,
            exported_at: now_millis(),
        }
    }

    pub fn export(&self, format: ExportFormat) -> StoreResult<String> {
        tracing::debug!(format = %format, "Exporting arrangement");
        match format {
            ExportFormat::Json => Ok(serde_json::to_string_pretty(&self.snapshot())?),
            ExportFormat::Csv => Ok(self.export_csv()),
        }
    }

    /// Export by format name; unknown names fail validation
    pub fn export_as(&self, format: &str) -> StoreResult<String> {
        self.export(format.parse()?)
    }

    /// One row per seat, tables in creation order, seats by position.
    ///
    /// Only the requirements column is quoted; names and ids are written as-is.
    fn export_csv(&self) -> String {
        let menu_names: HashMap<&str, &str> = self
            .menu_options
            .iter()
            .map(|m| (m.id.as_str(), m.name.as_str()))
            .collect();

        let mut csv = format!("{CSV_HEADER}\n");
        for table in &self.tables {
            for seat in self.seats_for_table(&table.id) {
                let menu = seat
                    .menu_option_id
                    .as_deref()
                    .and_then(|id| menu_names.get(id).copied())
                    .unwrap_or("");
                let requirements = seat
                    .special_requirements
                    .as_deref()
                    .map(quote_field)
                    .unwrap_or_default();
                csv.push_str(&format!(
                    "{},{},{},{},{}\n",
                    table.name,
                    seat.position + 1,
                    seat.guest_id.as_deref().unwrap_or(""),
                    menu,
                    requirements
                ));
            }
        }
        csv
    }
}
