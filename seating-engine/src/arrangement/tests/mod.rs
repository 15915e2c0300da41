use super::*;
use shared::arrangement::ArrangementEventType;
use shared::error::ErrorKind;
use shared::models::{
    DiningTableCreate, DiningTableUpdate, MenuCategory, MenuOptionUpdate, ObstacleCreate,
    ObstacleKind, ObstacleUpdate, RoomUpdate, TableShape,
};

fn create_test_store() -> ArrangementStore {
    let mut store = ArrangementStore::new(&Config::default());
    store.initialize().unwrap();
    store
}

fn create_store_with_limit(limit: u32) -> ArrangementStore {
    let mut store = ArrangementStore::new(&Config::default().with_table_limit(limit));
    store.initialize().unwrap();
    store
}

fn add_test_table(store: &mut ArrangementStore, name: &str, capacity: u32) -> DiningTable {
    store
        .add_table(DiningTableCreate {
            name: name.to_string(),
            capacity: Some(capacity),
            ..Default::default()
        })
        .unwrap()
}

fn set_capacity(store: &mut ArrangementStore, table_id: &str, capacity: u32) -> TableUpdateResult {
    store
        .update_table(
            table_id,
            DiningTableUpdate {
                capacity: Some(capacity),
                ..Default::default()
            },
        )
        .unwrap()
}

/// Seat at `position` of the table (panics if absent)
fn seat_at(store: &ArrangementStore, table_id: &str, position: u32) -> Seat {
    store
        .seats_for_table(table_id)
        .into_iter()
        .find(|s| s.position == position)
        .unwrap()
}

fn menu_id(store: &ArrangementStore, name: &str) -> String {
    store
        .menu_options()
        .into_iter()
        .find(|m| m.name == name)
        .unwrap()
        .id
}

/// Record every event the store emits from now on
fn record_events(store: &mut ArrangementStore) -> Arc<Mutex<Vec<ArrangementEvent>>> {
    let recorded = Arc::new(Mutex::new(Vec::new()));
    let sink = recorded.clone();
    store.add_listener(move |event| sink.lock().push(event.clone()));
    recorded
}

fn event_types(recorded: &Arc<Mutex<Vec<ArrangementEvent>>>) -> Vec<ArrangementEventType> {
    recorded.lock().iter().map(|e| e.event_type).collect()
}

/// Positions of the table's seats are exactly 0..n-1
fn assert_dense_positions(store: &ArrangementStore, table_id: &str) {
    let positions: Vec<u32> = store
        .seats_for_table(table_id)
        .iter()
        .map(|s| s.position)
        .collect();
    let expected: Vec<u32> = (0..positions.len() as u32).collect();
    assert_eq!(positions, expected, "positions of {table_id} are not dense");
}

mod test_events;
mod test_tables;
