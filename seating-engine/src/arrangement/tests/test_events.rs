use super::*;

#[test]
fn test_one_event_per_mutation() {
    let mut store = create_test_store();
    let recorded = record_events(&mut store);

    let table = add_test_table(&mut store, "T1", 2);
    let seat = seat_at(&store, &table.id, 0);
    store.assign_guest_to_seat(&seat.id, "g1").unwrap();
    store.remove_guest_from_seat(&seat.id).unwrap();
    store.add_special_requirements(&seat.id, "vegan").unwrap();
    set_capacity(&mut store, &table.id, 3);
    store.remove_table(&table.id).unwrap();

    assert_eq!(
        event_types(&recorded),
        vec![
            ArrangementEventType::TableAdded,
            ArrangementEventType::GuestAssigned,
            ArrangementEventType::GuestRemoved,
            ArrangementEventType::SpecialRequirementsAdded,
            ArrangementEventType::TableUpdated,
            ArrangementEventType::TableRemoved,
        ]
    );
}

#[test]
fn test_rejected_mutation_emits_nothing() {
    let mut store = create_store_with_limit(1);
    add_test_table(&mut store, "T1", 2);
    let recorded = record_events(&mut store);

    assert!(
        store
            .add_table(DiningTableCreate {
                name: "T2".to_string(),
                ..Default::default()
            })
            .is_err()
    );
    assert!(store.remove_room("room_missing").is_err());
    assert!(store.assign_guest_to_seat("seat_missing", "g1").is_err());

    assert!(recorded.lock().is_empty());
}

#[test]
fn test_initialize_emits_seed_events() {
    let mut store = ArrangementStore::new(&Config::default());
    let recorded = record_events(&mut store);
    store.initialize().unwrap();

    let types = event_types(&recorded);
    let menu_added = types
        .iter()
        .filter(|t| **t == ArrangementEventType::MenuOptionAdded)
        .count();
    assert_eq!(menu_added, DEFAULT_MENU_CATALOG.len());
    assert_eq!(
        &types[types.len() - 2..],
        &[
            ArrangementEventType::RoomAdded,
            ArrangementEventType::CurrentRoomChanged,
        ]
    );

    // A second call is a no-op
    store.initialize().unwrap();
    assert_eq!(event_types(&recorded).len(), types.len());
}

#[test]
fn test_sequence_numbers_increase() {
    let mut store = create_test_store();
    let recorded = record_events(&mut store);
    add_test_table(&mut store, "T1", 1);
    add_test_table(&mut store, "T2", 1);

    let events = recorded.lock();
    assert_eq!(events[1].sequence, events[0].sequence + 1);
    assert_ne!(events[0].event_id, events[1].event_id);
}

#[test]
fn test_table_updated_carries_over_capacity() {
    let mut store = create_test_store();
    let table = add_test_table(&mut store, "T1", 3);
    store
        .assign_guest_to_seat(&seat_at(&store, &table.id, 2).id, "g1")
        .unwrap();
    let recorded = record_events(&mut store);

    set_capacity(&mut store, &table.id, 1);

    let events = recorded.lock();
    match &events[0].payload {
        EventPayload::TableUpdated {
            table: updated,
            seats_over_capacity,
        } => {
            assert_eq!(updated.capacity, 1);
            assert_eq!(*seats_over_capacity, 1);
        }
        other => panic!("unexpected payload: {other:?}"),
    }
}

#[test]
fn test_removed_listener_stops_receiving() {
    let mut store = create_test_store();
    let recorded = Arc::new(Mutex::new(Vec::new()));
    let sink = recorded.clone();
    let id = store.add_listener(move |event: &ArrangementEvent| sink.lock().push(event.event_type));

    add_test_table(&mut store, "T1", 1);
    assert!(store.remove_listener(id));
    add_test_table(&mut store, "T2", 1);

    assert_eq!(*recorded.lock(), vec![ArrangementEventType::TableAdded]);
    assert!(!store.remove_listener(id));
}

#[test]
fn test_subscriber_receives_events() {
    let mut store = create_test_store();
    let mut rx = store.subscribe();

    let table = add_test_table(&mut store, "T1", 1);
    store.set_tier(PlanTier::Premium);

    let first = rx.try_recv().unwrap();
    match first.payload {
        EventPayload::TableAdded { table: added, seats } => {
            assert_eq!(added.id, table.id);
            assert_eq!(seats.len(), 1);
        }
        other => panic!("unexpected payload: {other:?}"),
    }
    let second = rx.try_recv().unwrap();
    assert!(matches!(
        second.payload,
        EventPayload::TableLimitChanged { limit: 50 }
    ));
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_menu_and_room_events() {
    let mut store = create_test_store();
    let recorded = record_events(&mut store);

    let option = store
        .add_menu_option(MenuOptionCreate {
            name: "Lobster".to_string(),
            ..Default::default()
        })
        .unwrap();
    store.remove_menu_option(&option.id).unwrap();
    let room = store
        .add_room(RoomCreate {
            name: "Tent".to_string(),
            ..Default::default()
        })
        .unwrap();
    store.set_current_room(&room.id).unwrap();

    assert_eq!(
        event_types(&recorded),
        vec![
            ArrangementEventType::MenuOptionAdded,
            ArrangementEventType::MenuOptionRemoved,
            ArrangementEventType::RoomAdded,
            ArrangementEventType::CurrentRoomChanged,
        ]
    );
}
