use super::*;

// ========================================================================
// add_table
// ========================================================================

#[test]
fn test_add_table_creates_capacity_seats() {
    let mut store = create_test_store();
    let table = add_test_table(&mut store, "Head Table", 8);

    let seats = store.seats_for_table(&table.id);
    assert_eq!(seats.len(), 8);
    assert_dense_positions(&store, &table.id);
    assert!(seats.iter().all(|s| !s.is_occupied()));
    assert!(seats.iter().all(|s| s.menu_option_id.is_none()));
}

#[test]
fn test_add_table_applies_shape_defaults() {
    let mut store = create_test_store();
    let table = store
        .add_table(DiningTableCreate {
            name: "Family".to_string(),
            shape: TableShape::Rectangle,
            ..Default::default()
        })
        .unwrap();

    assert_eq!(table.capacity, 8);
    assert_eq!(table.width, 200.0);
    assert_eq!(table.height, 100.0);
    assert_eq!((table.x, table.y), (100.0, 100.0));
    assert_eq!(table.rotation, 0.0);
    assert!(table.id.starts_with("table_"));
}

#[test]
fn test_add_table_zero_capacity_has_no_seats() {
    let mut store = create_test_store();
    let table = add_test_table(&mut store, "Cake", 0);
    assert!(store.seats_for_table(&table.id).is_empty());
}

#[test]
fn test_add_table_rejects_blank_name() {
    let mut store = create_test_store();
    let err = store
        .add_table(DiningTableCreate {
            name: "  ".to_string(),
            ..Default::default()
        })
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ValidationFailed);
    assert!(store.tables().is_empty());
    assert!(store.seats().is_empty());
}

#[test]
fn test_add_table_rejects_negative_size() {
    let mut store = create_test_store();
    let err = store
        .add_table(DiningTableCreate {
            name: "Odd".to_string(),
            width: Some(-10.0),
            ..Default::default()
        })
        .unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
}

#[test]
fn test_table_limit_blocks_next_add() {
    let mut store = create_store_with_limit(2);
    add_test_table(&mut store, "T1", 4);
    add_test_table(&mut store, "T2", 4);
    assert!(store.is_table_limit_reached());

    let seats_before = store.seats().len();
    let err = store
        .add_table(DiningTableCreate {
            name: "T3".to_string(),
            ..Default::default()
        })
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::CapacityExceeded);
    assert!(matches!(err, StoreError::TableLimitReached { limit: 2 }));
    assert_eq!(store.tables().len(), 2);
    assert_eq!(store.seats().len(), seats_before);
}

#[test]
fn test_lowering_limit_keeps_existing_tables() {
    let mut store = create_test_store();
    add_test_table(&mut store, "T1", 2);
    add_test_table(&mut store, "T2", 2);
    add_test_table(&mut store, "T3", 2);

    store.set_table_limit(1);
    assert_eq!(store.tables().len(), 3);
    assert!(store.is_table_limit_reached());

    store.set_table_limit(10);
    assert!(!store.is_table_limit_reached());
    add_test_table(&mut store, "T4", 2);
}

#[test]
fn test_set_tier_switches_limit() {
    let mut store = create_test_store();
    store.set_tier(PlanTier::Free);
    assert_eq!(store.table_limit(), 5);
    store.set_tier(PlanTier::Unlimited);
    assert_eq!(store.table_limit(), u32::MAX);
}

// ========================================================================
// update_table: capacity reconciliation
// ========================================================================

#[test]
fn test_grow_appends_vacant_seats() {
    let mut store = create_test_store();
    let table = add_test_table(&mut store, "T1", 4);
    store
        .assign_guest_to_seat(&seat_at(&store, &table.id, 1).id, "g1")
        .unwrap();

    let result = set_capacity(&mut store, &table.id, 6);
    assert_eq!(result.seats_over_capacity, 0);
    assert_eq!(result.table.capacity, 6);

    let seats = store.seats_for_table(&table.id);
    assert_eq!(seats.len(), 6);
    assert_dense_positions(&store, &table.id);
    assert_eq!(seats[1].guest_id.as_deref(), Some("g1"));
    assert!(!seats[4].is_occupied());
    assert!(!seats[5].is_occupied());
}

#[test]
fn test_shrink_removes_vacant_seats_from_the_end() {
    let mut store = create_test_store();
    let table = add_test_table(&mut store, "T1", 8);
    let keep: Vec<String> = store
        .seats_for_table(&table.id)
        .iter()
        .take(3)
        .map(|s| s.id.clone())
        .collect();

    let result = set_capacity(&mut store, &table.id, 3);
    assert_eq!(result.seats_over_capacity, 0);

    let ids: Vec<String> = store
        .seats_for_table(&table.id)
        .into_iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(ids, keep);
}

#[test]
fn test_shrink_blocked_by_occupied_seat() {
    let mut store = create_test_store();
    let table = add_test_table(&mut store, "T1", 8);
    let occupied = seat_at(&store, &table.id, 5);
    store.assign_guest_to_seat(&occupied.id, "guest-5").unwrap();

    let result = set_capacity(&mut store, &table.id, 4);

    let seats = store.seats_for_table(&table.id);
    assert_eq!(seats.len(), 5);
    assert_dense_positions(&store, &table.id);
    assert_eq!(seats[4].id, occupied.id);
    assert_eq!(seats[4].guest_id.as_deref(), Some("guest-5"));
    assert_eq!(result.seats_over_capacity, 1);
    assert_eq!(result.table.capacity, 4);
    assert_eq!(store.seats_over_capacity(&table.id), Some(1));
}

#[test]
fn test_blocked_shrink_retried_with_same_capacity() {
    let mut store = create_test_store();
    let table = add_test_table(&mut store, "T1", 6);
    let occupied = seat_at(&store, &table.id, 5);
    store.assign_guest_to_seat(&occupied.id, "g1").unwrap();

    assert_eq!(set_capacity(&mut store, &table.id, 2).seats_over_capacity, 1);

    store.remove_guest_from_seat(&occupied.id).unwrap();
    let result = set_capacity(&mut store, &table.id, 2);
    assert_eq!(result.seats_over_capacity, 0);
    assert_eq!(store.seats_for_table(&table.id).len(), 2);
}

#[test]
fn test_grow_after_blocked_shrink_keeps_positions_dense() {
    let mut store = create_test_store();
    let table = add_test_table(&mut store, "T1", 4);
    store
        .assign_guest_to_seat(&seat_at(&store, &table.id, 3).id, "g1")
        .unwrap();

    set_capacity(&mut store, &table.id, 1);
    assert_eq!(store.seats_for_table(&table.id).len(), 2);

    let result = set_capacity(&mut store, &table.id, 5);
    assert_eq!(result.seats_over_capacity, 0);
    assert_eq!(store.seats_for_table(&table.id).len(), 5);
    assert_dense_positions(&store, &table.id);
}

#[test]
fn test_update_without_capacity_keeps_seats() {
    let mut store = create_test_store();
    let table = add_test_table(&mut store, "T1", 4);
    let before = store.seats_for_table(&table.id);

    let result = store
        .update_table(
            &table.id,
            DiningTableUpdate {
                name: Some("Sweetheart".to_string()),
                x: Some(320.0),
                rotation: Some(45.0),
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(result.table.name, "Sweetheart");
    assert_eq!(result.table.x, 320.0);
    assert_eq!(result.table.id, table.id);
    assert_eq!(store.seats_for_table(&table.id), before);
}

#[test]
fn test_update_rejects_blank_name_without_changes() {
    let mut store = create_test_store();
    let table = add_test_table(&mut store, "T1", 4);

    let err = store
        .update_table(
            &table.id,
            DiningTableUpdate {
                name: Some(String::new()),
                capacity: Some(2),
                ..Default::default()
            },
        )
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ValidationFailed);
    assert_eq!(store.table(&table.id).unwrap(), table);
    assert_eq!(store.seats_for_table(&table.id).len(), 4);
}

#[test]
fn test_update_unknown_table() {
    let mut store = create_test_store();
    let err = store
        .update_table("table_missing", DiningTableUpdate::default())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_capacity_above_maximum_rejected() {
    let mut store = create_test_store();
    let table = add_test_table(&mut store, "T1", 4);
    let err = store
        .update_table(
            &table.id,
            DiningTableUpdate {
                capacity: Some(MAX_TABLE_CAPACITY + 1),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
}

// ========================================================================
// remove_table / clear_table_guests
// ========================================================================

#[test]
fn test_remove_empty_table_cascades_seats() {
    let mut store = create_test_store();
    let keep = add_test_table(&mut store, "Keep", 2);
    let table = add_test_table(&mut store, "Gone", 6);

    let removed = store.remove_table(&table.id).unwrap();
    assert_eq!(removed.id, table.id);
    assert!(store.table(&table.id).is_none());
    assert!(store.seats().iter().all(|s| s.table_id == keep.id));
    assert_eq!(store.seats().len(), 2);
}

#[test]
fn test_remove_table_with_guests_rejected() {
    let mut store = create_test_store();
    let table = add_test_table(&mut store, "T1", 4);
    store
        .assign_guest_to_seat(&seat_at(&store, &table.id, 0).id, "g1")
        .unwrap();
    store
        .assign_guest_to_seat(&seat_at(&store, &table.id, 2).id, "g2")
        .unwrap();

    let err = store.remove_table(&table.id).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ReferentialConflict);
    assert!(matches!(err, StoreError::GuestsAssigned { count: 2, .. }));
    assert!(store.table(&table.id).is_some());
    assert_eq!(store.seats_for_table(&table.id).len(), 4);
}

#[test]
fn test_clear_guests_then_remove() {
    let mut store = create_test_store();
    let table = add_test_table(&mut store, "T1", 4);
    store
        .assign_guest_to_seat(&seat_at(&store, &table.id, 3).id, "g3")
        .unwrap();
    store
        .assign_guest_to_seat(&seat_at(&store, &table.id, 1).id, "g1")
        .unwrap();

    let cleared = store.clear_table_guests(&table.id).unwrap();
    assert_eq!(cleared, vec!["g1".to_string(), "g3".to_string()]);
    assert!(store.assigned_guest_ids().is_empty());
    store.remove_table(&table.id).unwrap();
}

#[test]
fn test_remove_unknown_table() {
    let mut store = create_test_store();
    let err = store.remove_table("table_missing").unwrap_err();
    assert!(matches!(
        err,
        StoreError::NotFound {
            entity: EntityKind::Table,
            ..
        }
    ));
}
