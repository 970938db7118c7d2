//! Behavioural tests for `PatientStore`.
//!
//! These tests verify that:
//! - Ids are issued from 1 with no gaps or repeats
//! - Listing preserves insertion order
//! - Lookups and updates agree with the ids returned by `add`
//! - A full store refuses further adds without side effects

use hms_core::{
    DEFAULT_CAPACITY, Listing, PatientFields, PatientId, PatientRepo, PatientStore, StoreError,
};

fn numbered(n: usize) -> PatientFields {
    PatientFields::new(
        format!("patient{n}"),
        i32::try_from(n).unwrap(),
        if n % 2 == 0 { 'F' } else { 'M' },
        format!("{n} Main Street"),
        "Flu",
    )
}

#[test]
fn test_ids_strictly_increasing_from_one() {
    let mut store = PatientStore::new();

    let ids: Vec<u32> = (0..20)
        .map(|n| store.add(numbered(n)).unwrap().id().get())
        .collect();

    let expected: Vec<u32> = (1..=20).collect();
    assert_eq!(ids, expected);
}

#[test]
fn test_list_returns_records_in_insertion_order() {
    let mut store = PatientStore::new();
    for n in 0..10 {
        store.add(numbered(n)).unwrap();
    }

    let Listing::Records(records) = store.list() else {
        panic!("Expected records after adds");
    };

    assert_eq!(records.len(), 10);
    for (n, record) in records.iter().enumerate() {
        assert_eq!(record.fields(), &numbered(n));
    }
}

#[test]
fn test_empty_store_lists_empty() {
    let store = PatientStore::new();
    assert_eq!(store.list(), Listing::Empty);
    assert!(store.list().records().is_empty());
}

#[test]
fn test_find_returns_record_for_every_issued_id() {
    let mut store = PatientStore::new();
    let issued: Vec<(PatientId, PatientFields)> = (0..15)
        .map(|n| {
            let fields = numbered(n);
            let id = store.add(fields.clone()).unwrap().id();
            (id, fields)
        })
        .collect();

    for (id, fields) in issued {
        let found = store.find_by_id(id).unwrap();
        assert_eq!(found.id(), id);
        assert_eq!(found.fields(), &fields);
    }
}

#[test]
fn test_unissued_id_is_not_found() {
    let mut store = PatientStore::new();
    store.add(numbered(0)).unwrap();

    assert_eq!(
        store.find_by_id(PatientId(0)),
        Err(StoreError::NotFound(PatientId(0)))
    );
    assert_eq!(
        store.find_by_id(PatientId(2)),
        Err(StoreError::NotFound(PatientId(2)))
    );
    assert_eq!(
        store
            .update(PatientId(2), numbered(1))
            .map(|p| p.id()),
        Err(StoreError::NotFound(PatientId(2)))
    );
}

#[test]
fn test_update_then_find_keeps_id_and_replaces_fields() {
    let mut store = PatientStore::new();
    for n in 0..3 {
        store.add(numbered(n)).unwrap();
    }

    let replacement = PatientFields::new("Renamed Person", 77, 'X', "1 New Road", "Measles");
    let updated = store.update(PatientId(2), replacement.clone()).unwrap();
    assert_eq!(updated.id(), PatientId(2));

    let found = store.find_by_id(PatientId(2)).unwrap();
    assert_eq!(found.id(), PatientId(2));
    assert_eq!(found.fields(), &replacement);

    // neighbours untouched
    assert_eq!(store.find_by_id(PatientId(1)).unwrap().fields(), &numbered(0));
    assert_eq!(store.find_by_id(PatientId(3)).unwrap().fields(), &numbered(2));
}

#[test]
fn test_add_beyond_capacity_fails_without_side_effects() {
    let mut store = PatientStore::new();
    for n in 0..DEFAULT_CAPACITY {
        store.add(numbered(n)).unwrap();
    }
    assert!(store.is_full());

    let result = store.add(numbered(DEFAULT_CAPACITY)).map(|p| p.id());
    assert_eq!(
        result,
        Err(StoreError::CapacityExceeded {
            capacity: DEFAULT_CAPACITY
        })
    );
    assert_eq!(store.len(), DEFAULT_CAPACITY);
    assert_eq!(store.next_id(), PatientId(101));
    assert_eq!(store.list().records().last().unwrap().id(), PatientId(100));
}

#[test]
fn test_alice_and_bob_scenario() {
    let mut store = PatientStore::new();

    let alice = store
        .add(PatientFields::new("Alice", 30, 'F', "123Main", "Flu"))
        .unwrap()
        .id();
    let bob = store
        .add(PatientFields::new("Bob", 40, 'M', "456Oak", "Cold"))
        .unwrap()
        .id();
    assert_eq!(alice, PatientId(1));
    assert_eq!(bob, PatientId(2));

    let listed: Vec<(u32, &str, i32, char, &str, &str)> = store
        .list()
        .records()
        .iter()
        .map(|p| {
            (
                p.id().get(),
                p.name(),
                p.age(),
                p.gender(),
                p.address(),
                p.disease(),
            )
        })
        .collect();
    assert_eq!(
        listed,
        vec![
            (1, "Alice", 30, 'F', "123Main", "Flu"),
            (2, "Bob", 40, 'M', "456Oak", "Cold"),
        ]
    );

    assert_eq!(store.find_by_id(PatientId(1)).unwrap().name(), "Alice");

    let bobby = store
        .update(
            PatientId(2),
            PatientFields::new("Bobby", 41, 'M', "789Pine", "Flu"),
        )
        .unwrap();
    assert_eq!(bobby.id(), PatientId(2));
    assert_eq!(bobby.name(), "Bobby");
    assert_eq!(bobby.age(), 41);
    assert_eq!(bobby.address(), "789Pine");
    assert_eq!(bobby.disease(), "Flu");

    assert_eq!(
        store.find_by_id(PatientId(3)),
        Err(StoreError::NotFound(PatientId(3)))
    );
}
