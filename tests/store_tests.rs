//! Behavioural tests for the train store.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Duration;

use captrain::adapter::outbound::memory::MemorySnapshotStore;
use captrain::application::store::TrainStore;
use captrain::domain::error::ValidationError;
use captrain::domain::id::{CorridorId, TrainId};
use captrain::domain::train::{NewTrain, TrainPatch, TrainRecord, TrainStatus};
use captrain::error::Error;
use captrain::port::outbound::clock::Clock;
use captrain::port::outbound::snapshot::SnapshotStore;
use captrain::testkit::clock::ManualClock;
use captrain::testkit::domain::{new_train, payload, record};

struct Fixture {
    store: TrainStore,
    slot: MemorySnapshotStore,
    clock: Arc<ManualClock>,
}

fn fixture() -> Fixture {
    let slot = MemorySnapshotStore::new();
    let clock = Arc::new(ManualClock::default());
    let store = TrainStore::open(Box::new(slot.clone()), clock.clone());
    Fixture { store, slot, clock }
}

/// A store holding exactly `records`, restored from a snapshot.
fn fixture_with(records: &[TrainRecord]) -> Fixture {
    let slot = MemorySnapshotStore::with_raw(payload(records));
    let clock = Arc::new(ManualClock::default());
    let store = TrainStore::open(Box::new(slot.clone()), clock.clone());
    Fixture { store, slot, clock }
}

fn ids(trains: &[TrainRecord]) -> Vec<&str> {
    trains.iter().map(|t| t.id.as_str()).collect()
}

#[test]
fn add_rejects_departures_inside_the_window() {
    let mut f = fixture();

    for hours in [-5, 0, 1, 47, 48] {
        let result = f
            .store
            .add(new_train(&*f.clock, "BRV_MOSNOV", hours, TrainStatus::Available));
        assert!(
            matches!(
                result,
                Err(Error::Validation(ValidationError::DepartureTooSoon { .. }))
            ),
            "{hours}h should be rejected"
        );
    }
    assert_eq!(f.store.len(), 5);
    assert!(f.slot.raw().is_none());
}

#[test]
fn add_exactly_on_the_boundary_is_rejected() {
    let mut f = fixture();
    let departure = f.clock.now() + Duration::hours(48);
    let result = f
        .store
        .add(NewTrain::new("BRV_MOSNOV", departure, TrainStatus::Available));
    assert!(result.is_err());

    let departure = departure + Duration::seconds(1);
    let result = f
        .store
        .add(NewTrain::new("BRV_MOSNOV", departure, TrainStatus::Available));
    assert!(result.is_ok());
}

#[test]
fn add_assigns_unused_ids_and_persists() {
    let mut f = fixture();
    let mut seen: HashSet<TrainId> = f.store.list(None).into_iter().map(|t| t.id).collect();

    for hours in [49, 72, 96] {
        let added = f
            .store
            .add(new_train(&*f.clock, "HAM_MOSNOV", hours, TrainStatus::Inquiry))
            .unwrap();
        assert!(seen.insert(added.id.clone()), "id {} reused", added.id);
        assert_eq!(added.corridor.as_str(), "HAM_MOSNOV");
        assert_eq!(added.status, TrainStatus::Inquiry);
    }

    let persisted = f.slot.load().unwrap().unwrap();
    assert_eq!(persisted.len(), 8);
}

#[test]
fn reads_never_return_trains_inside_the_window() {
    let mut f = fixture_with(&[
        record(&ManualClock::default(), "soon", "BRV_MOSNOV", 50),
        record(&ManualClock::default(), "later", "BRV_MOSNOV", 120),
    ]);
    assert_eq!(ids(&f.store.list(None)), ["soon", "later"]);

    f.clock.advance(Duration::hours(2));
    let corridor = CorridorId::new("BRV_MOSNOV");
    assert_eq!(ids(&f.store.list(None)), ["later"]);
    assert_eq!(ids(&f.store.list_public(&corridor, 10)), ["later"]);

    // The sweep is written back.
    let persisted = f.slot.load().unwrap().unwrap();
    assert_eq!(ids(&persisted), ["later"]);
}

#[test]
fn list_filters_by_corridor_and_sorts_by_departure() {
    let clock = ManualClock::default();
    let mut f = fixture_with(&[
        record(&clock, "c", "BRV_MOSNOV", 200),
        record(&clock, "x", "HAM_MOSNOV", 60),
        record(&clock, "a", "BRV_MOSNOV", 70),
        record(&clock, "b", "BRV_MOSNOV", 100),
    ]);

    let trains = f.store.list(Some(&CorridorId::new("BRV_MOSNOV")));
    assert_eq!(ids(&trains), ["a", "b", "c"]);
    assert!(trains
        .windows(2)
        .all(|w| w[0].departure_timestamp <= w[1].departure_timestamp));

    assert_eq!(ids(&f.store.list(None)), ["x", "a", "b", "c"]);
    assert!(f.store.list(Some(&CorridorId::new("NOWHERE"))).is_empty());
}

#[test]
fn equal_departures_keep_insertion_order() {
    let clock = ManualClock::default();
    let mut f = fixture_with(&[
        record(&clock, "first", "BRV_MOSNOV", 80),
        record(&clock, "second", "BRV_MOSNOV", 80),
    ]);
    assert_eq!(ids(&f.store.list(None)), ["first", "second"]);
}

#[test]
fn public_list_is_a_prefix_of_the_full_list() {
    let clock = ManualClock::default();
    let records: Vec<TrainRecord> = (0..8)
        .map(|i| record(&clock, &format!("t{i}"), "HAM_OBRNICE", 50 + 10 * (8 - i)))
        .collect();
    let mut f = fixture_with(&records);
    let corridor = CorridorId::new("HAM_OBRNICE");

    let full = f.store.list(Some(&corridor));
    for limit in [0, 1, 3, 8, 20] {
        let public = f.store.list_public(&corridor, limit);
        assert_eq!(public.len(), limit.min(full.len()));
        assert_eq!(public.as_slice(), &full[..public.len()]);
    }
}

#[test]
fn status_update_skips_the_departure_check() {
    let clock = ManualClock::default();
    let mut f = fixture_with(&[record(&clock, "t", "BRV_OBRNICE", 72)]);

    let updated = f
        .store
        .update(&TrainId::new("t"), &TrainPatch::status(TrainStatus::Full))
        .unwrap();
    assert_eq!(updated.status, TrainStatus::Full);
    assert_eq!(updated.departure_timestamp, clock.now() + Duration::hours(72));

    let persisted = f.slot.load().unwrap().unwrap();
    assert_eq!(persisted[0].status, TrainStatus::Full);
}

#[test]
fn departure_update_inside_the_window_is_rejected_and_changes_nothing() {
    let clock = ManualClock::default();
    let original = record(&clock, "t", "BRV_OBRNICE", 72);
    let mut f = fixture_with(std::slice::from_ref(&original));
    let blob_before = f.slot.raw();

    let patch = TrainPatch {
        status: Some(TrainStatus::Full),
        departure_timestamp: Some(clock.now() + Duration::hours(30)),
        corridor: None,
    };
    let err = f.store.update(&TrainId::new("t"), &patch).unwrap_err();

    assert!(err.is_validation());
    assert_eq!(f.store.list(None), vec![original]);
    assert_eq!(f.slot.raw(), blob_before);
}

#[test]
fn departure_update_beyond_the_window_is_applied() {
    let clock = ManualClock::default();
    let mut f = fixture_with(&[record(&clock, "t", "BRV_OBRNICE", 72)]);
    let departure = clock.now() + Duration::hours(100);

    let updated = f
        .store
        .update(&TrainId::new("t"), &TrainPatch::departure(departure))
        .unwrap();
    assert_eq!(updated.departure_timestamp, departure);
    assert_eq!(updated.corridor.as_str(), "BRV_OBRNICE");
}

#[test]
fn update_of_unknown_id_is_not_found() {
    let mut f = fixture();
    let err = f
        .store
        .update(&TrainId::new("missing"), &TrainPatch::corridor("HAM_MOSNOV"))
        .unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn delete_removes_exactly_one_record() {
    let mut f = fixture();
    let before = f.store.list(None);

    assert!(!f.store.delete(&TrainId::new("missing")));
    assert_eq!(f.store.list(None), before);
    assert!(f.slot.raw().is_none());

    assert!(f.store.delete(&TrainId::new("3")));
    let after = f.store.list(None);
    assert_eq!(after.len(), before.len() - 1);
    assert!(after.iter().all(|t| t.id.as_str() != "3"));
    assert_eq!(f.slot.load().unwrap().unwrap().len(), 4);
}

#[test]
fn import_keeps_valid_elements_and_drops_malformed_ones() {
    let mut f = fixture();
    let payload = r#"[
        {"id":"a","corridor":"BRV_MOSNOV","departureTimestamp":"2026-11-02T08:30:00Z","status":"AVAILABLE"},
        {"id":"b","corridor":"HAM_MOSNOV","departureTimestamp":"2026-11-03T09:00:00Z","status":"FULL"},
        {"id":"c","corridor":"HAM_MOSNOV","status":"FULL"}
    ]"#;

    let imported = f.store.import_replace(payload).unwrap();
    assert_eq!(ids(&imported), ["a", "b"]);
    assert_eq!(ids(&f.store.list(None)), ["a", "b"]);
    assert_eq!(f.slot.load().unwrap().unwrap().len(), 2);
}

#[test]
fn import_accepts_legacy_field_and_status_names() {
    let mut f = fixture();
    let payload = r#"[
        {"id":"a","corridor":"BRV_MOSNOV","departureIso":"2026-11-02T08:30:00Z","status":"PLNO"}
    ]"#;

    let imported = f.store.import_replace(payload).unwrap();
    assert_eq!(imported[0].status, TrainStatus::Full);
}

#[test]
fn unusable_imports_leave_the_collection_untouched() {
    let mut f = fixture();
    let before = f.store.list(None);

    let cases = [
        ("[]", "empty"),
        (r#"[{"id":1},{"corridor":"X"},"train"]"#, "all malformed"),
        (r#"{"id":"a"}"#, "not an array"),
        ("not json", "not json"),
    ];
    for (payload, label) in cases {
        let err = f.store.import_replace(payload).unwrap_err();
        assert!(err.is_validation(), "{label}: {err}");
        assert_eq!(f.store.list(None), before, "{label}");
    }
    assert!(f.slot.raw().is_none());
}

#[test]
fn import_does_not_apply_the_booking_window() {
    let clock = ManualClock::default();
    let mut f = fixture();
    let near = record(&clock, "near", "BRV_MOSNOV", 1);

    let imported = f.store.import_replace(&payload(&[near])).unwrap();
    assert_eq!(imported.len(), 1);

    // The next read sweeps it.
    assert!(f.store.list(None).is_empty());
}

#[test]
fn export_then_import_reproduces_the_collection() {
    let mut f = fixture();
    f.store
        .add(new_train(&*f.clock, "HAM_MOSNOV", 90, TrainStatus::Full))
        .unwrap();
    let exported = f.store.export_all();
    let document = serde_json::to_string_pretty(&exported).unwrap();

    let mut other = fixture();
    other.store.reset_to_default();
    other.store.delete(&TrainId::new("1"));
    other.store.import_replace(&document).unwrap();

    let left: HashSet<TrainRecord> = exported.into_iter().collect();
    let right: HashSet<TrainRecord> = other.store.export_all().into_iter().collect();
    assert_eq!(left, right);
}

#[test]
fn reset_restores_the_seed_and_persists_it() {
    let mut f = fixture();
    let document = payload(&[record(&*f.clock, "only", "BRV_MOSNOV", 100)]);
    f.store.import_replace(&document).unwrap();

    let restored = f.store.reset_to_default();
    let mut restored_ids = ids(&restored);
    restored_ids.sort_unstable();
    assert_eq!(restored_ids, ["1", "2", "3", "4", "5"]);
    assert_eq!(f.slot.load().unwrap().unwrap(), restored);
}

#[test]
fn reopening_restores_the_last_snapshot() {
    let mut f = fixture();
    let added = f
        .store
        .add(new_train(&*f.clock, "BRV_OBRNICE", 60, TrainStatus::Available))
        .unwrap();

    let mut reopened = TrainStore::open(Box::new(f.slot.clone()), f.clock.clone());
    assert_eq!(reopened.len(), 6);
    assert!(reopened.list(None).contains(&added));
}

#[test]
fn unusable_snapshot_falls_back_to_seed() {
    let slot = MemorySnapshotStore::with_raw("{\"not\":\"an array\"}");
    let mut store = TrainStore::open(Box::new(slot.clone()), Arc::new(ManualClock::default()));

    assert_eq!(store.list(None).len(), 5);
    // Opening never overwrites what was there.
    assert_eq!(slot.raw().as_deref(), Some("{\"not\":\"an array\"}"));
}

#[test]
fn failed_writes_keep_the_in_memory_state() {
    let mut f = fixture();
    f.slot.fail_writes(true);

    let added = f
        .store
        .add(new_train(&*f.clock, "BRV_MOSNOV", 80, TrainStatus::Available))
        .unwrap();
    assert!(f.store.list(None).iter().any(|t| t.id == added.id));
    assert!(f.slot.raw().is_none());
}
