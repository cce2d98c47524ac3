//! Session open, progress views, apply-to-all scope, bulk fill.

use serde_json::json;

use schedule_core::boundary::{circuits_from_json, readings_from_json};
use schedule_core::config::{ApplyScope, ScheduleConfig, SessionConfig};
use schedule_core::traits::test_helpers::InMemoryFormData;
use schedule_core::*;
use schedule_session::{FillMode, ScheduleSession};

fn cid(id: &str) -> CircuitId {
    CircuitId::new(id)
}

fn tid(id: &str) -> TestTypeId {
    TestTypeId::new(id)
}

fn three() -> Vec<Circuit> {
    vec![
        Circuit::new("a", 1, "Sockets ring"),
        Circuit::new("b", 2, "Lighting"),
        Circuit::new("c", 3, "Immersion"),
    ]
}

#[test]
fn reopening_keeps_saved_progress() {
    let mut readings = ReadingStore::new();
    readings.set(cid("a"), tid("zs"), "0.35");
    readings.set(cid("b"), tid("zs"), " ");
    let store = InMemoryFormData::new(three()).with_readings(readings);

    let session = ScheduleSession::open(store, TestCatalogue::standard(), SessionConfig::default());
    assert!(session.is_complete(&tid("zs"), &cid("a")));
    assert!(!session.is_complete(&tid("zs"), &cid("b")));
    assert_eq!(session.test_type_progress(&tid("zs")).unwrap().completed, 1);
}

#[test]
fn completion_can_start_empty_like_the_legacy_screen() {
    let mut readings = ReadingStore::new();
    readings.set(cid("a"), tid("zs"), "0.35");
    let store = InMemoryFormData::new(three()).with_readings(readings);
    let config = SessionConfig {
        derive_completion_from_store: false,
        ..SessionConfig::default()
    };

    let session = ScheduleSession::open(store, TestCatalogue::standard(), config);
    assert!(session.tracker().is_empty());
    assert_eq!(session.progress().completed, 0);
}

#[test]
fn apply_to_all_writes_every_circuit() {
    let mut store = InMemoryFormData::new(three());
    let mut session = ScheduleSession::open(&mut store, TestCatalogue::standard(), SessionConfig::default());
    {
        let mut flow = session.select_test_type("rcd").unwrap();
        flow.go_to(1);
        assert_eq!(flow.apply_to_all("100").unwrap(), 3);
        assert_eq!(flow.circuit_index(), 1, "apply to all does not move");
        assert_eq!(flow.current_value(), "100");
    }
    for id in ["a", "b", "c"] {
        assert!(session.is_complete(&tid("rcd"), &cid(id)));
        assert_eq!(session.store().readings.get(&cid(id), &tid("rcd")), Some("100"));
    }
    assert_eq!(session.store().writes, 1, "one wholesale write-back");

    // Only circuit "a" is an RCD circuit; the others do not inflate progress.
    let rcd = session.test_type_progress(&tid("rcd")).unwrap();
    assert_eq!((rcd.completed, rcd.total), (1, 1));
}

#[test]
fn apply_to_all_can_be_limited_to_applicable_circuits() {
    let store = InMemoryFormData::new(three());
    let config = SessionConfig {
        apply_to_all_scope: ApplyScope::ApplicableOnly,
        ..SessionConfig::default()
    };
    let mut session = ScheduleSession::open(store, TestCatalogue::standard(), config);
    let written = session.select_test_type("rcd").unwrap().apply_to_all("25").unwrap();

    assert_eq!(written, 1);
    assert!(session.is_complete(&tid("rcd"), &cid("a")));
    assert!(!session.is_complete(&tid("rcd"), &cid("b")));
    assert_eq!(session.store().readings.get(&cid("b"), &tid("rcd")), None);
}

#[test]
fn fill_empty_only_preserves_existing_readings() {
    let mut readings = ReadingStore::new();
    readings.set(cid("b"), tid("insulation"), ">299");
    let store = InMemoryFormData::new(three()).with_readings(readings);
    let mut session = ScheduleSession::open(store, TestCatalogue::standard(), SessionConfig::default());

    let written = session
        .select_test_type("insulation")
        .unwrap()
        .fill(">200", FillMode::EmptyOnly)
        .unwrap();
    assert_eq!(written, 2);

    let readings = &session.store().readings;
    assert_eq!(readings.get(&cid("a"), &tid("insulation")), Some(">200"));
    assert_eq!(readings.get(&cid("b"), &tid("insulation")), Some(">299"));
    assert_eq!(readings.get(&cid("c"), &tid("insulation")), Some(">200"));
    assert!(session.test_type_progress(&tid("insulation")).unwrap().is_complete());
}

#[test]
fn fill_with_nothing_to_do_does_not_write_back() {
    let mut readings = ReadingStore::new();
    for id in ["a", "b", "c"] {
        readings.set(cid(id), tid("polarity"), "✓");
    }
    let store = InMemoryFormData::new(three()).with_readings(readings);
    let mut session = ScheduleSession::open(store, TestCatalogue::standard(), SessionConfig::default());

    let written = session
        .select_test_type("polarity")
        .unwrap()
        .fill("✓", FillMode::EmptyOnly)
        .unwrap();
    assert_eq!(written, 0);
    assert_eq!(session.store().writes, 0);
}

#[test]
fn fill_all_overwrites() {
    let mut readings = ReadingStore::new();
    readings.set(cid("b"), tid("pfc"), "0.9");
    let store = InMemoryFormData::new(three()).with_readings(readings);
    let mut session = ScheduleSession::open(store, TestCatalogue::standard(), SessionConfig::default());

    let written = session.select_test_type("pfc").unwrap().fill("1.2", FillMode::All).unwrap();
    assert_eq!(written, 3);
    assert_eq!(session.store().readings.get(&cid("b"), &tid("pfc")), Some("1.2"));
}

#[test]
fn end_to_end_from_form_json() {
    let circuits = circuits_from_json(&json!([
        { "id": "A", "circuitNumber": 1, "circuitDescription": "Sockets ring" },
        { "id": "B", "circuitNumber": 2, "circuitDescription": "Lighting" }
    ]))
    .unwrap();
    let readings = readings_from_json(&json!({ "A": { "continuity": "0.51" } })).unwrap();
    let config = ScheduleConfig::from_toml(
        r#"
        [[test_types]]
        id = "continuity"
        name = "Continuity"
        applicability = { kind = "all_circuits" }

        [[test_types]]
        id = "rcd"
        name = "RCD"
        unit = "ms"
        applicability = { kind = "circuit_keyword_match", keywords = ["socket"] }
        "#,
    )
    .unwrap();

    let store = InMemoryFormData::new(circuits).with_readings(readings);
    let mut session = ScheduleSession::from_config(store, &config).unwrap();
    assert_eq!(session.progress(), Progress { completed: 1, total: 3, percent: 33 });

    session.select_test_type("rcd").unwrap().save("21").unwrap();
    {
        let mut flow = session.select_test_type("continuity").unwrap();
        flow.go_to(1);
        flow.save("1.02").unwrap();
    }

    assert_eq!(session.progress(), Progress { completed: 3, total: 3, percent: 100 });
    assert_eq!(session.circuit_progress(&cid("B")).unwrap().total, 1);
    assert!(session.circuit_progress(&cid("Z")).is_none());
    let report = session.report();
    assert_eq!(report.overall.percent, 100);
}
