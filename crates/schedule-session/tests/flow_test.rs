//! Reading entry flow: save, validation, auto-advance, navigation.

use schedule_core::config::SessionConfig;
use schedule_core::traits::test_helpers::InMemoryFormData;
use schedule_core::*;
use schedule_session::{Direction, ScheduleSession};

fn circuits() -> Vec<Circuit> {
    vec![
        Circuit::new("a", 1, "Ring final - sockets"),
        Circuit::new("b", 2, "Lighting"),
        Circuit::new("c", 3, "Cooker"),
    ]
}

fn session(store: &mut InMemoryFormData, config: SessionConfig) -> ScheduleSession<&mut InMemoryFormData> {
    ScheduleSession::open(store, TestCatalogue::standard(), config)
}

fn cid(id: &str) -> CircuitId {
    CircuitId::new(id)
}

fn tid(id: &str) -> TestTypeId {
    TestTypeId::new(id)
}

#[test]
fn blank_values_are_rejected_without_side_effects() {
    let mut store = InMemoryFormData::new(circuits());
    let mut session = session(&mut store, SessionConfig::default());
    {
        let mut flow = session.select_test_type("zs").unwrap();
        assert_eq!(flow.save(""), Err(ValidationError::EmptyValue));
        assert_eq!(flow.save("   "), Err(ValidationError::EmptyValue));
        assert_eq!(flow.apply_to_all("\t"), Err(ValidationError::EmptyValue));
        assert_eq!(flow.circuit_index(), 0);
    }
    assert!(session.tracker().is_empty());
    let store = session.into_store();
    assert_eq!(store.writes, 0);
    assert!(store.readings.is_empty());
}

#[test]
fn save_keeps_raw_value_and_marks_completion() {
    let mut store = InMemoryFormData::new(circuits());
    let mut session = session(&mut store, SessionConfig::default());
    let outcome = session.select_test_type("zs").unwrap().save(" 0.35 ").unwrap();

    assert_eq!(outcome.circuit, cid("a"));
    assert!(outcome.advanced);
    assert_eq!(outcome.circuit_index, 1);
    assert!(session.is_complete(&tid("zs"), &cid("a")));
    assert_eq!(session.store().readings.get(&cid("a"), &tid("zs")), Some(" 0.35 "));
}

#[test]
fn auto_advance_stops_at_last_circuit() {
    let mut store = InMemoryFormData::new(circuits());
    let mut session = session(&mut store, SessionConfig::default());
    let mut flow = session.select_test_type("zs").unwrap();

    assert!(flow.go_to(2));
    let outcome = flow.save("0.8").unwrap();
    assert_eq!(flow.circuit_index(), 2);
    assert!(!outcome.advanced);
    assert_eq!(flow.current_value(), "", "last circuit clears the field");
}

#[test]
fn without_auto_advance_the_index_stays_and_value_is_kept() {
    let mut store = InMemoryFormData::new(circuits());
    let config = SessionConfig {
        auto_advance: false,
        ..SessionConfig::default()
    };
    let mut session = session(&mut store, config);
    let mut flow = session.select_test_type("zs").unwrap();

    let outcome = flow.save("0.44").unwrap();
    assert!(!outcome.advanced);
    assert_eq!(flow.circuit_index(), 0);
    assert_eq!(flow.current_value(), "0.44");
}

#[test]
fn advancing_loads_the_next_circuits_saved_value() {
    let mut readings = ReadingStore::new();
    readings.set(cid("b"), tid("zs"), "1.10");
    let mut store = InMemoryFormData::new(circuits()).with_readings(readings);
    let mut session = session(&mut store, SessionConfig::default());
    let mut flow = session.select_test_type("zs").unwrap();

    flow.save("0.35").unwrap();
    assert_eq!(flow.circuit_index(), 1);
    assert_eq!(flow.current_value(), "1.10");
}

#[test]
fn navigation_is_clamped_and_reloads_values() {
    let mut readings = ReadingStore::new();
    readings.set(cid("a"), tid("insulation"), ">200");
    let mut store = InMemoryFormData::new(circuits()).with_readings(readings);
    let mut session = session(&mut store, SessionConfig::default());
    let mut flow = session.select_test_type("insulation").unwrap();

    assert_eq!(flow.current_value(), ">200", "selection loads the first circuit");
    assert!(!flow.navigate(Direction::Prev));
    assert_eq!(flow.circuit_index(), 0);

    flow.set_current_value("typing...");
    assert!(flow.navigate(Direction::Next));
    assert_eq!(flow.current_value(), "");
    assert!(flow.navigate(Direction::Next));
    assert!(!flow.navigate(Direction::Next));
    assert_eq!(flow.circuit_index(), 2);

    assert!(flow.go_to(0));
    assert_eq!(flow.current_value(), ">200");
    assert!(!flow.go_to(3));
}

#[test]
fn save_current_uses_typed_value() {
    let mut store = InMemoryFormData::new(circuits());
    let mut session = session(&mut store, SessionConfig::default());
    let mut flow = session.select_test_type("pfc").unwrap();
    flow.set_current_value("1.6");
    flow.save_current().unwrap();
    drop(flow);
    assert_eq!(session.store().readings.get(&cid("a"), &tid("pfc")), Some("1.6"));
}

#[test]
fn unknown_test_type_is_an_error() {
    let mut store = InMemoryFormData::new(circuits());
    let mut session = session(&mut store, SessionConfig::default());
    assert!(matches!(
        session.select_test_type("megger"),
        Err(ScheduleError::UnknownTestType { .. })
    ));
}

#[test]
fn empty_session_reports_no_circuit() {
    let mut store = InMemoryFormData::new(Vec::new());
    let mut session = session(&mut store, SessionConfig::default());
    {
        let mut flow = session.select_test_type("zs").unwrap();
        assert!(flow.current_circuit().is_none());
        assert_eq!(flow.current_value(), "");
        assert_eq!(flow.save("0.3"), Err(ValidationError::NoCircuit));
        assert_eq!(flow.apply_to_all("0.3"), Err(ValidationError::NoCircuit));
        assert!(!flow.navigate(Direction::Next));
        assert_eq!(flow.progress(), Progress::ZERO);
    }
    assert_eq!(session.progress(), Progress::ZERO);
}

#[test]
fn next_outstanding_skips_done_and_inapplicable_circuits() {
    let circuits = vec![
        Circuit::new("a", 1, "Sockets"),
        Circuit::new("b", 2, "Lighting"),
        Circuit::new("c", 3, "Garden sockets"),
    ];
    let mut store = InMemoryFormData::new(circuits);
    let mut session = session(&mut store, SessionConfig::default());
    let mut flow = session.select_test_type("rcd").unwrap();

    assert_eq!(flow.next_outstanding(), Some(0));
    assert!(flow.current_applies());
    flow.save("18").unwrap();
    assert!(!flow.current_applies());
    assert_eq!(flow.next_outstanding(), Some(2));
}
