//! Property tests: navigation never leaves the circuit list, and saves keep
//! the readings and completion set in step.

use proptest::prelude::*;

use schedule_core::config::SessionConfig;
use schedule_core::traits::test_helpers::InMemoryFormData;
use schedule_core::*;
use schedule_session::{Direction, ScheduleSession};

#[derive(Debug, Clone)]
enum Step {
    Nav(Direction),
    Save(String),
    ApplyAll(String),
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        Just(Step::Nav(Direction::Prev)),
        Just(Step::Nav(Direction::Next)),
        prop::sample::select(vec!["", "  ", "0.35", " 1.2 ", ">200"])
            .prop_map(|v| Step::Save(v.to_string())),
        prop::sample::select(vec!["", "100"]).prop_map(|v| Step::ApplyAll(v.to_string())),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn index_stays_in_bounds_and_store_matches_tracker(
        n in 1usize..6,
        auto_advance in any::<bool>(),
        steps in prop::collection::vec(step_strategy(), 0..30),
    ) {
        let circuits: Vec<Circuit> = (0..n)
            .map(|i| Circuit::new(format!("c{i}"), i as u32 + 1, "Sockets"))
            .collect();
        let config = SessionConfig { auto_advance, ..SessionConfig::default() };
        let mut session = ScheduleSession::open(
            InMemoryFormData::new(circuits),
            TestCatalogue::standard(),
            config,
        );

        {
            let mut flow = session.select_test_type("rcd").unwrap();
            for step in &steps {
                match step {
                    Step::Nav(d) => { flow.navigate(*d); }
                    Step::Save(v) => { let _ = flow.save(v); }
                    Step::ApplyAll(v) => { let _ = flow.apply_to_all(v); }
                }
                prop_assert!(flow.circuit_index() < n);
            }
        }

        let expected = CompletionTracker::from_readings(&session.store().readings);
        prop_assert_eq!(&expected, session.tracker());
    }
}
