//! Property: only the lookup for the latest input can change what is shown.

use std::time::{Duration, Instant};

use proptest::prelude::*;

use schedule_address::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn only_latest_generation_is_accepted(
        inputs in prop::collection::vec("[a-z ]{3,12}", 1..8),
        gaps in prop::collection::vec(0u64..600, 8),
    ) {
        let t0 = Instant::now();
        let mut finder = LookupCoordinator::default();
        let mut issued = Vec::new();
        let mut now = t0;

        for (i, text) in inputs.iter().enumerate() {
            finder.on_input(text, now);
            now += Duration::from_millis(gaps[i]);
            if let Some(request) = finder.poll(now) {
                issued.push(request);
            }
        }
        now += Duration::from_millis(1_000);
        if let Some(request) = finder.poll(now) {
            issued.push(request);
        }

        let latest = finder.generation();
        for request in &issued {
            let accepted = finder.complete(request.generation, Ok(Vec::new()));
            prop_assert_eq!(accepted, request.generation == latest);
        }
    }
}
