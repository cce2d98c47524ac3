//! Applicability: whether a test type applies to a circuit.
//!
//! Pure function of the test type and the circuit description. Completion
//! state never enters into it.

use crate::types::{Applicability, Circuit, TestTypeDefinition};

/// True if `test_type` should be recorded for `circuit`.
pub fn applies(test_type: &TestTypeDefinition, circuit: &Circuit) -> bool {
    applies_to_description(&test_type.applicability, &circuit.description)
}

/// Rule check against a bare description. An empty description matches no
/// keyword rule.
pub fn applies_to_description(rule: &Applicability, description: &str) -> bool {
    match rule {
        Applicability::AllCircuits => true,
        Applicability::CircuitKeywordMatch { keywords } => {
            let description = description.to_lowercase();
            keywords
                .iter()
                .any(|keyword| description.contains(keyword.as_str()))
        }
    }
}

/// Test types from `test_types` that apply to `circuit`, in catalogue order.
pub fn applicable_test_types<'a>(
    test_types: &'a [TestTypeDefinition],
    circuit: &'a Circuit,
) -> impl Iterator<Item = &'a TestTypeDefinition> + 'a {
    test_types.iter().filter(move |t| applies(t, circuit))
}

/// Circuits from `circuits` that `test_type` applies to, in schedule order.
pub fn applicable_circuits<'a>(
    test_type: &'a TestTypeDefinition,
    circuits: &'a [Circuit],
) -> impl Iterator<Item = &'a Circuit> + 'a {
    circuits.iter().filter(move |c| applies(test_type, c))
}
