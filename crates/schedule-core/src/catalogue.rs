//! The test catalogue: every test type a schedule can record.
//!
//! The standard set follows the BS 7671 schedule of test results columns.
//! RCD testing is keyed on the same circuit descriptions that require
//! 30 mA additional protection: sockets, bathrooms, outdoor and garden
//! circuits, plus anything already described as RCD/RCBO protected.

use rustc_hash::FxHashMap;
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::errors::{ScheduleError, ScheduleResult};
use crate::types::{Applicability, TestTypeDefinition, TestTypeId};

/// Ordered, id-indexed list of test types. Immutable after construction.
#[derive(Debug, Clone)]
pub struct TestCatalogue {
    definitions: Vec<TestTypeDefinition>,
    index: FxHashMap<TestTypeId, usize>,
}

impl TestCatalogue {
    /// Build a catalogue, rejecting duplicate ids, blank ids, and keyword
    /// rules with no keywords. Keywords are normalised to lower case.
    pub fn new(definitions: Vec<TestTypeDefinition>) -> ScheduleResult<Self> {
        let mut index = FxHashMap::default();
        let mut normalised = Vec::with_capacity(definitions.len());

        for (position, mut definition) in definitions.into_iter().enumerate() {
            if definition.id.as_str().trim().is_empty() {
                return Err(ScheduleError::InvalidCatalogue(format!(
                    "test type at position {position} has an empty id"
                )));
            }
            definition.applicability = definition.applicability.normalised();
            if let Applicability::CircuitKeywordMatch { keywords } = &definition.applicability {
                if keywords.is_empty() {
                    return Err(ScheduleError::InvalidCatalogue(format!(
                        "test type '{}' has a keyword rule with no keywords",
                        definition.id
                    )));
                }
            }
            if index.insert(definition.id.clone(), position).is_some() {
                return Err(ScheduleError::DuplicateTestType {
                    id: definition.id.to_string(),
                });
            }
            normalised.push(definition);
        }

        debug!(count = normalised.len(), "Test catalogue built");
        Ok(Self {
            definitions: normalised,
            index,
        })
    }

    /// The standard schedule-of-tests catalogue.
    pub fn standard() -> Self {
        let definitions = standard_definitions();
        let index = definitions
            .iter()
            .enumerate()
            .map(|(i, d)| (d.id.clone(), i))
            .collect();
        Self { definitions, index }
    }

    pub fn get(&self, id: &TestTypeId) -> Option<&TestTypeDefinition> {
        self.index.get(id).map(|&i| &self.definitions[i])
    }

    /// Like [`get`](Self::get) but an unknown id is an error.
    pub fn require(&self, id: &TestTypeId) -> ScheduleResult<&TestTypeDefinition> {
        self.get(id).ok_or_else(|| ScheduleError::UnknownTestType {
            id: id.to_string(),
        })
    }

    pub fn contains(&self, id: &TestTypeId) -> bool {
        self.index.contains_key(id)
    }

    pub fn as_slice(&self) -> &[TestTypeDefinition] {
        &self.definitions
    }

    pub fn iter(&self) -> impl Iterator<Item = &TestTypeDefinition> {
        self.definitions.iter()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl Default for TestCatalogue {
    fn default() -> Self {
        Self::standard()
    }
}

impl Serialize for TestCatalogue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.definitions.serialize(serializer)
    }
}

fn standard_definitions() -> Vec<TestTypeDefinition> {
    vec![
        TestTypeDefinition::new("continuity", "Continuity (R1+R2)", "Ω", Applicability::AllCircuits)
            .with_description("Continuity of protective conductors")
            .with_icon("zap"),
        TestTypeDefinition::new(
            "ring_continuity",
            "Ring final continuity",
            "Ω",
            Applicability::keywords(["ring"]),
        )
        .with_description("End-to-end r1, rn and r2 of ring final circuits")
        .with_icon("circle"),
        TestTypeDefinition::new(
            "insulation",
            "Insulation resistance",
            "MΩ",
            Applicability::AllCircuits,
        )
        .with_description("Live-live and live-earth insulation resistance")
        .with_icon("shield"),
        TestTypeDefinition::new("polarity", "Polarity", "", Applicability::AllCircuits)
            .with_description("Correct connection of line and neutral")
            .with_icon("check"),
        TestTypeDefinition::new("zs", "Earth fault loop impedance (Zs)", "Ω", Applicability::AllCircuits)
            .with_description("Measured Zs at the furthest point of the circuit")
            .with_icon("activity"),
        TestTypeDefinition::new(
            "rcd",
            "RCD trip time",
            "ms",
            Applicability::keywords(["socket", "bathroom", "outdoor", "garden", "rcd", "rcbo"]),
        )
        .with_description("Trip time at rated residual current (IΔn)")
        .with_icon("timer"),
        TestTypeDefinition::new("pfc", "Prospective fault current", "kA", Applicability::AllCircuits)
            .with_description("Maximum prospective fault current at the origin of the circuit")
            .with_icon("gauge"),
    ]
}
