//! Shared data structures (no logic beyond accessors).

pub mod circuit;
pub mod identifiers;
pub mod readings;
pub mod test_type;

pub use circuit::{Circuit, CircuitNumber};
pub use identifiers::{CircuitId, TestTypeId};
pub use readings::ReadingStore;
pub use test_type::{Applicability, TestTypeDefinition};
