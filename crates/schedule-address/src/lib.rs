//! # schedule-address
//!
//! Coordination for the installation-address finder. The lookups themselves
//! (postcode service, place search) sit behind [`AddressProvider`]; this
//! crate decides *which* lookup to run, *when* to run it, and whether its
//! answer is still wanted when it arrives.
//!
//! Every keystroke starts a new generation. A lookup carries the generation
//! it was issued for, and a response for any older generation is dropped.

pub mod coordinator;
pub mod errors;
pub mod query;

pub use coordinator::{LookupCoordinator, LookupRequest, LookupState};
pub use errors::LookupError;
pub use query::{classify, normalise_postcode, LookupKind};

use serde::{Deserialize, Serialize};

/// One candidate address shown under the search box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressSuggestion {
    /// Single-line text for the list.
    pub label: String,
    pub line1: String,
    #[serde(default)]
    pub town: Option<String>,
    #[serde(default)]
    pub postcode: Option<String>,
    /// Opaque id for a follow-up detail lookup (place search only).
    #[serde(default)]
    pub place_id: Option<String>,
}

/// External address lookup service.
pub trait AddressProvider {
    fn lookup(&self, kind: &LookupKind) -> Result<Vec<AddressSuggestion>, LookupError>;
}
