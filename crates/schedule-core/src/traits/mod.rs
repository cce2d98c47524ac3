//! Collaborator interfaces. The schedule owns none of these resources; the
//! surrounding application injects implementations.

pub mod form_data;
pub mod notifier;
pub mod speaker;
pub mod test_helpers;

pub use form_data::FormDataStore;
pub use notifier::{NotificationKind, Notifier};
pub use speaker::{SpeechOptions, SpeechPriority, Speaker};
