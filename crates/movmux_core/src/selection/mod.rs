//! Track selection.
//!
//! A run builds one [`SelectionState`] from manual identifiers
//! ([`admit_identifier`]) and language directives ([`admit_language`]),
//! then calls [`SelectionState::finalize`] to get the
//! [`FinalSelection`] that the mux backends format.

mod error;
mod identifier;
mod language;
mod state;

pub use error::{SelectionError, SelectionResult};
pub use identifier::{admit_identifier, TrackIdentifier};
pub use language::{admit_language, languages_disabled, LanguageDirective, NO_LANGUAGES};
pub use state::{FinalSelection, SelectionState};
