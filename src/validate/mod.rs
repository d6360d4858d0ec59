//! # Answer Validation
//!
//! Two validation regimes over generated instances:
//!
//! - **Single chord** (`answer`): the user names the chord in free text.
//!   Both sides are canonicalized, the expected answer is expanded into
//!   every acceptable spelling (quality synonyms, enharmonic roots,
//!   inversion label forms), and membership, directly or after one
//!   enharmonic sharp/flat swap, decides correctness.
//! - **Progression transcription** (`transcription`): the user places
//!   pitches on a piano roll. The placed pitches are compared against the
//!   progression's flattened pitch multiset, optionally pitch-class
//!   normalized for octave tolerance.
//!
//! ## Entry Points
//! - [`validate_chord_answer()`]
//! - [`validate_transcription()`]
//!
//! ## Related Modules
//! - `generate` - Produces the `expected_answer` text being matched
//! - `progression` - Produces the `all_pitches` multiset being matched

mod answer;
mod transcription;

#[cfg(test)]
mod tests;

pub use answer::{canonicalize, validate_chord_answer, ValidationSettings};
pub use transcription::{validate_transcription, TranscriptionOptions, ValidationResult};
