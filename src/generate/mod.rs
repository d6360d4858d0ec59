//! # Chord Generation
//!
//! Builds concrete [`ChordInstance`] values from generation parameters.
//!
//! ## Sub-modules
//! - `types` - The `ChordInstance` value type
//! - `engine` - Random pick, duplicate avoidance, expected-answer text
//! - `voicing` - Close/inversion voicing and the weighted open-voicing
//!   strategies
//! - `range` - Octave-range normalization into the allowed MIDI window
//!
//! ## Pipeline
//! 1. Pick root, quality, and inversion uniformly from the level's allowed
//!    sets (augmented qualities re-root instead of inverting).
//! 2. Retry up to 20 times if the pick repeats the previous chord, then
//!    accept the repeat.
//! 3. Voice the pick (close or open strategy) and normalize the register
//!    into `[24, 84]`.
//! 4. Build the canonical expected-answer text.
//!
//! ## Example
//! ```rust
//! use chordwise::chord_type;
//! use chordwise::generate::build_chord;
//!
//! // C major, root position, voiced from the octave of middle C
//! let instance = build_chord(0, chord_type("major").unwrap(), 0, 4, false);
//! assert_eq!(instance.pitches, [60, 64, 67]);
//! assert_eq!(instance.expected_answer, "C");
//! ```
//!
//! ## Related Modules
//! - `config` - Resolves a level file into [`GeneratorParams`]
//! - `progression` - Voices resolved Roman numerals through [`build_chord`]
//! - `validate` - Checks user answers against `expected_answer`

mod engine;
mod range;
mod types;
mod voicing;

#[cfg(test)]
mod tests;

pub use engine::{build_chord, build_open_chord, generate_chord, GeneratorParams};
pub use range::{normalize, MAX_PITCH, MIN_PITCH};
pub use types::ChordInstance;
