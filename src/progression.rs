//! # Progression Generator
//!
//! Composes a sequence of chord instances from a pattern of Roman-numeral
//! tokens and a chosen key. Each token resolves independently through the
//! numeral tables; the chords are voiced with close voicing and
//! concatenated.
//!
//! `all_pitches` is the literal concatenation of every chord's pitch list:
//! a multiset, not a set. The same pitch recurring in consecutive chords
//! must be matched that many times by a transcription, so nothing is
//! deduplicated here.

use serde::Serialize;

use crate::error::TheoryError;
use crate::generate::{build_chord, ChordInstance};
use crate::keys::KeySignature;
use crate::roman::resolve_numeral;

/// A generated chord progression.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Progression {
    /// Key label as configured (e.g. "C", "Am").
    pub key: String,
    /// The Roman-numeral pattern the chords were resolved from.
    pub pattern: Vec<String>,
    pub chords: Vec<ChordInstance>,
    /// Flattened multiset of every chord's pitches, in chord order.
    pub all_pitches: Vec<u8>,
}

/// Generate a progression from a Roman-numeral pattern in the given key.
///
/// # Example
/// ```
/// use chordwise::generate_progression;
///
/// let pattern: Vec<String> = ["I", "IV", "V", "I"].iter().map(|s| s.to_string()).collect();
/// let progression = generate_progression("C", &pattern, 4, false).unwrap();
/// assert_eq!(progression.chords.len(), 4);
/// assert_eq!(progression.all_pitches.len(), 12); // 3 notes x 4 triads
/// ```
///
/// # Errors
/// An unknown key or a token absent from the key's numeral table is a
/// content error, surfaced immediately.
pub fn generate_progression(
    key_name: &str,
    pattern: &[String],
    octave: i8,
    require_inversion_labeling: bool,
) -> Result<Progression, TheoryError> {
    let key = KeySignature::parse(key_name)?;

    let chords: Vec<ChordInstance> = pattern
        .iter()
        .map(|token| {
            let resolved = resolve_numeral(token, &key)?;
            Ok(build_chord(
                resolved.root,
                resolved.chord_type,
                resolved.inversion,
                octave,
                require_inversion_labeling,
            ))
        })
        .collect::<Result<_, TheoryError>>()?;

    let all_pitches = chords
        .iter()
        .flat_map(|chord| chord.pitches.iter().copied())
        .collect();

    Ok(Progression {
        key: key_name.to_string(),
        pattern: pattern.to_vec(),
        chords,
        all_pitches,
    })
}
