//! Generated chord instance type definitions

use serde::Serialize;

use crate::chords::ChordType;
use crate::notes::PitchClass;

/// One concrete generated chord, ready for collaborators.
///
/// Audio playback reads `pitches`; the piano-roll UI reads `pitches` and
/// `expected_answer` (for feedback only); the validator compares user text
/// against `expected_answer`.
///
/// # Fields
/// - `root`: root pitch class (0-11), after any augmented re-rooting
/// - `chord_type`: quality from the static catalog
/// - `inversion`: 0 = root position. Always 0 for augmented qualities
///   (their inversions are re-rooted) and for open voicings
/// - `pitches`: MIDI notes, strictly ascending. Same length as the
///   quality's interval set for close voicings; open voicings may add
///   octave-equivalent doublings but always cover every chord-tone pitch
///   class
/// - `expected_answer`: canonical answer text, e.g. "F#m7" or "C/1" when
///   the level requires inversion labeling
///
/// Constructed fresh per problem and immutable after construction;
/// nothing in this layer persists it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordInstance {
    pub root: PitchClass,
    pub chord_type: &'static ChordType,
    pub inversion: u8,
    pub pitches: Vec<u8>,
    pub expected_answer: String,
}

impl ChordInstance {
    /// Pitch classes sounding in this voicing, in pitch order.
    pub fn pitch_classes(&self) -> Vec<PitchClass> {
        self.pitches.iter().map(|p| p % 12).collect()
    }

    /// The lowest-sounding pitch.
    pub fn bass(&self) -> Option<u8> {
        self.pitches.first().copied()
    }
}
