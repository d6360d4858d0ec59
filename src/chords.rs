//! # Chord Type Catalog
//!
//! Static table mapping chord-quality keys to interval sets and canonical
//! symbols. Loaded once as process-wide immutable data; generation and
//! validation both look chord types up by key string.
//!
//! # Interval Reference
//! - minor 3rd = +3, major 3rd = +4, perfect 4th = +5, diminished 5th = +6,
//!   perfect 5th = +7, augmented 5th = +8, minor 7th = +10, major 7th = +11,
//!   major 9th = +14, perfect 11th = +17, major 13th = +21
//!
//! ## Related Modules
//! - `generate` - Stacks these intervals into voiced pitches
//! - `validate` - Synthesizes acceptable answer text from symbol/quality

use serde::Serialize;

use crate::error::TheoryError;

/// An immutable chord quality: interval set plus naming.
///
/// Invariants: `intervals[0] == 0`; intervals are strictly ascending;
/// length is 3-7 (triad through thirteenth families).
#[derive(Debug, Serialize, PartialEq)]
pub struct ChordType {
    /// Lookup key used by level configurations (e.g. "minor7").
    pub key: &'static str,
    /// Semitones from the root, ascending, starting at 0.
    pub intervals: &'static [u8],
    /// Canonical symbol appended to the root name (e.g. "m7"). Empty for major.
    pub symbol: &'static str,
    /// Human-readable name for UI display.
    pub display_name: &'static str,
}

impl ChordType {
    /// Whether this quality is symmetric under inversion (stacked major
    /// thirds). Inverting such a chord yields an enharmonically equivalent
    /// chord on a different root rather than a slash inversion.
    pub fn is_augmented(&self) -> bool {
        self.intervals == [0, 4, 8]
    }

    /// Whether the quality contains a perfect fifth above the root.
    pub fn has_perfect_fifth(&self) -> bool {
        self.intervals.contains(&7)
    }
}

/// All chord qualities the engine knows about.
pub const CHORD_TYPES: &[ChordType] = &[
    ChordType {
        key: "major",
        intervals: &[0, 4, 7],
        symbol: "",
        display_name: "Major",
    },
    ChordType {
        key: "minor",
        intervals: &[0, 3, 7],
        symbol: "m",
        display_name: "Minor",
    },
    ChordType {
        key: "diminished",
        intervals: &[0, 3, 6],
        symbol: "dim",
        display_name: "Diminished",
    },
    ChordType {
        key: "augmented",
        intervals: &[0, 4, 8],
        symbol: "aug",
        display_name: "Augmented",
    },
    ChordType {
        key: "sus2",
        intervals: &[0, 2, 7],
        symbol: "sus2",
        display_name: "Suspended 2nd",
    },
    ChordType {
        key: "sus4",
        intervals: &[0, 5, 7],
        symbol: "sus4",
        display_name: "Suspended 4th",
    },
    ChordType {
        key: "quartal",
        intervals: &[0, 5, 10],
        symbol: "q",
        display_name: "Quartal",
    },
    ChordType {
        key: "major7",
        intervals: &[0, 4, 7, 11],
        symbol: "maj7",
        display_name: "Major 7th",
    },
    ChordType {
        key: "minor7",
        intervals: &[0, 3, 7, 10],
        symbol: "m7",
        display_name: "Minor 7th",
    },
    ChordType {
        key: "dominant7",
        intervals: &[0, 4, 7, 10],
        symbol: "7",
        display_name: "Dominant 7th",
    },
    ChordType {
        key: "diminished7",
        intervals: &[0, 3, 6, 9],
        symbol: "dim7",
        display_name: "Diminished 7th",
    },
    ChordType {
        key: "halfDiminished7",
        intervals: &[0, 3, 6, 10],
        symbol: "m7b5",
        display_name: "Half-Diminished 7th",
    },
    ChordType {
        key: "major9",
        intervals: &[0, 4, 7, 11, 14],
        symbol: "maj9",
        display_name: "Major 9th",
    },
    ChordType {
        key: "minor9",
        intervals: &[0, 3, 7, 10, 14],
        symbol: "m9",
        display_name: "Minor 9th",
    },
    ChordType {
        key: "dominant9",
        intervals: &[0, 4, 7, 10, 14],
        symbol: "9",
        display_name: "Dominant 9th",
    },
    ChordType {
        key: "dominant11",
        intervals: &[0, 4, 7, 10, 14, 17],
        symbol: "11",
        display_name: "Dominant 11th",
    },
    ChordType {
        key: "dominant13",
        intervals: &[0, 4, 7, 10, 14, 17, 21],
        symbol: "13",
        display_name: "Dominant 13th",
    },
];

/// Look up a chord type by its catalog key.
///
/// An unknown key is a configuration error (a level referencing a quality
/// the catalog does not define), never a runtime data error.
///
/// # Example
/// ```
/// use chordwise::chord_type;
///
/// let minor7 = chord_type("minor7").unwrap();
/// assert_eq!(minor7.intervals, [0, 3, 7, 10]);
/// assert_eq!(minor7.symbol, "m7");
/// ```
pub fn chord_type(key: &str) -> Result<&'static ChordType, TheoryError> {
    CHORD_TYPES
        .iter()
        .find(|ct| ct.key == key)
        .ok_or_else(|| TheoryError::UnknownChordType {
            key: key.to_string(),
        })
}

/// Look up a chord type by its canonical symbol (e.g. "m7", "" for major).
pub fn chord_type_by_symbol(symbol: &str) -> Option<&'static ChordType> {
    CHORD_TYPES.iter().find(|ct| ct.symbol == symbol)
}
