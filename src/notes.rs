//! # Note Table
//!
//! Static chromatic pitch-class catalog and name lookups.
//!
//! A pitch class is a note name independent of octave, equivalent to
//! `midi_note % 12`. Every pitch class has two spellings (sharp and flat);
//! both directions of lookup live here, along with the fixed enharmonic
//! pair table used by answer validation.
//!
//! ## Pitch-class reference
//! - 0=C, 1=C#/Db, 2=D, 3=D#/Eb, 4=E, 5=F, 6=F#/Gb, 7=G, 8=G#/Ab, 9=A,
//!   10=A#/Bb, 11=B
//! - MIDI: C4 = 60 (middle C), C1 = 24, C6 = 84
//!
//! ## Related Modules
//! - `keys` - Builds diatonic scales over these pitch classes
//! - `validate` - Uses the enharmonic pair table for answer equivalence

use crate::error::TheoryError;

/// A note name independent of octave: `midi_note % 12`.
pub type PitchClass = u8;

pub const NOTES_PER_OCTAVE: u8 = 12;

/// Sharp spelling for each pitch class (0 = C).
pub const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Flat spelling for each pitch class (0 = C).
pub const FLAT_NAMES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// The five enharmonic pairs on the black keys.
///
/// Answer validation accepts a user answer if swapping one of these pairs
/// anywhere in the string produces an acceptable form.
pub const ENHARMONIC_PAIRS: [(&str, &str); 5] = [
    ("C#", "Db"),
    ("D#", "Eb"),
    ("F#", "Gb"),
    ("G#", "Ab"),
    ("A#", "Bb"),
];

/// Sharp spelling of a pitch class. Used for canonical expected answers.
pub fn sharp_name(pc: PitchClass) -> &'static str {
    SHARP_NAMES[(pc % NOTES_PER_OCTAVE) as usize]
}

/// Flat spelling of a pitch class.
pub fn flat_name(pc: PitchClass) -> &'static str {
    FLAT_NAMES[(pc % NOTES_PER_OCTAVE) as usize]
}

/// Parse a note name ("C", "F#", "Bb", "eb") into a pitch class.
///
/// Case-insensitive on the letter; accepts `#`/`♯` and `b`/`♭` accidentals.
///
/// # Example
/// ```
/// use chordwise::notes::pitch_class_from_name;
///
/// assert_eq!(pitch_class_from_name("C").unwrap(), 0);
/// assert_eq!(pitch_class_from_name("F#").unwrap(), 6);
/// assert_eq!(pitch_class_from_name("Bb").unwrap(), 10);
/// ```
pub fn pitch_class_from_name(name: &str) -> Result<PitchClass, TheoryError> {
    let unknown = || TheoryError::UnknownRoot {
        name: name.to_string(),
    };

    let mut chars = name.trim().chars();
    let letter = chars.next().ok_or_else(unknown)?;
    let base: i32 = match letter.to_ascii_uppercase() {
        'C' => 0,
        'D' => 2,
        'E' => 4,
        'F' => 5,
        'G' => 7,
        'A' => 9,
        'B' => 11,
        _ => return Err(unknown()),
    };

    let accidental: i32 = match chars.next() {
        None => 0,
        Some('#') | Some('♯') => 1,
        Some('b') | Some('♭') => -1,
        Some(_) => return Err(unknown()),
    };
    if chars.next().is_some() {
        return Err(unknown());
    }

    Ok((base + accidental).rem_euclid(12) as PitchClass)
}

/// MIDI note number of C in the given octave (C4 = 60, middle C).
pub fn octave_base(octave: i8) -> i32 {
    (octave as i32 + 1) * 12
}
