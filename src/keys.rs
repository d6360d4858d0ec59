//! # Key Signature Table
//!
//! Major/minor key parsing and diatonic scale construction.
//!
//! A key signature here is the engine's working view of a key: tonic pitch
//! class, mode, and the seven diatonic scale notes. Scale notes are derived
//! from the mode's interval pattern over the tonic, which keeps the table
//! closed under all 12 tonics without enumerating 24 keys by hand.

use std::fmt;

use crate::error::TheoryError;
use crate::notes::{pitch_class_from_name, PitchClass};

/// Major or minor mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Major,
    Minor,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Major => write!(f, "major"),
            Mode::Minor => write!(f, "minor"),
        }
    }
}

/// Semitone steps of the major scale from the tonic.
const MAJOR_STEPS: [u8; 7] = [0, 2, 4, 5, 7, 9, 11];

/// Semitone steps of the natural minor scale from the tonic.
const MINOR_STEPS: [u8; 7] = [0, 2, 3, 5, 7, 8, 10];

/// A key: tonic pitch class, mode, and the seven diatonic scale notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySignature {
    pub tonic: PitchClass,
    pub mode: Mode,
    /// Diatonic scale notes as pitch classes, tonic first. All distinct.
    pub scale_notes: [PitchClass; 7],
}

impl KeySignature {
    /// Build the key on the given tonic and mode.
    pub fn new(tonic: PitchClass, mode: Mode) -> Self {
        let steps = match mode {
            Mode::Major => &MAJOR_STEPS,
            Mode::Minor => &MINOR_STEPS,
        };
        let mut scale_notes = [0u8; 7];
        for (slot, &step) in scale_notes.iter_mut().zip(steps.iter()) {
            *slot = (tonic + step) % 12;
        }
        Self {
            tonic,
            mode,
            scale_notes,
        }
    }

    /// Parse a key name like "C", "F#", "Bb" (major) or "Am", "C#m", "Ebm"
    /// (minor; trailing `m`).
    ///
    /// # Example
    /// ```
    /// use chordwise::{KeySignature, Mode};
    ///
    /// let key = KeySignature::parse("Am").unwrap();
    /// assert_eq!(key.tonic, 9);
    /// assert_eq!(key.mode, Mode::Minor);
    /// ```
    pub fn parse(name: &str) -> Result<Self, TheoryError> {
        let trimmed = name.trim();
        let (tonic_name, mode) = match trimmed.strip_suffix('m') {
            // "m" suffix only counts when something precedes it ("m" alone
            // would otherwise parse as an empty tonic)
            Some(rest) if !rest.is_empty() => (rest, Mode::Minor),
            _ => (trimmed, Mode::Major),
        };
        let tonic = pitch_class_from_name(tonic_name).map_err(|_| TheoryError::UnknownKey {
            name: name.to_string(),
        })?;
        Ok(Self::new(tonic, mode))
    }

    /// Pitch class of the given scale degree (0 = tonic .. 6).
    pub fn degree(&self, degree: usize) -> PitchClass {
        self.scale_notes[degree % 7]
    }
}
