//! # Roman Numeral Resolver
//!
//! Maps a Roman-numeral token to a scale degree, chord quality, and root
//! pitch class within a key.
//!
//! ## Token grammar
//! - The part after a `/` is an inversion-by-bass suffix when it is `3`
//!   (first inversion) or `5` (second inversion): `V/3` is a first-inversion
//!   dominant. Any other suffix keeps the whole token as a table key, which
//!   is how secondary dominants like `V/V` survive the split.
//! - Accidental-prefixed borrowed chords (`bIII`, `bVI`, `bVII`) and
//!   quality markers (`vii°`, with `viio` as an ASCII alias) are table
//!   entries, not parsed structure.
//!
//! ## Mode-specific tables
//! Major and minor keys use distinct tables since scale degree qualities
//! differ. The minor table is built on the natural minor scale; its
//! dominant-function entries (`V`, `V7`, `vii°`) carry the raised leading
//! tone as an explicit accidental offset.
//!
//! Secondary dominants resolve the *target* degree first, then transpose up
//! a perfect fifth to get the dominant's own root.
//!
//! ## Related Modules
//! - `keys` - Supplies the diatonic scale the degrees index into
//! - `progression` - Resolves each token of a pattern through this module

use crate::chords::{chord_type, ChordType};
use crate::error::TheoryError;
use crate::keys::{KeySignature, Mode};
use crate::notes::PitchClass;

/// One row of a mode's numeral table.
struct NumeralEntry {
    token: &'static str,
    /// Scale degree 0-6. For secondary dominants, the *target* degree.
    degree: usize,
    /// Chord-type catalog key.
    quality: &'static str,
    /// Semitone offset applied to the diatonic degree (borrowed chords,
    /// raised leading tones).
    accidental: i8,
    /// Resolve the target degree, then transpose up a perfect fifth.
    secondary_dominant: bool,
}

const fn entry(
    token: &'static str,
    degree: usize,
    quality: &'static str,
) -> NumeralEntry {
    NumeralEntry {
        token,
        degree,
        quality,
        accidental: 0,
        secondary_dominant: false,
    }
}

const MAJOR_NUMERALS: &[NumeralEntry] = &[
    entry("I", 0, "major"),
    entry("ii", 1, "minor"),
    entry("iii", 2, "minor"),
    entry("IV", 3, "major"),
    entry("V", 4, "major"),
    entry("V7", 4, "dominant7"),
    entry("vi", 5, "minor"),
    entry("vii°", 6, "diminished"),
    entry("viio", 6, "diminished"),
    entry("I7", 0, "major7"),
    entry("ii7", 1, "minor7"),
    entry("vi7", 5, "minor7"),
    // borrowed from the parallel minor
    NumeralEntry {
        token: "bIII",
        degree: 2,
        quality: "major",
        accidental: -1,
        secondary_dominant: false,
    },
    NumeralEntry {
        token: "bVI",
        degree: 5,
        quality: "major",
        accidental: -1,
        secondary_dominant: false,
    },
    NumeralEntry {
        token: "bVII",
        degree: 6,
        quality: "major",
        accidental: -1,
        secondary_dominant: false,
    },
    // secondary dominants
    NumeralEntry {
        token: "V/V",
        degree: 4,
        quality: "major",
        accidental: 0,
        secondary_dominant: true,
    },
    NumeralEntry {
        token: "V7/V",
        degree: 4,
        quality: "dominant7",
        accidental: 0,
        secondary_dominant: true,
    },
    NumeralEntry {
        token: "V/ii",
        degree: 1,
        quality: "major",
        accidental: 0,
        secondary_dominant: true,
    },
    NumeralEntry {
        token: "V/IV",
        degree: 3,
        quality: "major",
        accidental: 0,
        secondary_dominant: true,
    },
    NumeralEntry {
        token: "V/vi",
        degree: 5,
        quality: "major",
        accidental: 0,
        secondary_dominant: true,
    },
];

const MINOR_NUMERALS: &[NumeralEntry] = &[
    entry("i", 0, "minor"),
    entry("ii°", 1, "diminished"),
    entry("iio", 1, "diminished"),
    entry("III", 2, "major"),
    entry("iv", 3, "minor"),
    entry("v", 4, "minor"),
    entry("V", 4, "major"),
    entry("V7", 4, "dominant7"),
    entry("VI", 5, "major"),
    entry("VII", 6, "major"),
    entry("i7", 0, "minor7"),
    entry("iv7", 3, "minor7"),
    // diminished on the raised leading tone
    NumeralEntry {
        token: "vii°",
        degree: 6,
        quality: "diminished",
        accidental: 1,
        secondary_dominant: false,
    },
    NumeralEntry {
        token: "viio",
        degree: 6,
        quality: "diminished",
        accidental: 1,
        secondary_dominant: false,
    },
    // secondary dominants
    NumeralEntry {
        token: "V/III",
        degree: 2,
        quality: "major",
        accidental: 0,
        secondary_dominant: true,
    },
    NumeralEntry {
        token: "V/iv",
        degree: 3,
        quality: "major",
        accidental: 0,
        secondary_dominant: true,
    },
];

/// A numeral resolved against a concrete key: everything the chord
/// generator needs to voice it.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedChord {
    pub root: PitchClass,
    pub chord_type: &'static ChordType,
    /// 0 = root position; set by a `/3` or `/5` bass suffix.
    pub inversion: u8,
    /// Scale degree 0-6 the numeral names (target degree for secondaries).
    pub degree: usize,
}

/// Resolve a Roman-numeral token within a key.
///
/// # Example
/// ```
/// use chordwise::{resolve_numeral, KeySignature};
///
/// let key = KeySignature::parse("C").unwrap();
/// let five = resolve_numeral("V7", &key).unwrap();
/// assert_eq!(five.root, 7); // G
/// assert_eq!(five.chord_type.symbol, "7");
/// ```
///
/// # Errors
/// Unknown tokens and numerals raise [`TheoryError::UnknownNumeral`]: a
/// progression pattern referencing a numeral absent from the mode's table
/// is a content error, not a recoverable runtime condition.
pub fn resolve_numeral(token: &str, key: &KeySignature) -> Result<ResolvedChord, TheoryError> {
    let trimmed = token.trim();

    // An inversion-by-bass suffix (`/3`, `/5`) is split off; any other
    // `/`-suffix keeps the whole token intact as a table key.
    let (symbol, inversion) = match trimmed.split_once('/') {
        Some((head, "3")) => (head, 1),
        Some((head, "5")) => (head, 2),
        _ => (trimmed, 0),
    };

    let table = match key.mode {
        Mode::Major => MAJOR_NUMERALS,
        Mode::Minor => MINOR_NUMERALS,
    };
    let entry = table
        .iter()
        .find(|e| e.token == symbol)
        .ok_or_else(|| TheoryError::UnknownNumeral {
            token: token.to_string(),
            mode: key.mode,
        })?;

    let mut root =
        (key.degree(entry.degree) as i32 + entry.accidental as i32).rem_euclid(12) as PitchClass;
    if entry.secondary_dominant {
        // The dominant of the target degree sits a perfect fifth above it.
        root = (root + 7) % 12;
    }

    Ok(ResolvedChord {
        root,
        chord_type: chord_type(entry.quality)?,
        inversion,
        degree: entry.degree,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(name: &str) -> KeySignature {
        KeySignature::parse(name).unwrap()
    }

    #[test]
    fn test_diatonic_major() {
        let c = key("C");
        assert_eq!(resolve_numeral("I", &c).unwrap().root, 0);
        assert_eq!(resolve_numeral("IV", &c).unwrap().root, 5);
        assert_eq!(resolve_numeral("V", &c).unwrap().root, 7);
        assert_eq!(resolve_numeral("vi", &c).unwrap().root, 9);
        let two = resolve_numeral("ii", &c).unwrap();
        assert_eq!((two.root, two.chord_type.key), (2, "minor"));
    }

    #[test]
    fn test_leading_tone_diminished() {
        let c = key("C");
        let seven = resolve_numeral("vii°", &c).unwrap();
        assert_eq!(seven.root, 11);
        assert_eq!(seven.chord_type.key, "diminished");
        // ASCII alias resolves identically
        assert_eq!(resolve_numeral("viio", &c).unwrap().root, 11);
    }

    #[test]
    fn test_borrowed_flat_seven() {
        // bVII in C is a Bb major chord
        let seven = resolve_numeral("bVII", &key("C")).unwrap();
        assert_eq!(seven.root, 10);
        assert_eq!(seven.chord_type.key, "major");
    }

    #[test]
    fn test_inversion_by_bass_suffix() {
        let c = key("C");
        assert_eq!(resolve_numeral("V/3", &c).unwrap().inversion, 1);
        assert_eq!(resolve_numeral("V/5", &c).unwrap().inversion, 2);
        assert_eq!(resolve_numeral("V", &c).unwrap().inversion, 0);
    }

    #[test]
    fn test_secondary_dominant() {
        // V/V in C: target degree is G, dominant of G is D major
        let five_of_five = resolve_numeral("V/V", &key("C")).unwrap();
        assert_eq!(five_of_five.root, 2);
        assert_eq!(five_of_five.chord_type.key, "major");
        assert_eq!(five_of_five.inversion, 0);

        let five7_of_five = resolve_numeral("V7/V", &key("C")).unwrap();
        assert_eq!(five7_of_five.chord_type.key, "dominant7");
    }

    #[test]
    fn test_minor_mode_table() {
        let a = key("Am");
        let one = resolve_numeral("i", &a).unwrap();
        assert_eq!((one.root, one.chord_type.key), (9, "minor"));
        // V in minor borrows the raised leading tone via its major quality
        let five = resolve_numeral("V", &a).unwrap();
        assert_eq!((five.root, five.chord_type.key), (4, "major"));
        // vii° is built on the raised seventh: G# in A minor
        assert_eq!(resolve_numeral("vii°", &a).unwrap().root, 8);
        // major-mode-only tokens are unknown in minor
        assert!(matches!(
            resolve_numeral("IV", &a),
            Err(TheoryError::UnknownNumeral { .. })
        ));
    }

    #[test]
    fn test_unknown_token() {
        assert!(matches!(
            resolve_numeral("IX", &key("C")),
            Err(TheoryError::UnknownNumeral { .. })
        ));
    }
}
