//! Free-text chord answer validation
//!
//! One canonicalization function plus algorithmic synthesis of the full
//! acceptable-answer set from the expected answer's structured root,
//! quality, and inversion. User text is accepted on set membership, or on
//! set membership after swapping one enharmonic sharp/flat pair.

use std::collections::HashSet;

use serde::Deserialize;

use crate::chords::{ChordType, CHORD_TYPES};
use crate::error::TheoryError;
use crate::notes::{flat_name, pitch_class_from_name, sharp_name, PitchClass, ENHARMONIC_PAIRS};

/// Per-level validation behavior.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ValidationSettings {
    /// Whether the level drills inversions at all. When false, the
    /// generator stays in root position.
    #[serde(default)]
    pub supports_inversions: bool,
    /// Whether the textual answer must name the inversion. When false an
    /// inversion is audible in the pitches but the root-position answer is
    /// accepted.
    #[serde(default)]
    pub require_inversion_labeling: bool,
}

/// Canonicalize answer text. Ordered substitutions:
/// 1. whitespace removed
/// 2. dash variants (`–`, `—`, `−`) unified to `-`
/// 3. `♭` → `b`, `♯` → `#`
/// 4. `°`/`º` → `dim`
/// 5. everything lowercased
pub fn canonicalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.trim().chars() {
        match c {
            c if c.is_whitespace() => {}
            '–' | '—' | '−' => out.push('-'),
            '♭' => out.push('b'),
            '♯' => out.push('#'),
            '°' | 'º' => out.push_str("dim"),
            _ => out.extend(c.to_lowercase()),
        }
    }
    out
}

/// Accepted suffix spellings for each quality, canonical-form. The triad
/// synonym sets mirror the symbols chord charts actually use; bare `M` is
/// deliberately absent from the major set because matching is
/// case-insensitive and `m` must keep meaning minor.
fn quality_synonyms(chord_type: &ChordType) -> &'static [&'static str] {
    match chord_type.key {
        "major" => &["", "maj", "major"],
        "minor" => &["m", "min", "minor", "-"],
        "diminished" => &["dim", "diminished", "°", "º"],
        "augmented" => &["aug", "augmented", "+"],
        "sus2" => &["sus2"],
        "sus4" => &["sus4"],
        "quartal" => &["q", "quartal"],
        "major7" => &["maj7", "major7"],
        "minor7" => &["m7", "min7", "minor7", "-7"],
        "dominant7" => &["7", "dom7"],
        "diminished7" => &["dim7", "diminished7", "°7"],
        "halfDiminished7" => &["m7b5", "min7b5", "ø", "ø7"],
        "major9" => &["maj9", "major9"],
        "minor9" => &["m9", "min9", "minor9"],
        "dominant9" => &["9", "dom9"],
        "dominant11" => &["11", "dom11"],
        "dominant13" => &["13", "dom13"],
        _ => &[],
    }
}

/// Parse an engine-produced expected answer ("C", "F#m7", "Bb/1") back
/// into structured root, quality, and inversion.
fn parse_expected(expected: &str) -> Result<(PitchClass, &'static ChordType, u8), TheoryError> {
    let unparseable = || TheoryError::Config(format!("unparseable expected answer: {expected}"));

    let canonical = canonicalize(expected);
    let (body, inversion) = match canonical.split_once('/') {
        Some((body, suffix)) => {
            let inversion: u8 = suffix.parse().map_err(|_| unparseable())?;
            (body, inversion)
        }
        None => (canonical.as_str(), 0),
    };

    // Greedy root: a letter plus a trailing accidental when present, so
    // "bb..." reads as B-flat rather than B with a stray suffix.
    let root_len = match body.as_bytes() {
        [] => return Err(unparseable()),
        [_, b'#' | b'b', ..] => 2,
        _ => 1,
    };
    let root = pitch_class_from_name(&body[..root_len]).map_err(|_| unparseable())?;

    let suffix = &body[root_len..];
    let chord_type = CHORD_TYPES
        .iter()
        .find(|ct| {
            quality_synonyms(ct)
                .iter()
                .any(|synonym| canonicalize(synonym) == suffix)
        })
        .ok_or_else(|| TheoryError::UnknownChordType {
            key: suffix.to_string(),
        })?;

    Ok((root, chord_type, inversion))
}

/// Ordinal spellings appended to a base answer for a labeled inversion.
fn ordinal_forms(inversion: u8) -> &'static [&'static str] {
    match inversion {
        1 => &["/first", "firstinversion", "1stinversion"],
        2 => &["/second", "secondinversion", "2ndinversion"],
        3 => &["/third", "thirdinversion", "3rdinversion"],
        _ => &[],
    }
}

/// The complete set of acceptable canonical answers for a chord.
fn expected_variants(
    root: PitchClass,
    chord_type: &'static ChordType,
    inversion: u8,
    settings: &ValidationSettings,
) -> HashSet<String> {
    let mut variants = HashSet::new();
    let label_inversion = settings.require_inversion_labeling && inversion > 0;

    for root_name in [sharp_name(root), flat_name(root)] {
        for suffix in quality_synonyms(chord_type) {
            let base = canonicalize(&format!("{root_name}{suffix}"));
            if !label_inversion {
                variants.insert(base);
                continue;
            }

            // Labeling is required: only labeled forms are acceptable.
            variants.insert(format!("{base}/{inversion}"));
            for form in ordinal_forms(inversion) {
                variants.insert(format!("{base}{form}"));
            }
            // Slash-chord bass-note notation, from the chord's own
            // interval table at the inversion's bass degree.
            let bass_interval =
                chord_type.intervals[inversion as usize % chord_type.intervals.len()];
            let bass = (root + bass_interval) % 12;
            for bass_name in [sharp_name(bass), flat_name(bass)] {
                variants.insert(canonicalize(&format!("{base}/{bass_name}")));
            }
        }
    }
    variants
}

/// Validate a user's free-text answer against the expected answer.
///
/// Both sides are canonicalized; the expected answer is expanded into its
/// full variant set: quality synonyms, enharmonic root spellings, and,
/// when labeling is required, inversion label forms.
///
/// # Example
/// ```
/// use chordwise::{validate_chord_answer, ValidationSettings};
///
/// let settings = ValidationSettings::default();
/// assert!(validate_chord_answer("c maj", "C", &settings).unwrap());
/// assert!(validate_chord_answer("Db", "C#", &settings).unwrap());
/// assert!(!validate_chord_answer("Cm", "C", &settings).unwrap());
/// ```
///
/// # Errors
/// [`TheoryError::Config`] / [`TheoryError::UnknownChordType`] when the
/// expected answer itself cannot be parsed: a content bug, not a wrong
/// user answer.
pub fn validate_chord_answer(
    user: &str,
    expected: &str,
    settings: &ValidationSettings,
) -> Result<bool, TheoryError> {
    let (root, chord_type, inversion) = parse_expected(expected)?;
    let variants = expected_variants(root, chord_type, inversion, settings);

    let answer = canonicalize(user);
    if variants.contains(&answer) {
        return Ok(true);
    }

    // One sharp/flat swap anywhere in the string may reach a variant.
    for (sharp, flat) in ENHARMONIC_PAIRS {
        let sharp = sharp.to_lowercase();
        let flat = flat.to_lowercase();
        if answer.contains(&sharp) && variants.contains(&answer.replacen(&sharp, &flat, 1)) {
            return Ok(true);
        }
        if answer.contains(&flat) && variants.contains(&answer.replacen(&flat, &sharp, 1)) {
            return Ok(true);
        }
    }
    Ok(false)
}
