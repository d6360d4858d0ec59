//! Progression transcription validation
//!
//! Compares the user's placed pitches against the progression's
//! `all_pitches` as multisets. Order does not matter within a chord, but a
//! pitch recurring across chords must be matched once per occurrence,
//! which is why `all_pitches` is never deduplicated.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::progression::Progression;

/// Options for transcription comparison.
#[derive(Debug, Clone, Copy, Default)]
pub struct TranscriptionOptions {
    /// Compare pitch classes (`pitch % 12`) instead of absolute pitches,
    /// forgiving register errors.
    pub octave_tolerant: bool,
}

/// Outcome of a transcription comparison.
///
/// `missing` and `extra` are multisets: a pitch the user under-played
/// twice appears twice in `missing`. In octave-tolerant mode they hold
/// pitch classes rather than absolute pitches.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_correct: bool,
    /// 0-100. Partial credit: accuracy minus a 10-point penalty per
    /// missing or surplus note, floored at 0.
    pub score: u8,
    pub correct_count: usize,
    pub wrong_count: usize,
    pub missing: Vec<u8>,
    pub extra: Vec<u8>,
}

/// Compare user pitches against a progression's pitch multiset.
///
/// Correctness is an exact multiset match: no missing notes, no surplus
/// notes. The score keeps the partial-credit formula
/// `round(max(0, accuracy*100 - 10*(wrong + missing)))` for product
/// surfaces that want graded feedback.
pub fn validate_transcription(
    user_pitches: &[u8],
    progression: &Progression,
    options: &TranscriptionOptions,
) -> ValidationResult {
    let reduce = |pitch: u8| {
        if options.octave_tolerant {
            pitch % 12
        } else {
            pitch
        }
    };

    let mut expected_counts: BTreeMap<u8, usize> = BTreeMap::new();
    for &pitch in &progression.all_pitches {
        *expected_counts.entry(reduce(pitch)).or_insert(0) += 1;
    }
    let mut user_counts: BTreeMap<u8, usize> = BTreeMap::new();
    for &pitch in user_pitches {
        *user_counts.entry(reduce(pitch)).or_insert(0) += 1;
    }

    let mut correct_count = 0;
    let mut missing = Vec::new();
    let mut extra = Vec::new();

    for (&pitch, &want) in &expected_counts {
        let have = user_counts.get(&pitch).copied().unwrap_or(0);
        correct_count += want.min(have);
        for _ in have..want {
            missing.push(pitch);
        }
    }
    for (&pitch, &have) in &user_counts {
        let want = expected_counts.get(&pitch).copied().unwrap_or(0);
        for _ in want..have {
            extra.push(pitch);
        }
    }

    let total_expected = progression.all_pitches.len();
    let wrong_count = extra.len();
    let accuracy = if total_expected == 0 {
        if wrong_count == 0 {
            1.0
        } else {
            0.0
        }
    } else {
        correct_count as f64 / total_expected as f64
    };
    let penalty = 10.0 * (wrong_count + missing.len()) as f64;
    let score = (accuracy * 100.0 - penalty).max(0.0).round() as u8;

    ValidationResult {
        is_correct: missing.is_empty() && extra.is_empty(),
        score,
        correct_count,
        wrong_count,
        missing,
        extra,
    }
}
