//! Chord generation engine
//!
//! Picks a (root, quality, inversion) tuple from a level's allowed sets,
//! voices it, normalizes the register, and builds the canonical expected
//! answer text.

use log::debug;
use rand::Rng;

use super::range;
use super::types::ChordInstance;
use super::voicing;
use crate::chords::ChordType;
use crate::error::TheoryError;
use crate::notes::{octave_base, sharp_name, PitchClass};

/// Attempt cap for avoiding a repeat of the previous chord. After the cap
/// the repeat is accepted, sacrificing the no-repeat guarantee under
/// exhaustion (a level with one allowed chord) instead of looping forever.
const MAX_DUPLICATE_ATTEMPTS: usize = 20;

/// Generation parameters resolved from a level configuration: every
/// candidate set the random pick draws from.
#[derive(Debug, Clone)]
pub struct GeneratorParams {
    /// Candidate root pitch classes.
    pub roots: Vec<PitchClass>,
    /// Candidate qualities.
    pub chord_types: Vec<&'static ChordType>,
    /// Allowed inversion levels, 0 = root position.
    pub inversions: Vec<u8>,
    /// Candidate octaves for the voicing base (4 = the octave of middle C).
    pub octaves: Vec<i8>,
    /// Use the open-voicing strategies instead of close voicing.
    pub open_voicing: bool,
    /// Append `/1`, `/2`, ... to the expected answer for inversions.
    pub require_inversion_labeling: bool,
}

/// Build a concrete chord from an already-decided root, quality, and
/// inversion, using close voicing. This is the deterministic core shared
/// by random generation and progression resolution.
///
/// Augmented qualities are symmetric under inversion: inverting one yields
/// an enharmonically equivalent augmented chord on a different root, not a
/// slash inversion. An inversion request on an augmented quality therefore
/// re-roots the chord at the bass tone and resets the inversion to 0.
pub fn build_chord(
    root: PitchClass,
    chord_type: &'static ChordType,
    inversion: u8,
    octave: i8,
    require_inversion_labeling: bool,
) -> ChordInstance {
    let (root, inversion) = reroot_augmented(root, chord_type, inversion);

    let mut pitches = voicing::close_voicing(root, chord_type, inversion, octave_base(octave));
    range::normalize(&mut pitches, range::MIN_PITCH, range::MAX_PITCH);

    ChordInstance {
        root,
        chord_type,
        inversion,
        pitches: to_midi(&pitches),
        expected_answer: expected_answer(root, chord_type, inversion, require_inversion_labeling),
    }
}

/// Build a chord using the open-voicing strategies. Open voicings spread
/// from root position; the expected answer never carries an inversion
/// suffix.
pub fn build_open_chord<R: Rng>(
    root: PitchClass,
    chord_type: &'static ChordType,
    octave: i8,
    rng: &mut R,
) -> ChordInstance {
    let mut pitches = voicing::open_voicing(root, chord_type, octave_base(octave), rng);
    range::normalize(&mut pitches, range::MIN_PITCH, range::MAX_PITCH);

    ChordInstance {
        root,
        chord_type,
        inversion: 0,
        pitches: to_midi(&pitches),
        expected_answer: expected_answer(root, chord_type, 0, false),
    }
}

/// Generate one chord drill: uniform random picks from the allowed sets,
/// with a bounded retry loop avoiding an exact repeat of `previous`.
///
/// # Errors
/// [`TheoryError::EmptyChoice`] when any candidate set is empty: a level
/// configuration bug, surfaced immediately.
pub fn generate_chord<R: Rng>(
    params: &GeneratorParams,
    previous: Option<&ChordInstance>,
    rng: &mut R,
) -> Result<ChordInstance, TheoryError> {
    ensure_non_empty(&params.roots, "roots")?;
    ensure_non_empty(&params.chord_types, "chord types")?;
    ensure_non_empty(&params.inversions, "inversions")?;
    ensure_non_empty(&params.octaves, "octaves")?;

    let octave = params.octaves[rng.gen_range(0..params.octaves.len())];

    let mut candidate = pick_candidate(params, rng);
    if let Some(prev) = previous {
        let mut attempts = 1;
        while matches_instance(candidate, prev) && attempts < MAX_DUPLICATE_ATTEMPTS {
            candidate = pick_candidate(params, rng);
            attempts += 1;
        }
        if matches_instance(candidate, prev) {
            debug!(
                "accepting repeated chord {} after {} attempts",
                prev.expected_answer, attempts
            );
        }
    }

    let (root, chord_type, inversion) = candidate;
    let instance = if params.open_voicing {
        build_open_chord(root, chord_type, octave, rng)
    } else {
        build_chord(
            root,
            chord_type,
            inversion,
            octave,
            params.require_inversion_labeling,
        )
    };
    Ok(instance)
}

/// Uniform pick of (root, quality, inversion), with augmented re-rooting
/// already applied so duplicate comparison sees the effective tuple.
fn pick_candidate<R: Rng>(
    params: &GeneratorParams,
    rng: &mut R,
) -> (PitchClass, &'static ChordType, u8) {
    let root = params.roots[rng.gen_range(0..params.roots.len())];
    let chord_type = params.chord_types[rng.gen_range(0..params.chord_types.len())];
    let inversion = params.inversions[rng.gen_range(0..params.inversions.len())];
    let (root, inversion) = reroot_augmented(root, chord_type, inversion);
    (root, chord_type, inversion)
}

fn matches_instance(candidate: (PitchClass, &'static ChordType, u8), prev: &ChordInstance) -> bool {
    candidate.0 == prev.root && candidate.1.key == prev.chord_type.key && candidate.2 == prev.inversion
}

fn reroot_augmented(
    root: PitchClass,
    chord_type: &ChordType,
    inversion: u8,
) -> (PitchClass, u8) {
    if chord_type.is_augmented() && inversion > 0 {
        let bass = chord_type.intervals[inversion as usize % chord_type.intervals.len()];
        ((root + bass) % 12, 0)
    } else {
        (root, inversion)
    }
}

/// Canonical answer text: root name plus the quality symbol, with a `/k`
/// inversion suffix only when the level's validation requires labeling.
/// Without labeling the inversion is audible in the pitches but the text
/// stays root-position-equivalent.
fn expected_answer(
    root: PitchClass,
    chord_type: &ChordType,
    inversion: u8,
    require_inversion_labeling: bool,
) -> String {
    let mut answer = format!("{}{}", sharp_name(root), chord_type.symbol);
    if require_inversion_labeling && inversion > 0 {
        answer.push('/');
        answer.push_str(&inversion.to_string());
    }
    answer
}

fn to_midi(pitches: &[i32]) -> Vec<u8> {
    pitches.iter().map(|&p| p.clamp(0, 127) as u8).collect()
}

fn ensure_non_empty<T>(items: &[T], what: &'static str) -> Result<(), TheoryError> {
    if items.is_empty() {
        Err(TheoryError::EmptyChoice { what })
    } else {
        Ok(())
    }
}
