//! Voicing strategies
//!
//! Turns a (root, quality, inversion) choice into concrete pitches.
//!
//! Close voicing stacks the quality's intervals over the root and, for
//! inversions, rotates the lowest tones up an octave. Open voicing spreads
//! tones across registers with optional doublings.
//!
//! Voicing math runs in `i32`; pitches are converted to MIDI `u8` only
//! after range normalization.

use rand::Rng;

use crate::chords::ChordType;
use crate::notes::PitchClass;

/// Weight of the wide-spread open strategy.
///
/// The three-way split is a single uniform draw against cumulative bounds:
/// wide 0.30, octave-doubled 0.28, mixed 0.42. These are the effective
/// weights of the original nested probability checks, kept as one
/// unambiguous discrete choice.
const WIDE_WEIGHT: f64 = 0.30;

/// Weight of the octave-doubled open strategy (see [`WIDE_WEIGHT`]).
const DOUBLED_WEIGHT: f64 = 0.28;

/// Close voicing: root-position interval stack, with the standard "closed"
/// inversion reordering for `inversion > 0`.
///
/// The first `inversion` tones move to the end raised by an octave, then
/// the sequence is re-walked left to right forcing strict ascent: any
/// tone not above its predecessor is raised by successive octaves.
pub fn close_voicing(
    root: PitchClass,
    chord_type: &ChordType,
    inversion: u8,
    octave_base: i32,
) -> Vec<i32> {
    let root_pitch = octave_base + root as i32;
    let stacked: Vec<i32> = chord_type
        .intervals
        .iter()
        .map(|&interval| root_pitch + interval as i32)
        .collect();

    let inv = inversion as usize % stacked.len();
    let mut voiced: Vec<i32> = stacked[inv..].to_vec();
    voiced.extend(stacked[..inv].iter().map(|p| p + 12));

    for i in 1..voiced.len() {
        while voiced[i] <= voiced[i - 1] {
            voiced[i] += 12;
        }
    }
    voiced
}

/// Open voicing: one weighted choice among three spread strategies, then a
/// cleanup pass that dedupes exact pitches and reinserts any chord-tone
/// pitch class the strategy dropped, so the full chord-tone set is always
/// represented by at least one pitch.
pub fn open_voicing<R: Rng>(
    root: PitchClass,
    chord_type: &ChordType,
    octave_base: i32,
    rng: &mut R,
) -> Vec<i32> {
    let root_pitch = octave_base + root as i32;

    let draw = rng.gen::<f64>();
    let mut pitches = if draw < WIDE_WEIGHT {
        wide_spread(root_pitch, chord_type, rng)
    } else if draw < WIDE_WEIGHT + DOUBLED_WEIGHT {
        octave_doubled(root_pitch, chord_type, rng)
    } else {
        mixed_spread(root_pitch, chord_type, rng)
    };

    pitches.sort_unstable();
    pitches.dedup();

    for &interval in chord_type.intervals {
        let pc = (root_pitch + interval as i32).rem_euclid(12);
        if !pitches.iter().any(|p| p.rem_euclid(12) == pc) {
            pitches.push(root_pitch + interval as i32);
        }
    }
    pitches.sort_unstable();
    pitches
}

/// Root in a low octave, remaining chord tones in the middle octave, with a
/// doubled root an octave above half the time.
fn wide_spread<R: Rng>(root_pitch: i32, chord_type: &ChordType, rng: &mut R) -> Vec<i32> {
    let mut pitches = vec![root_pitch - 12];
    pitches.extend(
        chord_type.intervals[1..]
            .iter()
            .map(|&interval| root_pitch + interval as i32),
    );
    if rng.gen::<f64>() < 0.5 {
        pitches.push(root_pitch + 12);
    }
    pitches
}

/// Standard close voicing plus one extra copy of the root (or the fifth,
/// when the quality has a perfect fifth) an octave up.
fn octave_doubled<R: Rng>(root_pitch: i32, chord_type: &ChordType, rng: &mut R) -> Vec<i32> {
    let mut pitches: Vec<i32> = chord_type
        .intervals
        .iter()
        .map(|&interval| root_pitch + interval as i32)
        .collect();

    let doubled = if chord_type.has_perfect_fifth() && rng.gen::<f64>() < 0.5 {
        root_pitch + 7
    } else {
        root_pitch
    };
    pitches.push(doubled + 12);
    pitches
}

/// Low root, middle chord tones, one randomly chosen tone doubled high.
fn mixed_spread<R: Rng>(root_pitch: i32, chord_type: &ChordType, rng: &mut R) -> Vec<i32> {
    let mut pitches = vec![root_pitch - 12];
    pitches.extend(
        chord_type.intervals[1..]
            .iter()
            .map(|&interval| root_pitch + interval as i32),
    );
    let pick = chord_type.intervals[rng.gen_range(0..chord_type.intervals.len())];
    pitches.push(root_pitch + pick as i32 + 12);
    pitches
}
