//! Octave-range normalization
//!
//! Transposes a candidate pitch set by whole octaves until every pitch
//! falls inside the allowed MIDI window. Only the register changes; the
//! pitch-class content is preserved exactly.

use log::warn;

/// Lowest allowed pitch after normalization (C1).
pub const MIN_PITCH: i32 = 24;

/// Highest allowed pitch after normalization (C6).
pub const MAX_PITCH: i32 = 84;

/// Shift cap. An interval set wider than the window would otherwise
/// oscillate between the down-shift and up-shift rules forever.
const MAX_SHIFTS: usize = 50;

/// Shift `pitches` by octaves into `[min_pitch, max_pitch]`.
///
/// Fixed-point loop: while the highest pitch exceeds `max_pitch`, shift
/// everything down an octave; otherwise, while the lowest pitch is below
/// `min_pitch`, shift everything up an octave. Bounded at 50 shifts; on
/// exhaustion the best-effort (possibly out-of-window) set is kept, since
/// a slightly out-of-range chord is preferable to blocking the user.
pub fn normalize(pitches: &mut [i32], min_pitch: i32, max_pitch: i32) {
    if pitches.is_empty() {
        return;
    }

    for _ in 0..MAX_SHIFTS {
        let highest = *pitches.iter().max().unwrap();
        let lowest = *pitches.iter().min().unwrap();
        if highest > max_pitch {
            for p in pitches.iter_mut() {
                *p -= 12;
            }
        } else if lowest < min_pitch {
            for p in pitches.iter_mut() {
                *p += 12;
            }
        } else {
            return;
        }
    }

    warn!(
        "pitch set {:?} does not fit in [{}, {}]; keeping best effort",
        pitches, min_pitch, max_pitch
    );
}
