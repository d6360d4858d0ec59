use rand::rngs::StdRng;
use rand::SeedableRng;

use super::*;
use crate::chords::{chord_type, CHORD_TYPES};

fn params(
    roots: Vec<u8>,
    keys: &[&str],
    inversions: Vec<u8>,
    open_voicing: bool,
) -> GeneratorParams {
    GeneratorParams {
        roots,
        chord_types: keys.iter().map(|k| chord_type(k).unwrap()).collect(),
        inversions,
        octaves: vec![4],
        open_voicing,
        require_inversion_labeling: false,
    }
}

#[test]
fn test_c_major_root_position() {
    let instance = build_chord(0, chord_type("major").unwrap(), 0, 4, false);
    assert_eq!(instance.pitches, [60, 64, 67]);
    assert_eq!(instance.expected_answer, "C");
    assert_eq!(instance.inversion, 0);
}

#[test]
fn test_c_major_first_inversion() {
    // root-third-fifth -> third-fifth-root+12
    let instance = build_chord(0, chord_type("major").unwrap(), 1, 4, false);
    assert_eq!(instance.pitches, [64, 67, 72]);
    assert_eq!(instance.expected_answer, "C");

    let labeled = build_chord(0, chord_type("major").unwrap(), 1, 4, true);
    assert_eq!(labeled.expected_answer, "C/1");
}

#[test]
fn test_seventh_chord_inversions() {
    let instance = build_chord(7, chord_type("dominant7").unwrap(), 2, 4, true);
    // G7 second inversion: D F G B
    assert_eq!(instance.pitches, [74, 77, 79, 83]);
    assert_eq!(instance.expected_answer, "G7/2");
}

#[test]
fn test_augmented_inversion_reroots() {
    // Inverting C augmented yields an augmented chord on E, not "C/1"
    let instance = build_chord(0, chord_type("augmented").unwrap(), 1, 4, true);
    assert_eq!(instance.root, 4);
    assert_eq!(instance.inversion, 0);
    assert_eq!(instance.expected_answer, "Eaug");
    assert_eq!(instance.pitches, [64, 68, 72]);
}

#[test]
fn test_inversion_preserves_pitch_class_set() {
    for ct in CHORD_TYPES.iter().filter(|ct| !ct.is_augmented()) {
        let root_position = build_chord(2, ct, 0, 4, false);
        let mut expected: Vec<u8> = root_position.pitch_classes();
        expected.sort_unstable();

        for inversion in 1..ct.intervals.len() as u8 {
            let inverted = build_chord(2, ct, inversion, 4, false);
            for pair in inverted.pitches.windows(2) {
                assert!(pair[0] < pair[1], "{} inversion {} not ascending", ct.key, inversion);
            }
            let mut classes = inverted.pitch_classes();
            classes.sort_unstable();
            assert_eq!(classes, expected, "{} inversion {}", ct.key, inversion);
        }
    }
}

#[test]
fn test_generated_pitches_stay_in_window() {
    let all_keys: Vec<&str> = CHORD_TYPES.iter().map(|ct| ct.key).collect();
    let mut level = params((0..12).collect(), &all_keys, vec![0, 1, 2], false);
    level.octaves = vec![1, 2, 3, 4, 5, 6];

    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let instance = generate_chord(&level, None, &mut rng).unwrap();
        for &pitch in &instance.pitches {
            assert!(
                (24..=84).contains(&(pitch as i32)),
                "{} produced out-of-window pitch {}",
                instance.expected_answer,
                pitch
            );
        }
    }
}

#[test]
fn test_generation_is_deterministic_under_seed() {
    let level = params((0..12).collect(), &["major", "minor", "dominant7"], vec![0, 1], false);

    let a = generate_chord(&level, None, &mut StdRng::seed_from_u64(42)).unwrap();
    let b = generate_chord(&level, None, &mut StdRng::seed_from_u64(42)).unwrap();
    assert_eq!(a.pitches, b.pitches);
    assert_eq!(a.expected_answer, b.expected_answer);
}

#[test]
fn test_duplicate_avoided_when_alternatives_exist() {
    let level = params((0..12).collect(), &["major", "minor"], vec![0], false);
    let mut rng = StdRng::seed_from_u64(3);

    let mut previous = generate_chord(&level, None, &mut rng).unwrap();
    for _ in 0..50 {
        let next = generate_chord(&level, Some(&previous), &mut rng).unwrap();
        assert!(
            next.root != previous.root
                || next.chord_type.key != previous.chord_type.key
                || next.inversion != previous.inversion,
            "repeat of {} despite alternatives",
            previous.expected_answer
        );
        previous = next;
    }
}

#[test]
fn test_duplicate_accepted_when_exhausted() {
    // Only one possible chord: the retry cap must accept the repeat
    // rather than loop forever.
    let level = params(vec![0], &["major"], vec![0], false);
    let mut rng = StdRng::seed_from_u64(11);

    let first = generate_chord(&level, None, &mut rng).unwrap();
    let second = generate_chord(&level, Some(&first), &mut rng).unwrap();
    assert_eq!(second.expected_answer, first.expected_answer);
}

#[test]
fn test_empty_candidate_set_is_config_error() {
    let level = params(vec![], &["major"], vec![0], false);
    assert!(matches!(
        generate_chord(&level, None, &mut StdRng::seed_from_u64(0)),
        Err(crate::TheoryError::EmptyChoice { what: "roots" })
    ));
}

#[test]
fn test_open_voicing_covers_all_chord_tones() {
    let mut rng = StdRng::seed_from_u64(23);
    for seed_round in 0..100 {
        let ct = &CHORD_TYPES[seed_round % CHORD_TYPES.len()];
        let instance = build_open_chord(5, ct, 4, &mut rng);

        for pair in instance.pitches.windows(2) {
            assert!(pair[0] < pair[1], "{} open voicing not ascending", ct.key);
        }
        for &interval in ct.intervals {
            let pc = ((5 + interval as u32) % 12) as u8;
            assert!(
                instance.pitch_classes().contains(&pc),
                "{} open voicing dropped chord tone at interval {}",
                ct.key,
                interval
            );
        }
        assert_eq!(instance.inversion, 0);
        assert!(!instance.expected_answer.contains('/'));
    }
}

#[test]
fn test_open_voicing_may_double_but_never_invents() {
    let ct = chord_type("major").unwrap();
    let allowed: Vec<u8> = ct.intervals.iter().map(|&i| (5 + i) % 12).collect();

    let mut rng = StdRng::seed_from_u64(91);
    for _ in 0..100 {
        let instance = build_open_chord(5, ct, 4, &mut rng);
        for pc in instance.pitch_classes() {
            assert!(allowed.contains(&pc), "foreign pitch class {} in voicing", pc);
        }
    }
}
