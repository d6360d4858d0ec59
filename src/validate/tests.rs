use super::*;
use crate::chords::CHORD_TYPES;
use crate::generate::build_chord;
use crate::progression::generate_progression;

fn settings(require_inversion_labeling: bool) -> ValidationSettings {
    ValidationSettings {
        supports_inversions: true,
        require_inversion_labeling,
    }
}

fn check(user: &str, expected: &str, s: &ValidationSettings) -> bool {
    validate_chord_answer(user, expected, s).unwrap()
}

#[test]
fn test_canonicalize_substitutions() {
    assert_eq!(canonicalize("  C  Maj "), "cmaj");
    assert_eq!(canonicalize("B♭m"), "bbm");
    assert_eq!(canonicalize("F♯"), "f#");
    assert_eq!(canonicalize("B°"), "bdim");
    assert_eq!(canonicalize("Cº7"), "cdim7");
    assert_eq!(canonicalize("C–"), "c-");
}

#[test]
fn test_case_space_and_synonym_insensitivity() {
    let s = settings(false);
    assert!(check("c maj", "C", &s));
    assert!(check("C major", "C", &s));
    assert!(check("C", "C", &s));
    assert!(check("dm", "Dm", &s));
    assert!(check("D min", "Dm", &s));
    assert!(check("d-", "Dm", &s));
    assert!(check("Baug", "Baug", &s));
    assert!(check("B+", "Baug", &s));
    assert!(check("F dim", "Fdim", &s));
    assert!(check("F°", "Fdim", &s));
}

#[test]
fn test_wrong_quality_rejected() {
    let s = settings(false);
    assert!(!check("Cm", "C", &s));
    assert!(!check("C", "Cm", &s));
    assert!(!check("Cdim", "Caug", &s));
    assert!(!check("Cmaj7", "C7", &s));
}

#[test]
fn test_enharmonic_equivalence() {
    let s = settings(false);
    assert!(check("C#", "C#", &s));
    assert!(check("Db", "C#", &s));
    assert!(check("DbMaj", "C#", &s));
    assert!(check("G#m", "Abm", &s));
    // swap must land on the actual pitch class, not any accidental
    assert!(!check("Eb", "C#", &s));
}

#[test]
fn test_seventh_synonyms() {
    let s = settings(false);
    assert!(check("Am7", "Am7", &s));
    assert!(check("A min7", "Am7", &s));
    assert!(check("A-7", "Am7", &s));
    assert!(check("Gdom7", "G7", &s));
    assert!(check("Bm7b5", "Bm7b5", &s));
    assert!(check("Bø7", "Bm7b5", &s));
}

#[test]
fn test_inversion_labeling_not_required() {
    // Root-position-equivalent acceptance: the suffix is simply absent
    // from the expected text.
    let s = settings(false);
    assert!(check("C", "C", &s));
    assert!(!check("C/1", "C", &s));
}

#[test]
fn test_inversion_label_forms() {
    let s = settings(true);
    assert!(check("C/1", "C/1", &s));
    assert!(check("c / 1", "C/1", &s));
    assert!(check("C/first", "C/1", &s));
    assert!(check("C first inversion", "C/1", &s));
    assert!(check("C 1st inversion", "C/1", &s));
    assert!(check("C/2", "C/2", &s));
    assert!(check("C second inversion", "C/2", &s));
    // the bare root no longer suffices when labeling is required
    assert!(!check("C", "C/1", &s));
    assert!(!check("C/2", "C/1", &s));
}

#[test]
fn test_slash_chord_bass_notation() {
    let s = settings(true);
    // first inversion of C major has E in the bass
    assert!(check("C/E", "C/1", &s));
    // second inversion has G in the bass
    assert!(check("C/G", "C/2", &s));
    assert!(!check("C/E", "C/2", &s));
    // bass of the first inversion of F#m is A
    assert!(check("F#m/A", "F#m/1", &s));
}

#[test]
fn test_reflexive_over_catalog() {
    // validate(expected, expected) holds for every quality and every
    // inversion state, labeled or not.
    for ct in CHORD_TYPES {
        for inversion in 0..ct.intervals.len() as u8 {
            for require_labeling in [false, true] {
                let instance = build_chord(7, ct, inversion, 4, require_labeling);
                let s = settings(require_labeling);
                assert!(
                    check(&instance.expected_answer, &instance.expected_answer, &s),
                    "not reflexive for {} inversion {} (labeling={})",
                    ct.key,
                    inversion,
                    require_labeling
                );
            }
        }
    }
}

#[test]
fn test_unparseable_expected_is_config_error() {
    assert!(validate_chord_answer("C", "", &settings(false)).is_err());
    assert!(validate_chord_answer("C", "Xyz", &settings(false)).is_err());
    assert!(validate_chord_answer("C", "Cmajj", &settings(false)).is_err());
}

fn pattern(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_transcription_exact_match() {
    let progression = generate_progression("C", &pattern(&["I", "IV"]), 4, false).unwrap();
    let result = validate_transcription(
        &progression.all_pitches,
        &progression,
        &TranscriptionOptions::default(),
    );
    assert!(result.is_correct);
    assert_eq!(result.score, 100);
    assert_eq!(result.correct_count, 6);
    assert!(result.missing.is_empty());
    assert!(result.extra.is_empty());
}

#[test]
fn test_transcription_order_within_chord_is_free() {
    let progression = generate_progression("C", &pattern(&["I"]), 4, false).unwrap();
    let mut shuffled = progression.all_pitches.clone();
    shuffled.reverse();
    let result =
        validate_transcription(&shuffled, &progression, &TranscriptionOptions::default());
    assert!(result.is_correct);
}

#[test]
fn test_right_pitches_wrong_chord_fails() {
    // Two chords with disjoint pitch-class sets: transcribing the first
    // chord twice supplies the right notes for the wrong chord and must
    // fail, because all_pitches is a multiset.
    let progression = generate_progression("C", &pattern(&["I", "ii"]), 4, false).unwrap();
    let first_chord = &progression.chords[0].pitches;
    let doubled: Vec<u8> = first_chord
        .iter()
        .chain(first_chord.iter())
        .copied()
        .collect();

    let result = validate_transcription(&doubled, &progression, &TranscriptionOptions::default());
    assert!(!result.is_correct);
    assert_eq!(result.missing.len(), 3);
    assert_eq!(result.extra.len(), 3);
}

#[test]
fn test_transcription_octave_tolerance() {
    let progression = generate_progression("C", &pattern(&["I", "V"]), 4, false).unwrap();
    let shifted: Vec<u8> = progression.all_pitches.iter().map(|p| p + 12).collect();

    let strict =
        validate_transcription(&shifted, &progression, &TranscriptionOptions::default());
    assert!(!strict.is_correct);

    let tolerant = validate_transcription(
        &shifted,
        &progression,
        &TranscriptionOptions {
            octave_tolerant: true,
        },
    );
    assert!(tolerant.is_correct);
    assert_eq!(tolerant.score, 100);
}

#[test]
fn test_transcription_partial_credit_score() {
    // 6 expected notes; user hits 5 and adds 1 stray:
    // accuracy 5/6 -> 83.33, penalty 10*(1 wrong + 1 missing) = 20,
    // score = round(63.33) = 63
    let progression = generate_progression("C", &pattern(&["I", "IV"]), 4, false).unwrap();
    let mut placed = progression.all_pitches.clone();
    let dropped = placed.pop().unwrap();
    placed.push(dropped.wrapping_add(1));

    let result = validate_transcription(&placed, &progression, &TranscriptionOptions::default());
    assert!(!result.is_correct);
    assert_eq!(result.correct_count, 5);
    assert_eq!(result.wrong_count, 1);
    assert_eq!(result.missing.len(), 1);
    assert_eq!(result.score, 63);
}

#[test]
fn test_transcription_score_floors_at_zero() {
    let progression = generate_progression("C", &pattern(&["I"]), 4, false).unwrap();
    let result = validate_transcription(&[30, 31, 32], &progression, &TranscriptionOptions::default());
    assert!(!result.is_correct);
    assert_eq!(result.score, 0);
}
