pub mod chords;
pub mod config;
pub mod error;
pub mod generate;
pub mod keys;
pub mod notes;
pub mod progression;
pub mod roman;
pub mod validate;

pub use chords::{chord_type, ChordType, CHORD_TYPES};
pub use config::{LevelConfig, ProgressionSpec, RootSpec};
pub use error::TheoryError;
pub use generate::{generate_chord, ChordInstance, GeneratorParams};
pub use keys::{KeySignature, Mode};
pub use progression::{generate_progression, Progression};
pub use roman::{resolve_numeral, ResolvedChord};
pub use validate::{
    validate_chord_answer, validate_transcription, TranscriptionOptions, ValidationResult,
    ValidationSettings,
};

use rand::Rng;

/// Generate one chord drill from a level configuration.
/// This is the main entry point for chord-identification levels.
pub fn generate_from_level<R: Rng>(
    level: &LevelConfig,
    previous: Option<&ChordInstance>,
    rng: &mut R,
) -> Result<ChordInstance, TheoryError> {
    let params = level.generator_params()?;
    generate_chord(&params, previous, rng)
}

/// Generate the progression drill a level configures, if any.
pub fn generate_progression_from_level(
    level: &LevelConfig,
) -> Result<Option<Progression>, TheoryError> {
    let Some(spec) = &level.progression else {
        return Ok(None);
    };
    let octave = level.octave_range.first().copied().unwrap_or(4);
    let progression = generate_progression(
        &spec.key,
        &spec.pattern,
        octave,
        level.validation.require_inversion_labeling,
    )?;
    Ok(Some(progression))
}
