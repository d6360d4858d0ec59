//! # Level Configuration
//!
//! Declarative level files, deserialized from YAML. A level names the
//! candidate sets generation draws from (chord types, roots, inversions,
//! octaves), the voicing mode, and the validation behavior; progression
//! levels add a key and a Roman-numeral pattern.
//!
//! ## Example level
//! ```yaml
//! chord-types: [major, minor, dominant7]
//! roots: [C, D, E, F, G, A, B]
//! inversions: [0, 1, 2]
//! octave-range: [3, 4]
//! validation:
//!   supports-inversions: true
//!   require-inversion-labeling: true
//! ```
//!
//! ## Related Modules
//! - `generate` - Consumes the resolved [`GeneratorParams`]
//! - `progression` - Consumes the optional `progression` section

use serde::Deserialize;

use crate::chords::chord_type;
use crate::error::TheoryError;
use crate::generate::GeneratorParams;
use crate::notes::pitch_class_from_name;
use crate::validate::ValidationSettings;

/// A root candidate: a note name ("F#") or a raw MIDI note number, which
/// is reduced modulo 12.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RootSpec {
    Midi(u8),
    Name(String),
}

/// A progression drill: key plus Roman-numeral pattern.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ProgressionSpec {
    pub key: String,
    pub pattern: Vec<String>,
}

/// One level's generation and validation configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LevelConfig {
    pub chord_types: Vec<String>,
    pub roots: Vec<RootSpec>,
    #[serde(default = "default_inversions")]
    pub inversions: Vec<u8>,
    #[serde(default = "default_octave_range")]
    pub octave_range: Vec<i8>,
    #[serde(default)]
    pub open_voicing: bool,
    #[serde(default)]
    pub validation: ValidationSettings,
    #[serde(default)]
    pub progression: Option<ProgressionSpec>,
}

fn default_inversions() -> Vec<u8> {
    vec![0]
}

fn default_octave_range() -> Vec<i8> {
    vec![4]
}

impl LevelConfig {
    /// Parse a level from YAML source.
    pub fn from_yaml(source: &str) -> Result<Self, TheoryError> {
        serde_yaml::from_str(source).map_err(|e| TheoryError::Config(e.to_string()))
    }

    /// Resolve the level's name-based candidate sets into generator
    /// parameters, validating every referenced chord type and root
    /// against the catalogs.
    pub fn generator_params(&self) -> Result<GeneratorParams, TheoryError> {
        let chord_types = self
            .chord_types
            .iter()
            .map(|key| chord_type(key))
            .collect::<Result<Vec<_>, _>>()?;

        let roots = self
            .roots
            .iter()
            .map(|root| match root {
                RootSpec::Midi(midi) => Ok(midi % 12),
                RootSpec::Name(name) => pitch_class_from_name(name),
            })
            .collect::<Result<Vec<_>, _>>()?;

        // Levels that don't drill inversions stay in root position no
        // matter what the inversion list says.
        let inversions = if self.validation.supports_inversions {
            self.inversions.clone()
        } else {
            vec![0]
        };

        Ok(GeneratorParams {
            roots,
            chord_types,
            inversions,
            octaves: self.octave_range.clone(),
            open_voicing: self.open_voicing,
            require_inversion_labeling: self.validation.require_inversion_labeling,
        })
    }
}
