//! # Error Types
//!
//! This module defines all error types for the chordwise engine.
//!
//! Every variant is a *configuration* error: a level file or progression
//! pattern referencing a chord type, key, numeral, or root the engine does
//! not know. None of these are retried; a misconfigured level is a content
//! bug, and the caller should treat the error as fatal for that level.
//!
//! Degraded conditions are deliberately NOT errors:
//! - Range exhaustion (a pitch set wider than the allowed window) returns a
//!   best-effort out-of-window result and logs a warning.
//! - Duplicate-retry exhaustion silently accepts a repeat of the previous
//!   chord after the attempt cap.
//!
//! ## Usage
//! ```rust
//! use chordwise::{chord_type, TheoryError};
//!
//! match chord_type("majj") {
//!     Ok(ct) => println!("{}", ct.display_name),
//!     Err(TheoryError::UnknownChordType { key }) => {
//!         eprintln!("level references unknown chord type: {}", key);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TheoryError {
    /// A chord-type key absent from the catalog.
    ///
    /// # Example
    /// ```
    /// # use chordwise::TheoryError;
    /// let err = TheoryError::UnknownChordType { key: "majj".to_string() };
    /// assert_eq!(err.to_string(), "Unknown chord type: majj");
    /// ```
    #[error("Unknown chord type: {key}")]
    UnknownChordType { key: String },

    /// A key-signature name the key table cannot parse (e.g. "H", "Xm").
    #[error("Unknown key signature: {name}")]
    UnknownKey { name: String },

    /// A Roman-numeral token absent from the mode's mapping table.
    ///
    /// # Example
    /// ```
    /// # use chordwise::{TheoryError, Mode};
    /// let err = TheoryError::UnknownNumeral {
    ///     token: "IX".to_string(),
    ///     mode: Mode::Major,
    /// };
    /// assert_eq!(err.to_string(), "Unknown Roman numeral 'IX' for major keys");
    /// ```
    #[error("Unknown Roman numeral '{token}' for {mode} keys")]
    UnknownNumeral { token: String, mode: crate::keys::Mode },

    /// A root note name the note table cannot parse.
    #[error("Unknown root note: {name}")]
    UnknownRoot { name: String },

    /// A level offered an empty candidate set (no roots, qualities,
    /// inversions, or octaves to choose from).
    #[error("Level offers no {what} to choose from")]
    EmptyChoice { what: &'static str },

    /// Malformed level configuration (invalid YAML or an unparseable
    /// expected-answer string).
    #[error("Invalid level configuration: {0}")]
    Config(String),
}
