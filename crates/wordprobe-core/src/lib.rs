//! Core contracts and boundary validation for wordprobe.
//!
//! This crate defines the canonical profile document, the sanitizer
//! applied to every personal fact, and the validation performed once at
//! the boundary before a profile reaches the generation pipeline.

pub mod error;
pub mod profile;
pub mod sanitize;
pub mod validation;

pub use error::{Result, ValidationError};
pub use profile::{Profile, YearValue};
pub use sanitize::sanitize;
pub use validation::{AUTH_PHRASE, validate_profile};
