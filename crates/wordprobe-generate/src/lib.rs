//! Candidate-generation pipeline for wordprobe.
//!
//! Consumes a profile of personal facts and produces a bounded,
//! deterministic list of watermarked password-like candidates through a
//! fixed chain of lexical transforms.

pub mod accumulator;
pub mod engine;
pub mod facts;
pub mod model;
pub mod tokens;
pub mod transforms;

pub use engine::Generator;
pub use model::GenerateOptions;

/// Literal suffix carried by every emitted candidate, marking it as
/// synthetically generated for awareness training. Downstream tooling
/// must never strip it.
pub const WATERMARK: &str = "--EDU";

/// Hard ceiling on the number of candidates a single call may emit.
pub const MAX_OUTPUT: usize = 5000;
