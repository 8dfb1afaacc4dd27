//! Top-level module for the character language model.
//!
//! This module provides:
//! - The fixed-order model itself (`LanguageModel`)
//! - Per-context next-character distributions (`CharDistribution`)
//! - Per-character statistics (`CharCount`)
//! - Construction parameters (`ModelConfig`)

/// Fixed-order character model.
///
/// Handles corpus ingestion through a sliding window, probability
/// finalization, and seeded or unseeded text generation.
pub mod language_model;

/// Ordered next-character distribution of a single context.
///
/// Tracks observed characters in first-seen order and supports
/// inverse-CDF sampling over cumulative probabilities.
pub mod char_distribution;

/// Occurrence count and derived probabilities of one character.
pub mod char_count;

/// Model construction parameters (window length, seeding strategy).
pub mod model_config;
