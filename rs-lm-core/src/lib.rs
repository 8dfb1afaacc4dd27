//! Character-level Markov text model.
//!
//! This crate provides a fixed-order character language model including:
//! - Context-to-distribution learning over a sliding character window
//! - Cumulative-probability finalization of every observed distribution
//! - Reproducible (seeded) or entropy-seeded text generation
//! - A small character-stream abstraction for feeding corpora
//!
//! The model internals (distributions, counts) are readable through the
//! public API but can only be mutated through training.

/// Language model, distributions and configuration.
pub mod model;

/// Character streams used as training input (in-memory text, files, iterators).
pub mod io;
