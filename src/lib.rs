//! PROMETHEE Gamma - Threshold elicitation engine
//!
//! This crate computes the feasible ranges of the indifference threshold I,
//! the incomparability threshold J and the preference parameter P of the
//! PROMETHEE Gamma outranking method, as pairwise answers from a
//! decision-maker narrow them down.

pub mod application;
pub mod config;
pub mod domain;
