//! Award rule engine: filtering, matching, and tier accumulation.

/// Batch calculation over a parsed log.
pub mod calc;
/// Configuration surface and fixed historical constants.
pub mod config;
/// Pure qualification and filter rules.
pub mod rules;
