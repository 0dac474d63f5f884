//! Frequency counting and smoothed probability estimation.
//!
//! Everything here is generic over the counted value and carries no state
//! beyond its own counts, so identical inputs always give identical numbers.

/// Occurrence counts per discrete value.
pub mod freq_dist;

/// Lidstone / Expected-Likelihood smoothing over a frequency distribution.
pub mod estimator;

/// Log-domain probabilities with an explicit negative-infinity sentinel.
pub mod log_prob;

/// Normalized label distribution produced by classification.
pub mod posterior;
