//! The Naive Bayes model, its trainer and its classifier.
//!
//! Data flows one way: `Trainer` -> `NaiveBayesModel` -> `Classifier`.
//! A model is immutable once trained; retraining builds a new one.

/// Feature sets and the reserved `Unseen` value marker.
pub mod sample;

/// Immutable container for the label prior and per-label conditionals.
pub mod naive_bayes;

/// Counting, balancing and estimator construction.
pub mod trainer;

/// Log-domain posterior computation and the `Classifier` wrapper.
pub mod classifier;

/// Reporting of model defects found while classifying.
pub mod diagnostics;
