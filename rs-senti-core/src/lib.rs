//! Naive Bayes sentiment scoring library.
//!
//! This crate provides a small supervised classifier for short texts:
//! - Frequency counting and Lidstone / ELE smoothed estimators
//! - A Naive Bayes trainer that balances per-label feature counts
//! - A log-domain classifier producing normalized posterior distributions
//! - Text normalization and bag-of-words feature extraction
//! - A sentiment facade trained from JSON training data
//!
//! The core entry points are [`train`] and [`classify`]; everything else is
//! glue feeding them feature sets or consuming their posteriors.

/// Frequency distributions, estimators, log-probabilities and posteriors.
pub mod probability;

/// Naive Bayes model, trainer and classifier.
pub mod model;

/// Text normalization into tokens.
pub mod text;

/// Token lists to feature sets.
pub mod features;

/// Training data persistence and file helpers.
pub mod io;

/// Positive / negative classifier over raw text.
pub mod sentiment;

/// Crate-wide error type.
pub mod error;

pub use error::{Result, SentimentError};
pub use model::classifier::{Classifier, classify, prob_classify_with};
pub use model::diagnostics::{DiagnosticSink, LogSink, ModelDefect};
pub use model::naive_bayes::NaiveBayesModel;
pub use model::sample::{FeatureSet, Sample};
pub use model::trainer::{Trainer, train};
pub use probability::log_prob::LogProb;
pub use probability::posterior::PosteriorDistribution;
pub use sentiment::{Guess, Polarity, SentimentClassifier};
