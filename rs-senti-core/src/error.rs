use std::io;

use thiserror::Error;

/// Failures surfaced by training, classification and training-data I/O.
///
/// A missing conditional distribution is deliberately absent: it is a model
/// defect reported through a [`DiagnosticSink`](crate::model::diagnostics::DiagnosticSink),
/// never an error returned to the caller.
#[derive(Error, Debug)]
pub enum SentimentError {
	/// Training was called without examples, or without any label.
	#[error("training set is empty or carries no labels")]
	EmptyTrainingSet,

	/// Classification was attempted against a model with zero labels.
	#[error("model has no labels to classify against")]
	UntrainedModel,

	/// An estimator was declared over an empty bin space.
	#[error("a probability estimator needs at least one bin")]
	NoBins,

	/// Declared bins are fewer than the values actually observed.
	#[error("estimator declared {bins} bins but observed {observed} distinct values")]
	InvalidBins { bins: usize, observed: usize },

	/// Smoothing constant is negative or not finite.
	#[error("smoothing constant must be finite and non-negative, got {0}")]
	InvalidGamma(f64),

	#[error("failed to read training data: {0}")]
	Io(#[from] io::Error),

	#[error("malformed training data: {0}")]
	Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SentimentError>;
