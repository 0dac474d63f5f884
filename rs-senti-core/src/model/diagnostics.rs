use std::fmt;

/// Inconsistencies detected in a trained model while classifying.
///
/// None of these abort classification; they are reported and the affected
/// label is scored with a zero-probability contribution.
#[derive(Debug)]
pub enum ModelDefect<'a> {
	/// A `(label, feature)` pair that training should have produced is missing.
	MissingConditional {
		label: &'a dyn fmt::Debug,
		feature: &'a str,
	},
}

impl fmt::Display for ModelDefect<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ModelDefect::MissingConditional { label, feature } => write!(
				f,
				"no conditional distribution for label {label:?} and feature {feature:?}"
			),
		}
	}
}

/// Receives model defects found during classification.
pub trait DiagnosticSink: Send + Sync {
	fn report(&self, defect: &ModelDefect<'_>);
}

/// Default sink, forwards every defect to `log::warn!`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
	fn report(&self, defect: &ModelDefect<'_>) {
		log::warn!("inconsistent model: {defect}");
	}
}

impl<F> DiagnosticSink for F
where
	F: Fn(&ModelDefect<'_>) + Send + Sync,
{
	fn report(&self, defect: &ModelDefect<'_>) {
		self(defect)
	}
}
