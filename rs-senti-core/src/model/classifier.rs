//! Posterior computation over a trained [`NaiveBayesModel`].
//!
//! Bayes' rule gives
//!
//! ```text
//!                      P(label) * P(features | label)
//! P(label | features) = ------------------------------
//!                               P(features)
//! ```
//!
//! and the naive independence assumption splits `P(features | label)` into
//! `P(f1 | label) * ... * P(fn | label)`. `P(features)` is never computed:
//! each label's numerator is evaluated in the log domain and the results are
//! normalized so they sum to one.

use std::fmt;
use std::hash::Hash;

use crate::error::{Result, SentimentError};
use crate::probability::log_prob::LogProb;
use crate::probability::posterior::PosteriorDistribution;

use super::diagnostics::{DiagnosticSink, LogSink, ModelDefect};
use super::naive_bayes::NaiveBayesModel;
use super::sample::{FeatureSet, Sample};
use super::trainer::Trainer;

/// Scores `features` against `model`, reporting model defects to `LogSink`.
///
/// # Errors
/// `UntrainedModel` if the model has no labels.
pub fn classify<L, V>(model: &NaiveBayesModel<L, V>, features: &FeatureSet<V>) -> Result<PosteriorDistribution<L>>
where
	L: Eq + Hash + Clone + fmt::Debug,
	V: Eq + Hash + Clone,
{
	prob_classify_with(model, features, &LogSink)
}

/// Scores `features` against `model`, reporting model defects to `sink`.
///
/// - Feature names no label was trained on are ignored, not penalized.
/// - Values never observed for a `(label, feature)` pair get the smoothed
///   mass of an unobserved bin.
/// - A missing `(label, feature)` estimator is reported and scores that
///   label with a zero-probability term.
///
/// # Errors
/// `UntrainedModel` if the model has no labels.
pub fn prob_classify_with<L, V>(
	model: &NaiveBayesModel<L, V>,
	features: &FeatureSet<V>,
	sink: &dyn DiagnosticSink,
) -> Result<PosteriorDistribution<L>>
where
	L: Eq + Hash + Clone + fmt::Debug,
	V: Eq + Hash + Clone,
{
	if model.labels().is_empty() {
		return Err(SentimentError::UntrainedModel);
	}

	// Working copy of the known features, in a fixed order
	let mut known: Vec<(&str, Sample<V>)> = features
		.iter()
		.filter(|(name, _)| model.knows_feature(name))
		.map(|(name, value)| (name.as_str(), Sample::Value(value.clone())))
		.collect();
	known.sort_unstable_by(|a, b| a.0.cmp(b.0));

	let scores = model
		.labels()
		.iter()
		.map(|label| {
			// Feature terms are summed on their own, then added to the prior
			let mut evidence = LogProb::CERTAIN;
			for (name, value) in &known {
				let term = match model.conditional(label, name) {
					Some(estimator) => estimator.log_probability(value),
					None => {
						sink.report(&ModelDefect::MissingConditional { label, feature: name });
						LogProb::NegInfinity
					}
				};
				evidence = evidence + term;
			}
			let prior = model.label_estimator().log_probability(label);
			(label.clone(), prior + evidence)
		})
		.collect();

	Ok(PosteriorDistribution::from_log_scores(scores))
}

/// Owns a trained model and the sink its defects are reported to.
///
/// Read-only after construction: any number of threads may classify through
/// a shared reference. Retraining means building a new `Classifier`.
pub struct Classifier<L, V = bool> {
	model: NaiveBayesModel<L, V>,
	sink: Box<dyn DiagnosticSink>,
}

impl<L, V> Classifier<L, V>
where
	L: Eq + Hash + Clone + fmt::Debug,
	V: Eq + Hash + Clone,
{
	/// Wraps `model`, logging defects through `log`.
	pub fn new(model: NaiveBayesModel<L, V>) -> Self {
		Self::with_sink(model, LogSink)
	}

	pub fn with_sink<S: DiagnosticSink + 'static>(model: NaiveBayesModel<L, V>, sink: S) -> Self {
		Self { model, sink: Box::new(sink) }
	}

	/// Trains a model on `examples` and wraps it.
	///
	/// # Errors
	/// `EmptyTrainingSet` if `examples` yields nothing.
	pub fn train<I>(examples: I) -> Result<Self>
	where
		I: IntoIterator<Item = (FeatureSet<V>, L)>,
	{
		let mut trainer = Trainer::new();
		for (features, label) in examples {
			trainer.add_example(&features, label);
		}
		Ok(Self::new(trainer.finish()?))
	}

	pub fn model(&self) -> &NaiveBayesModel<L, V> {
		&self.model
	}

	pub fn labels(&self) -> &[L] {
		self.model.labels()
	}

	/// Posterior distribution over labels for `features`.
	///
	/// # Errors
	/// `UntrainedModel` if the model has no labels.
	pub fn prob_classify(&self, features: &FeatureSet<V>) -> Result<PosteriorDistribution<L>> {
		prob_classify_with(&self.model, features, self.sink.as_ref())
	}

	/// Most probable label for `features`.
	///
	/// # Errors
	/// `UntrainedModel` if the model has no labels.
	pub fn classify(&self, features: &FeatureSet<V>) -> Result<L> {
		self.prob_classify(features)?
			.max()
			.cloned()
			.ok_or(SentimentError::UntrainedModel)
	}
}

impl<L: fmt::Debug, V: fmt::Debug> fmt::Debug for Classifier<L, V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Classifier").field("model", &self.model).finish_non_exhaustive()
	}
}
