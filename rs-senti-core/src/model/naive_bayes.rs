use std::collections::HashMap;
use std::hash::Hash;

use crate::probability::estimator::ProbabilityEstimator;

use super::sample::Sample;

/// A trained Naive Bayes model.
///
/// The model is parameterized by two kinds of distributions:
/// - `P(label)`: how likely a document is to carry each label, ignoring its features
/// - `P(feature = value | label)`: how likely a feature takes a value given the label
///
/// # Invariants
/// - `labels` lists every observed label once, in first-seen training order
/// - After training, every `(label, feature)` pair has a conditional estimator
/// - Nothing is mutated after construction; share it freely across threads
#[derive(Clone, Debug)]
pub struct NaiveBayesModel<L, V = bool> {
	labels: Vec<L>,
	label_estimator: ProbabilityEstimator<L>,
	/// `label -> feature name -> P(value | label, feature)`
	conditionals: HashMap<L, HashMap<String, ProbabilityEstimator<Sample<V>>>>,
}

impl<L, V> NaiveBayesModel<L, V>
where
	L: Eq + Hash + Clone,
	V: Eq + Hash + Clone,
{
	/// Assembles a model from its distributions.
	///
	/// The label order is taken from the prior's first-seen order. Usually
	/// built by [`Trainer`](super::trainer::Trainer); hand-built models are
	/// not checked for missing conditionals.
	pub fn new(
		label_estimator: ProbabilityEstimator<L>,
		conditionals: HashMap<L, HashMap<String, ProbabilityEstimator<Sample<V>>>>,
	) -> Self {
		let labels = label_estimator.samples().cloned().collect();
		Self { labels, label_estimator, conditionals }
	}

	pub fn labels(&self) -> &[L] {
		&self.labels
	}

	/// The `P(label)` distribution.
	pub fn label_estimator(&self) -> &ProbabilityEstimator<L> {
		&self.label_estimator
	}

	/// The `P(value | label, feature)` distribution, if the pair was trained.
	pub fn conditional(&self, label: &L, feature: &str) -> Option<&ProbabilityEstimator<Sample<V>>> {
		self.conditionals.get(label)?.get(feature)
	}

	/// Whether any label has a distribution for `feature`.
	pub fn knows_feature(&self, feature: &str) -> bool {
		self.conditionals.values().any(|features| features.contains_key(feature))
	}

	/// Number of distinct feature names retained from training.
	pub fn feature_count(&self) -> usize {
		let mut names: Vec<&str> = self
			.conditionals
			.values()
			.flat_map(|features| features.keys().map(String::as_str))
			.collect();
		names.sort_unstable();
		names.dedup();
		names.len()
	}
}
