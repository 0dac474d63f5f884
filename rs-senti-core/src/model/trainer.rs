use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::error::{Result, SentimentError};
use crate::probability::estimator::{ELE_GAMMA, ProbabilityEstimator};
use crate::probability::freq_dist::FrequencyDistribution;

use super::naive_bayes::NaiveBayesModel;
use super::sample::{FeatureSet, Sample};

/// Accumulates labeled feature sets and turns them into a [`NaiveBayesModel`].
///
/// Training is a full rebuild: examples are counted, then [`finish`](Self::finish)
/// consumes the trainer and produces an immutable model. There is no way to
/// feed more examples into an existing model.
///
/// ## Responsibilities
/// - Count labels and `(label, feature, value)` co-occurrences
/// - Track every value each feature name takes across the dataset
/// - Balance each label's feature counts with the `Unseen` marker
#[derive(Clone, Debug)]
pub struct Trainer<L, V = bool> {
	gamma: f64,
	label_freq: FrequencyDistribution<L>,
	/// `label -> feature name -> value counts`
	feature_freq: HashMap<L, HashMap<String, FrequencyDistribution<Sample<V>>>>,
	/// `feature name -> every value it was seen with`
	feature_values: HashMap<String, HashSet<Sample<V>>>,
}

impl<L, V> Trainer<L, V>
where
	L: Eq + Hash + Clone,
	V: Eq + Hash + Clone,
{
	/// Creates a trainer smoothing with the Expected-Likelihood Estimate.
	pub fn new() -> Self {
		Self {
			gamma: ELE_GAMMA,
			label_freq: FrequencyDistribution::new(),
			feature_freq: HashMap::new(),
			feature_values: HashMap::new(),
		}
	}

	/// Sets the Lidstone smoothing constant used by every estimator.
	///
	/// Validated when the estimators are built in [`finish`](Self::finish).
	pub fn with_gamma(mut self, gamma: f64) -> Self {
		self.gamma = gamma;
		self
	}

	/// Counts one labeled example.
	pub fn add_example(&mut self, features: &FeatureSet<V>, label: L) {
		let label_features = self.feature_freq.entry(label.clone()).or_default();
		for (name, value) in features {
			label_features
				.entry(name.clone())
				.or_default()
				.inc(Sample::Value(value.clone()));
			self.feature_values
				.entry(name.clone())
				.or_default()
				.insert(Sample::Value(value.clone()));
		}
		self.label_freq.inc(label);
	}

	/// Number of examples counted so far.
	pub fn example_count(&self) -> u64 {
		self.label_freq.total()
	}

	/// Builds the model.
	///
	/// # Errors
	/// - `EmptyTrainingSet` if no example was added
	/// - `InvalidGamma` if the smoothing constant is unusable
	pub fn finish(mut self) -> Result<NaiveBayesModel<L, V>> {
		if self.label_freq.is_empty() {
			return Err(SentimentError::EmptyTrainingSet);
		}

		self.balance();

		let label_estimator = ProbabilityEstimator::lidstone(self.label_freq, self.gamma, None)?;

		let mut conditionals = HashMap::with_capacity(self.feature_freq.len());
		for (label, features) in self.feature_freq {
			let mut estimators = HashMap::with_capacity(features.len());
			for (name, freq) in features {
				let bins = self.feature_values.get(&name).map_or(0, HashSet::len);
				let estimator = ProbabilityEstimator::lidstone(freq, self.gamma, Some(bins))?;
				estimators.insert(name, estimator);
			}
			conditionals.insert(label, estimators);
		}

		let model = NaiveBayesModel::new(label_estimator, conditionals);
		log::debug!(
			"trained naive bayes model: {} labels, {} feature names",
			model.labels().len(),
			model.feature_count()
		);
		Ok(model)
	}

	/// Pads every `(label, feature)` count with `Unseen` up to the label's
	/// example count, so each conditional covers the same sample size as the
	/// label prior. Features never seen with a label still get a distribution.
	fn balance(&mut self) {
		for (label, label_count) in self.label_freq.iter() {
			let label_features = self.feature_freq.entry(label.clone()).or_default();
			for (name, values) in self.feature_values.iter_mut() {
				let freq = label_features.entry(name.clone()).or_default();
				let missing = label_count.saturating_sub(freq.total());
				if missing > 0 {
					freq.increment(Sample::Unseen, missing);
					values.insert(Sample::Unseen);
				}
			}
		}
	}
}

impl<L, V> Default for Trainer<L, V>
where
	L: Eq + Hash + Clone,
	V: Eq + Hash + Clone,
{
	fn default() -> Self {
		Self::new()
	}
}

/// Trains a model from `(feature set, label)` pairs with ELE smoothing.
///
/// # Errors
/// `EmptyTrainingSet` if `examples` yields nothing.
pub fn train<L, V, I>(examples: I) -> Result<NaiveBayesModel<L, V>>
where
	L: Eq + Hash + Clone,
	V: Eq + Hash + Clone,
	I: IntoIterator<Item = (FeatureSet<V>, L)>,
{
	let mut trainer = Trainer::new();
	for (features, label) in examples {
		trainer.add_example(&features, label);
	}
	trainer.finish()
}
