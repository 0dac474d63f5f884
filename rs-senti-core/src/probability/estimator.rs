use std::hash::Hash;

use crate::error::{Result, SentimentError};

use super::freq_dist::FrequencyDistribution;
use super::log_prob::LogProb;

/// Expected-likelihood increment added to every bin.
pub const ELE_GAMMA: f64 = 0.5;

/// Smoothed, read-only probability view over a [`FrequencyDistribution`].
///
/// Implements the Lidstone estimate
///
/// ```text
/// P(v) = (count(v) + gamma) / (N + gamma * bins)
/// ```
///
/// so any of the declared `bins` keeps a non-zero share of the mass, even
/// when it was never observed. With `gamma = 0.5` this is the
/// Expected-Likelihood Estimate (ELE).
///
/// ## Invariants
/// - `bins >= freq.distinct_count()` and `bins >= 1`
/// - Probabilities over all `bins` sum to 1
#[derive(Clone, Debug)]
pub struct ProbabilityEstimator<T> {
	freq: FrequencyDistribution<T>,
	bins: usize,
	gamma: f64,
	/// Cached `N + gamma * bins`.
	divisor: f64,
}

impl<T: Eq + Hash + Clone> ProbabilityEstimator<T> {
	/// ELE estimator (`gamma = 0.5`).
	///
	/// `bins` defaults to the number of distinct observed values.
	///
	/// # Errors
	/// See [`ProbabilityEstimator::lidstone`].
	pub fn ele(freq: FrequencyDistribution<T>, bins: Option<usize>) -> Result<Self> {
		Self::lidstone(freq, ELE_GAMMA, bins)
	}

	/// Lidstone estimator with an arbitrary smoothing constant.
	///
	/// # Errors
	/// - `InvalidGamma` if `gamma` is negative or not finite
	/// - `NoBins` if the resulting bin space is empty
	/// - `InvalidBins` if `bins` is below the number of observed values
	pub fn lidstone(freq: FrequencyDistribution<T>, gamma: f64, bins: Option<usize>) -> Result<Self> {
		if !gamma.is_finite() || gamma < 0.0 {
			return Err(SentimentError::InvalidGamma(gamma));
		}

		let observed = freq.distinct_count();
		let bins = bins.unwrap_or(observed);
		if bins == 0 {
			return Err(SentimentError::NoBins);
		}
		if bins < observed {
			return Err(SentimentError::InvalidBins { bins, observed });
		}

		let divisor = freq.total() as f64 + gamma * bins as f64;
		if divisor <= 0.0 {
			// gamma = 0 over an empty distribution: nothing to normalize by
			return Err(SentimentError::NoBins);
		}

		Ok(Self { freq, bins, gamma, divisor })
	}

	/// Smoothed probability of `value`.
	///
	/// Values never observed (including declared-but-unseen bins) get
	/// `gamma / (N + gamma * bins)`.
	pub fn probability(&self, value: &T) -> f64 {
		(self.freq.count(value) as f64 + self.gamma) / self.divisor
	}

	/// Natural log of [`probability`](Self::probability), `NegInfinity` when
	/// that probability is zero.
	pub fn log_probability(&self, value: &T) -> LogProb {
		LogProb::from_probability(self.probability(value))
	}

	/// Most probable observed value; first-seen wins ties.
	pub fn max(&self) -> Option<&T> {
		self.freq.most_common().first().map(|(value, _)| *value)
	}

	/// Observed values in first-seen order.
	pub fn samples(&self) -> impl Iterator<Item = &T> {
		self.freq.distinct_values()
	}

	pub fn bins(&self) -> usize {
		self.bins
	}

	pub fn gamma(&self) -> f64 {
		self.gamma
	}

	pub fn freq_dist(&self) -> &FrequencyDistribution<T> {
		&self.freq
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn freq(values: &[&'static str]) -> FrequencyDistribution<&'static str> {
		values.iter().copied().collect()
	}

	#[test]
	fn ele_matches_closed_form() {
		// N = 3, bins = 2, divisor = 3 + 1 = 4
		let estimator = ProbabilityEstimator::ele(freq(&["a", "a", "b"]), None).unwrap();
		assert_eq!(estimator.probability(&"a"), 2.5 / 4.0);
		assert_eq!(estimator.probability(&"b"), 1.5 / 4.0);
	}

	#[test]
	fn declared_but_unseen_bins_keep_mass() {
		// N = 1, bins = 3, divisor = 1 + 1.5 = 2.5
		let estimator = ProbabilityEstimator::ele(freq(&["a"]), Some(3)).unwrap();
		assert_eq!(estimator.probability(&"zzz"), 0.5 / 2.5);

		let total = estimator.probability(&"a") + 2.0 * estimator.probability(&"zzz");
		assert!((total - 1.0).abs() < 1e-12);
	}

	#[test]
	fn log_probability_is_natural_log() {
		let estimator = ProbabilityEstimator::ele(freq(&["a", "b"]), None).unwrap();
		assert_eq!(estimator.log_probability(&"a"), LogProb::Finite(0.5f64.ln()));
	}

	#[test]
	fn maximum_likelihood_yields_sentinel_for_unseen() {
		let estimator = ProbabilityEstimator::lidstone(freq(&["a"]), 0.0, Some(2)).unwrap();
		assert_eq!(estimator.probability(&"a"), 1.0);
		assert_eq!(estimator.log_probability(&"b"), LogProb::NegInfinity);
	}

	#[test]
	fn rejects_empty_bin_space() {
		let result = ProbabilityEstimator::ele(FrequencyDistribution::<&str>::new(), None);
		assert!(matches!(result, Err(SentimentError::NoBins)));
	}

	#[test]
	fn rejects_too_few_bins() {
		let result = ProbabilityEstimator::ele(freq(&["a", "b", "c"]), Some(2));
		assert!(matches!(result, Err(SentimentError::InvalidBins { bins: 2, observed: 3 })));
	}

	#[test]
	fn rejects_negative_gamma() {
		let result = ProbabilityEstimator::lidstone(freq(&["a"]), -0.1, None);
		assert!(matches!(result, Err(SentimentError::InvalidGamma(_))));
	}

	#[test]
	fn max_prefers_first_seen_on_ties() {
		let estimator = ProbabilityEstimator::ele(freq(&["b", "a", "a", "b"]), None).unwrap();
		assert_eq!(estimator.max(), Some(&"b"));
	}

	#[test]
	fn identical_counts_give_identical_probabilities() {
		let first = ProbabilityEstimator::ele(freq(&["a", "b", "b"]), Some(4)).unwrap();
		let second = ProbabilityEstimator::ele(freq(&["b", "a", "b"]), Some(4)).unwrap();
		assert_eq!(first.probability(&"a").to_bits(), second.probability(&"a").to_bits());
		assert_eq!(first.probability(&"b").to_bits(), second.probability(&"b").to_bits());
	}
}
