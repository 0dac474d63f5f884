use serde::Serialize;

use super::log_prob::LogProb;

/// One label's share of a [`PosteriorDistribution`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LabelProbability<L> {
	pub label: L,
	pub probability: f64,
	pub log_probability: LogProb,
}

/// Normalized distribution over labels.
///
/// ## Invariants
/// - Every probability is in `[0, 1]` and they sum to 1
/// - Labels keep the order they were given in (training first-seen order)
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PosteriorDistribution<L> {
	entries: Vec<LabelProbability<L>>,
}

impl<L: PartialEq> PosteriorDistribution<L> {
	/// Normalizes unnormalized per-label log scores.
	///
	/// Scores are shifted by their maximum before exponentiation. If every
	/// score is `NegInfinity` the distribution falls back to uniform.
	pub(crate) fn from_log_scores(scores: Vec<(L, LogProb)>) -> Self {
		let max = scores.iter().filter_map(|(_, score)| score.value()).reduce(f64::max);

		let Some(max) = max else {
			let uniform = 1.0 / scores.len().max(1) as f64;
			let entries = scores
				.into_iter()
				.map(|(label, _)| LabelProbability {
					label,
					probability: uniform,
					log_probability: LogProb::from_probability(uniform),
				})
				.collect();
			return Self { entries };
		};

		let shifted: Vec<(L, LogProb)> = scores
			.into_iter()
			.map(|(label, score)| (label, score.shift(max)))
			.collect();
		// The maximum contributes exp(0) = 1, so the sum is at least 1
		let sum: f64 = shifted.iter().map(|(_, score)| score.probability()).sum();
		let log_sum = sum.ln();

		let entries = shifted
			.into_iter()
			.map(|(label, score)| LabelProbability {
				label,
				probability: score.probability() / sum,
				log_probability: score.shift(log_sum),
			})
			.collect();
		Self { entries }
	}

	/// Probability of `label`, 0 for labels outside the distribution.
	pub fn probability(&self, label: &L) -> f64 {
		self.find(label).map_or(0.0, |entry| entry.probability)
	}

	/// Log-probability of `label`, `NegInfinity` for labels outside the distribution.
	pub fn log_probability(&self, label: &L) -> LogProb {
		self.find(label).map_or(LogProb::NegInfinity, |entry| entry.log_probability)
	}

	/// Most probable label; the earliest label wins ties.
	pub fn max(&self) -> Option<&L> {
		let mut best: Option<&LabelProbability<L>> = None;
		for entry in &self.entries {
			if best.is_none_or(|b| entry.probability > b.probability) {
				best = Some(entry);
			}
		}
		best.map(|entry| &entry.label)
	}

	pub fn labels(&self) -> impl Iterator<Item = &L> {
		self.entries.iter().map(|entry| &entry.label)
	}

	pub fn iter(&self) -> impl Iterator<Item = &LabelProbability<L>> {
		self.entries.iter()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	fn find(&self, label: &L) -> Option<&LabelProbability<L>> {
		self.entries.iter().find(|entry| entry.label == *label)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn normalizes_scores_to_one() {
		let posterior = PosteriorDistribution::from_log_scores(vec![
			("pos", LogProb::Finite(-1000.0)),
			("neg", LogProb::Finite(-1001.0)),
		]);

		let total: f64 = posterior.iter().map(|e| e.probability).sum();
		assert!((total - 1.0).abs() < 1e-12);
		assert!(posterior.probability(&"pos") > posterior.probability(&"neg"));
		assert_eq!(posterior.max(), Some(&"pos"));
	}

	#[test]
	fn sentinel_scores_get_zero_mass() {
		let posterior = PosteriorDistribution::from_log_scores(vec![
			("pos", LogProb::NegInfinity),
			("neg", LogProb::Finite(-3.0)),
		]);

		assert_eq!(posterior.probability(&"pos"), 0.0);
		assert_eq!(posterior.probability(&"neg"), 1.0);
		assert_eq!(posterior.log_probability(&"pos"), LogProb::NegInfinity);
		assert_eq!(posterior.log_probability(&"neg"), LogProb::Finite(0.0));
	}

	#[test]
	fn all_sentinels_fall_back_to_uniform() {
		let posterior = PosteriorDistribution::from_log_scores(vec![
			("a", LogProb::NegInfinity),
			("b", LogProb::NegInfinity),
			("c", LogProb::NegInfinity),
			("d", LogProb::NegInfinity),
		]);

		for entry in posterior.iter() {
			assert_eq!(entry.probability, 0.25);
		}
	}

	#[test]
	fn ties_go_to_the_earliest_label() {
		let posterior = PosteriorDistribution::from_log_scores(vec![
			("neg", LogProb::Finite(-2.0)),
			("pos", LogProb::Finite(-2.0)),
		]);

		assert_eq!(posterior.probability(&"neg"), posterior.probability(&"pos"));
		assert_eq!(posterior.max(), Some(&"neg"));
		assert_eq!(posterior.labels().copied().collect::<Vec<_>>(), vec!["neg", "pos"]);
		assert!(!posterior.is_empty());
	}

	#[test]
	fn unknown_labels_have_no_mass() {
		let posterior = PosteriorDistribution::from_log_scores(vec![("pos", LogProb::CERTAIN)]);
		assert_eq!(posterior.probability(&"other"), 0.0);
		assert_eq!(posterior.log_probability(&"other"), LogProb::NegInfinity);
	}
}
