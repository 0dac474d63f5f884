use std::collections::HashSet;

use crate::model::sample::FeatureSet;
use crate::probability::freq_dist::FrequencyDistribution;

/// Bag-of-words presence features: every token maps to `true`.
pub fn extract_features<S: AsRef<str>>(document: &[S]) -> FeatureSet {
	document
		.iter()
		.map(|token| (token.as_ref().to_owned(), true))
		.collect()
}

/// Every token of a corpus, most frequent first (first-seen order on ties).
pub fn vocabulary<S: AsRef<str>>(documents: &[Vec<S>]) -> Vec<String> {
	let mut freq = FrequencyDistribution::new();
	for document in documents {
		for token in document {
			freq.inc(token.as_ref().to_owned());
		}
	}
	freq.most_common().into_iter().map(|(token, _)| token.clone()).collect()
}

/// Closed-vocabulary features: one entry per vocabulary word, `true` iff the
/// word occurs in `document`. Tokens outside the vocabulary are dropped.
pub fn extract_vocabulary_features<S, W>(document: &[S], vocabulary: &[W]) -> FeatureSet
where
	S: AsRef<str>,
	W: AsRef<str>,
{
	let present: HashSet<&str> = document.iter().map(|token| token.as_ref()).collect();
	vocabulary
		.iter()
		.map(|word| {
			let word = word.as_ref();
			(word.to_owned(), present.contains(word))
		})
		.collect()
}
