//! Property-based invariants of training and classification.
//!
//! Verifies:
//! 1. The label prior sums to 1 over the trained labels
//! 2. Posteriors are non-negative and sum to 1 for arbitrary inputs
//! 3. Classifying the same input twice is bit-identical
//! 4. Inputs made only of unknown features reproduce the label prior
//! 5. Every conditional covers exactly as many examples as its label

use proptest::prelude::*;
use rs_senti_core::{FeatureSet, NaiveBayesModel, classify, train};

// ── Strategy helpers ──────────────────────────────────────────────────

fn arb_features() -> impl Strategy<Value = FeatureSet> {
	prop::collection::hash_map("[a-f]{1,2}", any::<bool>(), 0..6)
}

fn arb_label() -> impl Strategy<Value = String> {
	prop_oneof![Just("pos".to_owned()), Just("neg".to_owned()), Just("meh".to_owned())]
}

fn arb_examples() -> impl Strategy<Value = Vec<(FeatureSet, String)>> {
	prop::collection::vec((arb_features(), arb_label()), 1..20)
}

fn trained(examples: Vec<(FeatureSet, String)>) -> NaiveBayesModel<String> {
	train(examples).expect("non-empty training set")
}

proptest! {
	#[test]
	fn label_prior_sums_to_one(examples in arb_examples()) {
		let model = trained(examples);
		let total: f64 = model
			.labels()
			.iter()
			.map(|label| model.label_estimator().probability(label))
			.sum();
		prop_assert!((total - 1.0).abs() < 1e-9, "prior sums to {}", total);
	}

	#[test]
	fn posterior_is_a_distribution(examples in arb_examples(), query in arb_features()) {
		let model = trained(examples);
		let posterior = classify(&model, &query).unwrap();

		prop_assert_eq!(posterior.len(), model.labels().len());
		let mut total = 0.0;
		for entry in posterior.iter() {
			prop_assert!(entry.probability >= 0.0);
			total += entry.probability;
		}
		prop_assert!((total - 1.0).abs() < 1e-9, "posterior sums to {}", total);
	}

	#[test]
	fn classification_is_idempotent(examples in arb_examples(), query in arb_features()) {
		let model = trained(examples);
		let first = classify(&model, &query).unwrap();
		let second = classify(&model, &query).unwrap();

		for (a, b) in first.iter().zip(second.iter()) {
			prop_assert_eq!(&a.label, &b.label);
			prop_assert_eq!(a.probability.to_bits(), b.probability.to_bits());
		}
	}

	#[test]
	fn unknown_features_reproduce_prior(examples in arb_examples(), names in prop::collection::vec("[x-z]{3}", 1..4)) {
		let model = trained(examples);
		let query: FeatureSet = names.into_iter().map(|name| (name, true)).collect();
		let posterior = classify(&model, &query).unwrap();

		for label in model.labels() {
			let prior = model.label_estimator().probability(label);
			prop_assert!((posterior.probability(label) - prior).abs() < 1e-9);
		}
	}

	#[test]
	fn conditionals_are_balanced(examples in arb_examples()) {
		let names: Vec<String> = examples
			.iter()
			.flat_map(|(features, _)| features.keys().cloned())
			.collect();
		let model = trained(examples);

		for label in model.labels() {
			let label_count = model.label_estimator().freq_dist().count(label);
			for name in &names {
				let conditional = model.conditional(label, name);
				prop_assert!(conditional.is_some());
				if let Some(conditional) = conditional {
					prop_assert_eq!(conditional.freq_dist().total(), label_count);
				}
			}
		}
	}
}
