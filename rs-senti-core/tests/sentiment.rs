//! End-to-end scoring over a small tweet corpus.

use rs_senti_core::io::TrainingData;
use rs_senti_core::{FeatureSet, Polarity, SentimentClassifier, SentimentError, classify, train};

const POSITIVE: [&str; 5] = [
	"I love this car",
	"This view is amazing",
	"I feel great this morning",
	"I am so excited about the concert",
	"He is my best friend",
];

const NEGATIVE: [&str; 5] = [
	"I do not like this car",
	"This view is horrible",
	"I feel tired this morning",
	"I am not looking forward to the concert",
	"He is my enemy",
];

fn tweet_classifier() -> SentimentClassifier {
	let data = TrainingData {
		positive: POSITIVE.iter().map(|s| s.to_string()).collect(),
		negative: NEGATIVE.iter().map(|s| s.to_string()).collect(),
	};
	SentimentClassifier::from_training_data(&data).unwrap()
}

#[test]
fn garbage_is_neutral() {
	let guess = tweet_classifier().guess("goregho regeorg egewg").unwrap();
	assert_eq!(guess.score, 0.0);
}

#[test]
fn balanced_words_cancel_out() {
	// "friend" only appears in a positive tweet, "enemy" only in a negative one
	let guess = tweet_classifier().guess("friend and enemy").unwrap();
	assert_eq!(guess.score, 0.0);
	assert_eq!(guess.positive, 0.5);
}

#[test]
fn polarized_text_leans_positive() {
	let guess = tweet_classifier().guess("This car is my best friend and enemy.").unwrap();
	assert!(guess.score > 0.0, "score is {}", guess.score);
	assert!((guess.score - 0.5).abs() < 1e-9);
	assert_eq!(guess.polarity, Polarity::Positive);
}

#[test]
fn negative_text_leans_negative() {
	let guess = tweet_classifier().guess("I do not like the concert").unwrap();
	assert_eq!(guess.polarity, Polarity::Negative);
	assert!(guess.score < -0.9);
}

#[test]
fn scores_stay_in_range() {
	let classifier = tweet_classifier();
	for text in POSITIVE.iter().chain(NEGATIVE.iter()) {
		let guess = classifier.guess(text).unwrap();
		assert!((-1.0..=1.0).contains(&guess.score), "{text}: {}", guess.score);
		assert!((guess.positive + guess.negative - 1.0).abs() < 1e-9);
	}
}

#[test]
fn training_sentences_classify_as_their_label() {
	let classifier = tweet_classifier();
	for text in POSITIVE {
		assert_eq!(classifier.guess(text).unwrap().polarity, Polarity::Positive, "{text}");
	}
	for text in NEGATIVE {
		assert_eq!(classifier.guess(text).unwrap().polarity, Polarity::Negative, "{text}");
	}
}

#[test]
fn presence_features_classify_directly() {
	let classifier = tweet_classifier();
	let features = FeatureSet::from([("horrible".to_owned(), true)]);

	assert_eq!(classifier.classify(&features).unwrap(), Polarity::Negative);
	assert_eq!(classifier.classifier().labels(), &[Polarity::Positive, Polarity::Negative]);
}

#[test]
fn loads_from_json() {
	let json = r#"{"trainingData": {"positive": ["what a lovely day"], "negative": ["what an awful day"]}}"#;
	let classifier = SentimentClassifier::from_json_str(json).unwrap();
	assert_eq!(classifier.guess("lovely").unwrap().polarity, Polarity::Positive);
	assert_eq!(classifier.guess("awful").unwrap().polarity, Polarity::Negative);
}

#[test]
fn empty_example_list_fails() {
	let result = train::<Polarity, bool, _>(Vec::<(FeatureSet, Polarity)>::new());
	assert!(matches!(result, Err(SentimentError::EmptyTrainingSet)));
}

#[test]
fn core_entry_points_agree_with_facade() {
	let examples = vec![
		(FeatureSet::from([("nice".to_owned(), true), ("pretty".to_owned(), true)]), "pos"),
		(FeatureSet::from([("ugly".to_owned(), true), ("bald".to_owned(), true)]), "neg"),
	];
	let model = train(examples).unwrap();

	let query = FeatureSet::from([("nice".to_owned(), true), ("pretty".to_owned(), true)]);
	let posterior = classify(&model, &query).unwrap();
	assert_eq!(posterior.max(), Some(&"pos"));
	assert!(posterior.log_probability(&"pos") > posterior.log_probability(&"neg"));
}
