use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SentimentError};
use crate::features::extract_features;
use crate::io::{self, TrainingData};
use crate::model::classifier::Classifier;
use crate::model::sample::FeatureSet;
use crate::probability::posterior::PosteriorDistribution;
use crate::text::normalize_text;

/// Sentiment label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
	Positive,
	Negative,
}

impl fmt::Display for Polarity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Polarity::Positive => write!(f, "positive"),
			Polarity::Negative => write!(f, "negative"),
		}
	}
}

/// Outcome of scoring one piece of text.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Guess {
	/// Most probable polarity.
	pub polarity: Polarity,
	/// `P(positive) - P(negative)`, in `[-1, 1]`.
	pub score: f64,
	pub positive: f64,
	pub negative: f64,
}

/// Presence-feature sentiment classifier trained from raw sentences.
///
/// Text goes through [`normalize_text`] and [`extract_features`] on both the
/// training and the scoring side.
#[derive(Debug)]
pub struct SentimentClassifier {
	classifier: Classifier<Polarity>,
}

impl SentimentClassifier {
	/// Wraps an already trained classifier.
	pub fn new(classifier: Classifier<Polarity>) -> Self {
		Self { classifier }
	}

	/// Trains from a `{"trainingData": ...}` JSON file.
	///
	/// # Errors
	/// I/O and JSON errors, or `EmptyTrainingSet` if the file lists no sentences.
	pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
		let path = path.as_ref();
		let data = io::read_training_data(path)?;
		log::info!(
			"training sentiment model from {} ({} positive, {} negative)",
			path.display(),
			data.positive.len(),
			data.negative.len()
		);
		Self::from_training_data(&data)
	}

	/// Trains from a `{"trainingData": ...}` JSON string.
	pub fn from_json_str(json: &str) -> Result<Self> {
		Self::from_training_data(&io::parse_training_data(json)?)
	}

	/// Trains from raw sentences.
	pub fn from_training_data(data: &TrainingData) -> Result<Self> {
		let positive = data.positive.iter().map(|text| (text, Polarity::Positive));
		let negative = data.negative.iter().map(|text| (text, Polarity::Negative));

		let training_set: Vec<(FeatureSet, Polarity)> = positive
			.chain(negative)
			.map(|(text, polarity)| (extract_features(&normalize_text(text)), polarity))
			.collect();

		Self::from_training_set(training_set)
	}

	/// Trains from feature sets that are already extracted.
	pub fn from_training_set(training_set: Vec<(FeatureSet, Polarity)>) -> Result<Self> {
		Ok(Self::new(Classifier::train(training_set)?))
	}

	pub fn classifier(&self) -> &Classifier<Polarity> {
		&self.classifier
	}

	pub fn prob_classify(&self, features: &FeatureSet) -> Result<PosteriorDistribution<Polarity>> {
		self.classifier.prob_classify(features)
	}

	pub fn classify(&self, features: &FeatureSet) -> Result<Polarity> {
		self.classifier.classify(features)
	}

	/// Normalizes, extracts and scores `text`.
	///
	/// Text made only of unknown words scores the label prior alone.
	pub fn guess(&self, text: &str) -> Result<Guess> {
		let features = extract_features(&normalize_text(text));
		let posterior = self.prob_classify(&features)?;

		let positive = posterior.probability(&Polarity::Positive);
		let negative = posterior.probability(&Polarity::Negative);
		let polarity = posterior.max().copied().ok_or(SentimentError::UntrainedModel)?;

		Ok(Guess { polarity, score: positive - negative, positive, negative })
	}
}
