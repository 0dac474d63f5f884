use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Raw training sentences grouped by polarity.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct TrainingData {
	#[serde(default)]
	pub positive: Vec<String>,
	#[serde(default)]
	pub negative: Vec<String>,
}

/// On-disk envelope: `{"trainingData": {"positive": [..], "negative": [..]}}`.
#[derive(Serialize, Deserialize, Debug)]
struct TrainingFile {
	#[serde(rename = "trainingData")]
	training_data: TrainingData,
}

/// Parses training data from a JSON string.
pub fn parse_training_data(json: &str) -> Result<TrainingData> {
	let file: TrainingFile = serde_json::from_str(json)?;
	Ok(file.training_data)
}

/// Reads training data from a JSON file.
pub fn read_training_data<P: AsRef<Path>>(path: P) -> Result<TrainingData> {
	let reader = BufReader::new(File::open(path)?);
	let file: TrainingFile = serde_json::from_reader(reader)?;
	Ok(file.training_data)
}

/// Extracts the base filename without extension.
///
/// Examples:
/// - `"./data/tweets.json"` → `"tweets"`
/// - `"tweets.json"` → `"tweets"`
pub fn get_filename<P: AsRef<Path>>(input_path: P) -> io::Result<String> {
	let stem = input_path
		.as_ref()
		.file_stem()
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Path has no filename"))?;

	Ok(stem.to_string_lossy().to_string())
}

/// Lists all files with a given extension in a directory.
///
/// Returns file names only (no paths), sorted.
pub fn list_files<P: AsRef<Path>>(dir: P, extension: &str) -> io::Result<Vec<String>> {
	let mut files = Vec::new();

	for entry in fs::read_dir(dir)? {
		let path = entry?.path();
		if path.is_file() && path.extension() == Some(std::ffi::OsStr::new(extension)) {
			if let Some(name) = path.file_name() {
				files.push(name.to_string_lossy().to_string());
			}
		}
	}

	files.sort();
	Ok(files)
}
