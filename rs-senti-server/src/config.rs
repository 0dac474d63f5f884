use std::path::PathBuf;

use clap::Parser;

/// Command-line configuration of the sentiment server.
#[derive(Parser, Debug, Clone)]
#[command(name = "rs-senti-server")]
#[command(about = "Serves Naive Bayes sentiment scores over HTTP", long_about = None)]
pub struct Config {
	/// Address to bind to
	#[arg(long, default_value = "127.0.0.1")]
	pub host: String,

	/// Port to listen on
	#[arg(short, long, default_value_t = 10001)]
	pub port: u16,

	/// Directory holding `<name>.json` training files
	#[arg(short, long, default_value = "./data")]
	pub data_dir: PathBuf,

	/// Training file (without extension) loaded at startup
	#[arg(short, long, default_value = "default")]
	pub model: String,
}

impl Config {
	/// Path of the training file for `name`.
	pub fn model_path(&self, name: &str) -> PathBuf {
		self.data_dir.join(format!("{name}.json"))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_match_the_classic_port() {
		let config = Config::parse_from(["rs-senti-server"]);
		assert_eq!(config.host, "127.0.0.1");
		assert_eq!(config.port, 10001);
		assert_eq!(config.model_path("tweets"), PathBuf::from("./data/tweets.json"));
	}

	#[test]
	fn flags_override_defaults() {
		let config = Config::parse_from(["rs-senti-server", "--port", "8080", "--model", "movies"]);
		assert_eq!(config.port, 8080);
		assert_eq!(config.model, "movies");
	}
}
