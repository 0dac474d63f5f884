//! Line-oriented request/response protocol.
//!
//! A request is one line, `<COMMAND> <payload>`, the command being
//! case-insensitive. Responses are `OK <score>` or `ERROR <KIND>`.

use std::fmt;

use rs_senti_core::SentimentClassifier;

/// A parsed request line.
#[derive(Debug, PartialEq)]
pub enum Request<'a> {
	/// Score the sentiment of the payload text.
	Guess(&'a str),
}

/// Error kinds reported to the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
	EmptyRequest,
	UnknownCommand,
	MissingPayload,
	ClassificationFailed,
}

impl ErrorKind {
	pub fn token(self) -> &'static str {
		match self {
			ErrorKind::EmptyRequest => "EMPTY_REQUEST",
			ErrorKind::UnknownCommand => "UNKNOWN_COMMAND",
			ErrorKind::MissingPayload => "MISSING_PAYLOAD",
			ErrorKind::ClassificationFailed => "CLASSIFICATION_FAILED",
		}
	}
}

/// A response line.
#[derive(Debug, PartialEq)]
pub enum Response {
	Score(f64),
	Error(ErrorKind),
}

impl fmt::Display for Response {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Response::Score(score) => write!(f, "OK {score}"),
			Response::Error(kind) => write!(f, "ERROR {}", kind.token()),
		}
	}
}

/// Parses one request line.
pub fn parse(line: &str) -> Result<Request<'_>, ErrorKind> {
	let line = line.trim();
	if line.is_empty() {
		return Err(ErrorKind::EmptyRequest);
	}

	let (command, payload) = match line.split_once(char::is_whitespace) {
		Some((command, payload)) => (command, payload.trim()),
		None => (line, ""),
	};

	if command.eq_ignore_ascii_case("guess") {
		if payload.is_empty() {
			return Err(ErrorKind::MissingPayload);
		}
		Ok(Request::Guess(payload))
	} else {
		Err(ErrorKind::UnknownCommand)
	}
}

/// Parses and answers one request line.
pub fn handle(line: &str, classifier: &SentimentClassifier) -> Response {
	match parse(line) {
		Ok(Request::Guess(text)) => match classifier.guess(text) {
			Ok(guess) => Response::Score(guess.score),
			Err(e) => {
				log::error!("classification failed: {e}");
				Response::Error(ErrorKind::ClassificationFailed)
			}
		},
		Err(kind) => Response::Error(kind),
	}
}
