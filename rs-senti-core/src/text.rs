use std::sync::LazyLock;

use regex::Regex;

static MENTION_REGEX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"@[A-Za-z0-9_]+").unwrap());
static HASHTAG_REGEX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"#[A-Za-z0-9_]+").unwrap());
static TAG_REGEX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"<[^<]+?>").unwrap());
static URL_REGEX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"(http|www)[^ ]*").unwrap());

/// Emoticons kept as tokens even though punctuation is stripped.
pub const EMOTICONS: [&str; 8] = [":)", ":(", "):", "(:", "(-:", ")-:", ":-)", ":-("];

/// Turns a short message into a list of normalized tokens.
///
/// Steps, in order:
/// - lowercase
/// - drop `@mentions`, `#hashtags`
/// - squeeze runs of 3+ identical word characters down to 2 (`cooool` -> `cool`)
/// - drop SGML tags and `http…` / `www…` runs
/// - strip ASCII punctuation, then re-append emoticons that were present
/// - split on whitespace, keeping tokens longer than one character
///
/// ```
/// use rs_senti_core::text::normalize_text;
///
/// assert_eq!(normalize_text("Sooooo HAPPY @bob :)"), vec!["soo", "happy", ":)"]);
/// assert!(normalize_text("").is_empty());
/// ```
pub fn normalize_text(text: &str) -> Vec<String> {
	if text.is_empty() {
		return Vec::new();
	}

	let text = text.to_lowercase();
	let text = MENTION_REGEX.replace_all(&text, "");
	let text = HASHTAG_REGEX.replace_all(&text, "");
	let text = squeeze_repeats(&text);
	let text = TAG_REGEX.replace_all(&text, "");
	let text = URL_REGEX.replace_all(&text, "");

	let emoticons: Vec<&str> = EMOTICONS.iter().copied().filter(|e| text.contains(e)).collect();

	let stripped: String = text.chars().filter(|c| !c.is_ascii_punctuation()).collect();

	stripped
		.split_whitespace()
		.chain(emoticons)
		.filter(|token| token.chars().count() > 1)
		.map(str::to_owned)
		.collect()
}

/// Collapses every run of more than two identical word characters to two.
fn squeeze_repeats(text: &str) -> String {
	let mut out = String::with_capacity(text.len());
	let mut previous: Option<char> = None;
	let mut run = 0;
	for c in text.chars() {
		if Some(c) == previous {
			run += 1;
		} else {
			previous = Some(c);
			run = 1;
		}
		if run <= 2 || !is_word_char(c) {
			out.push(c);
		}
	}
	out
}

fn is_word_char(c: char) -> bool {
	c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn strips_noise() {
		let text = "ommmmmmg how'r U!? VISI T  <html> <a href='http://google.com'> my</a> site @ http://www.coolstuff.com haha";
		assert_eq!(normalize_text(text), vec!["ommg", "howr", "visi", "my", "site", "haha"]);
	}

	#[test]
	fn keeps_non_latin_words() {
		let tokens = normalize_text("FOE JAPAN が粘り強く主張していた避難の権利");
		assert_eq!(tokens, vec!["foe", "japan", "が粘り強く主張していた避難の権利"]);
	}

	#[test]
	fn trims_single_word() {
		assert_eq!(normalize_text("no "), vec!["no"]);
	}

	#[test]
	fn empty_text_has_no_tokens() {
		assert!(normalize_text("").is_empty());
		assert!(normalize_text("   ").is_empty());
	}

	#[test]
	fn keeps_emoticons_as_separate_tokens() {
		assert_eq!(normalize_text("I'm so happy :) #blessed @bob"), vec!["im", "so", "happy", ":)"]);
	}

	#[test]
	fn squeeze_only_touches_word_characters() {
		assert_eq!(squeeze_repeats("yaaaay!!!!"), "yaay!!!!");
		assert_eq!(squeeze_repeats("aa"), "aa");
	}
}
