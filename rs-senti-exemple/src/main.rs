use std::io::{self, BufRead, Write};

use rs_senti_core::features::{extract_vocabulary_features, vocabulary};
use rs_senti_core::text::normalize_text;
use rs_senti_core::{Classifier, Polarity};

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

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Normalize every training sentence into tokens
    let documents: Vec<(Vec<String>, Polarity)> = POSITIVE
        .iter()
        .map(|text| (normalize_text(text), Polarity::Positive))
        .chain(NEGATIVE.iter().map(|text| (normalize_text(text), Polarity::Negative)))
        .collect();

    // The vocabulary is closed: words outside it are ignored when scoring
    let tokens: Vec<Vec<String>> = documents.iter().map(|(doc, _)| doc.clone()).collect();
    let words = vocabulary(&tokens);

    // Each document gets one true/false feature per vocabulary word
    let training_set = documents
        .iter()
        .map(|(doc, polarity)| (extract_vocabulary_features(doc, &words), *polarity));
    let classifier = Classifier::train(training_set)?;

    println!("Trained on {} sentences, {} words. Empty line to quit.", documents.len(), words.len());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("rs-senti > ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        if line.is_empty() {
            break;
        }

        let features = extract_vocabulary_features(&normalize_text(&line), &words);
        let result = classifier.prob_classify(&features)?;
        let score = result.probability(&Polarity::Positive) - result.probability(&Polarity::Negative);

        match result.max() {
            Some(label) => println!("Sentiment: {} ({}%)", label, score * 100.0),
            None => println!("Sentiment: unknown"),
        }
    }

    Ok(())
}
