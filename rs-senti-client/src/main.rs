use std::io::{self, BufRead, Write};
use std::time::Duration;

use clap::Parser;
use reqwest::blocking::Client;
use reqwest::Result;

/// Interactive client for rs-senti-server.
#[derive(Parser, Debug)]
#[command(name = "rs-senti-client")]
struct Args {
    /// Base URL of the server
    #[arg(short, long, default_value = "http://127.0.0.1:10001")]
    url: String,
}

/// REST context holding a reusable blocking HTTP client.
struct RESTContext {
    client: Client,
    base_url: String,
}

impl RESTContext {
    /// Creates a new REST context with a timeout.
    fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::new(5, 0))
            .build()?;
        Ok(Self { client, base_url: base_url.trim_end_matches('/').to_owned() })
    }

    /// Sends one protocol line to `/v1/command`.
    fn post_command(&self, line: &str) -> Result<String> {
        let response = self.client
            .post(format!("{}/v1/command", self.base_url))
            .body(line.to_owned())
            .send()?
            .error_for_status()?;

        Ok(response.text()?)
    }

    /// Sends a GET request to `/v1/models`.
    fn get_models(&self) -> Result<String> {
        let response = self.client
            .get(format!("{}/v1/models", self.base_url))
            .send()?
            .error_for_status()?;

        Ok(response.text()?)
    }

    /// Sends a PUT request to `/v1/load_model`.
    fn put_load_model(&self, name: &str) -> Result<String> {
        let response = self.client
            .put(format!("{}/v1/load_model", self.base_url))
            .query(&[("name", name)])
            .send()?
            .error_for_status()?;

        Ok(response.text()?)
    }
}

/// Dispatches one input line: `:models`, `:load <name>`, or text to score.
fn dispatch(rest: &RESTContext, line: &str) -> Result<String> {
    if line == ":models" {
        rest.get_models()
    } else if let Some(name) = line.strip_prefix(":load ") {
        rest.put_load_model(name.trim())
    } else {
        rest.post_command(&format!("GUESS {line}"))
    }
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();
    let rest = RESTContext::new(&args.url)?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("rs-senti> ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        if line.is_empty() {
            break;
        }

        match dispatch(&rest, line.trim()) {
            Ok(reply) => println!("{reply}"),
            Err(e) => println!("Error: {e}"),
        }
    }

    Ok(())
}
