mod config;
mod protocol;

use std::sync::{Arc, RwLock};

use actix_web::{get, post, put, web, App, HttpResponse, HttpServer, Responder};
use clap::Parser;
use serde::Deserialize;

use rs_senti_core::SentimentClassifier;
use rs_senti_core::io::{get_filename, list_files};

use config::Config;

/// Query parameters for the `/v1/guess` endpoint
#[derive(Deserialize)]
struct GuessQuery {
	text: Option<String>
}

#[derive(Deserialize)]
struct ModelQuery {
	name: Option<String>
}

/// The live model and the name of the file it was trained from.
///
/// Requests clone the `Arc` and release the lock before classifying, so a
/// reload only ever swaps the pointer.
struct SharedData {
	config: Config,
	model: RwLock<Arc<SentimentClassifier>>,
	model_name: RwLock<String>
}

impl SharedData {
	fn classifier(&self) -> Result<Arc<SentimentClassifier>, HttpResponse> {
		match self.model.read() {
			Ok(model) => Ok(Arc::clone(&model)),
			Err(_) => Err(HttpResponse::InternalServerError().body("Model lock failed")),
		}
	}
}

/// HTTP POST endpoint `/v1/command`
///
/// Answers one protocol line (`GUESS <text>`) with `OK <score>` or `ERROR <KIND>`.
#[post("/v1/command")]
async fn post_command(data: web::Data<SharedData>, body: String) -> impl Responder {
	let classifier = match data.classifier() {
		Ok(c) => c,
		Err(response) => return response
	};
	HttpResponse::Ok().body(protocol::handle(&body, &classifier).to_string())
}

/// HTTP GET endpoint `/v1/guess`
///
/// Returns the full guess (polarity, score, per-label probabilities) as JSON.
#[get("/v1/guess")]
async fn get_guess(data: web::Data<SharedData>, query: web::Query<GuessQuery>) -> impl Responder {
	let text = match &query.text {
		Some(s) if !s.trim().is_empty() => s.trim(),
		_ => return HttpResponse::BadRequest().body("Missing or empty text"),
	};

	let classifier = match data.classifier() {
		Ok(c) => c,
		Err(response) => return response
	};

	match classifier.guess(text) {
		Ok(guess) => HttpResponse::Ok().json(guess),
		Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
	}
}

#[get("/v1/models")]
async fn get_models(data: web::Data<SharedData>) -> impl Responder {
	match list_files(&data.config.data_dir, "json") {
		Ok(files) => {
			let names: Vec<String> = files.iter().filter_map(|f| get_filename(f).ok()).collect();
			HttpResponse::Ok().body(names.join("\n"))
		}
		Err(_) => HttpResponse::InternalServerError().body("Failed to list models")
	}
}

#[get("/v1/loaded_model")]
async fn get_loaded_model(data: web::Data<SharedData>) -> impl Responder {
	match data.model_name.read() {
		Ok(name) => HttpResponse::Ok().body(name.clone()),
		Err(_) => HttpResponse::InternalServerError().body("Model lock failed"),
	}
}

/// HTTP PUT endpoint `/v1/load_model`
///
/// Trains a brand-new classifier from `<data-dir>/<name>.json`, then swaps it
/// in. The previous model keeps answering until the swap.
#[put("/v1/load_model")]
async fn put_model(data: web::Data<SharedData>, query: web::Query<ModelQuery>) -> impl Responder {
	let name = match &query.name {
		Some(s) if !s.trim().is_empty() => s.trim().to_owned(),
		_ => return HttpResponse::BadRequest().body("Missing or empty model name"),
	};

	let path = data.config.model_path(&name);
	let trained = match web::block(move || SentimentClassifier::from_file(path)).await {
		Ok(Ok(classifier)) => classifier,
		Ok(Err(e)) => return HttpResponse::InternalServerError().body(format!("Failed to load model: {e}")),
		Err(e) => return HttpResponse::InternalServerError().body(format!("Failed to load model: {e}")),
	};

	log::info!("swapping in model {name}");
	match (data.model.write(), data.model_name.write()) {
		(Ok(mut model), Ok(mut model_name)) => {
			*model = Arc::new(trained);
			*model_name = name;
		}
		_ => return HttpResponse::InternalServerError().body("Model lock failed"),
	}

	HttpResponse::Ok().body("Model loaded successfully")
}

/// Main entry point for the server.
///
/// Trains the startup model from `<data-dir>/<model>.json`, then serves it.
/// Binds to 127.0.0.1:10001 unless told otherwise (see `--help`).
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init();
	let config = Config::parse();

	let classifier = SentimentClassifier::from_file(config.model_path(&config.model))
		.map_err(|e| std::io::Error::other(format!("failed to train startup model: {e}")))?;

	let bind = (config.host.clone(), config.port);
	let shared_data = web::Data::new(SharedData {
		model_name: RwLock::new(config.model.clone()),
		model: RwLock::new(Arc::new(classifier)),
		config,
	});

	log::info!("listening on {}:{}", bind.0, bind.1);
	HttpServer::new(move || {
		App::new()
			.app_data(shared_data.clone())
			.service(post_command)
			.service(get_guess)
			.service(get_models)
			.service(get_loaded_model)
			.service(put_model)
	})
		.bind(bind)?
		.run()
		.await
}
