use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::json;

use crate::assigner;
use crate::config::ServerConfig;
use crate::data::{Defaults, GenerateRequest, GenerateResponse, RoomInput, SubjectInput};
use crate::error::AssignError;
use crate::pools;

impl IntoResponse for AssignError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Resolves the request against the built-in defaults and fills the grid.
pub fn generate(request: GenerateRequest) -> Result<GenerateResponse, AssignError> {
    let defaults = Defaults::default();

    let days = request.days.unwrap_or(defaults.days);
    let times = request.times.unwrap_or(defaults.times);
    let times = pools::resize_times(times, request.classes_per_day.unwrap_or(0))?;
    pools::check_grid(days.len(), times.len())?;

    for day in days.iter().filter(|d| !pools::is_working_day(d)) {
        warn!("'{}' is not a working day; scheduling it anyway", day);
    }

    let subjects = match request.subjects {
        Some(SubjectInput::Pairs(pairs)) => pairs,
        Some(SubjectInput::Text(text)) => pools::parse_subject_lines(&text),
        None => defaults.subjects,
    };
    let rooms = match request.rooms {
        Some(RoomInput::List(rooms)) => rooms,
        Some(RoomInput::Text(text)) => pools::parse_room_lines(&text),
        None => defaults.rooms,
    };
    let rooms = pools::resize_rooms(rooms, request.room_count.unwrap_or(0))?;

    let seed = request.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    let entries = assigner::generate_schedule(&days, &times, &subjects, &rooms, &mut rng)?;
    let summary = assigner::summarize(&entries);
    info!(
        "Generated {} slots (seed {}): {} subjects, {} faculty, {} rooms",
        summary.total_slots, seed, summary.subjects, summary.faculty, summary.rooms
    );

    Ok(GenerateResponse {
        days,
        times,
        entries,
        summary,
        seed,
    })
}

async fn generate_handler(
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AssignError> {
    generate(request).map(Json)
}

async fn defaults_handler() -> Json<Defaults> {
    Json(Defaults::default())
}

async fn health_handler() -> &'static str {
    "ok"
}

pub fn router() -> Router {
    Router::new()
        .route("/v1/timetable/generate", post(generate_handler))
        .route("/v1/timetable/defaults", get(defaults_handler))
        .route("/healthz", get(health_handler))
}

pub async fn run_server(config: ServerConfig) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!("Server running at http://{}", listener.local_addr()?);

    axum::serve(listener, router()).await
}
