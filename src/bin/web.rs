//! Single binary web server: JSON API for the badminton team tournament.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default so the app is reachable via DNS on a VPS.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).

use actix_web::{
    delete, get, post,
    web::{Data, Json, Path, Query},
    App, HttpResponse, HttpServer, Responder,
};
use badminton_team_web::{
    apply_score, create_tournament, distinct_years, finalize_tournament, generate_access_code,
    partnership_records, player_names, player_records, validate_set_score, MatchId, SetNumber,
    Tournament, TournamentError, TournamentId,
};
use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory state: tournaments by id. Finalized entries double as the history.
type AppState = Data<RwLock<HashMap<TournamentId, Tournament>>>;

/// Most finalized tournaments returned by the history endpoint.
const HISTORY_LIMIT: usize = 50;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct CreateTournamentBody {
    /// Join code; generated when absent or blank.
    #[serde(default)]
    access_code: Option<String>,
    team1_name: String,
    team2_name: String,
    /// Slot order W1-W3, M1-M3.
    team1_players: Vec<String>,
    team2_players: Vec<String>,
    #[serde(default)]
    date: Option<NaiveDate>,
}

#[derive(Deserialize)]
struct SubmitScoreBody {
    match_id: MatchId,
    /// 1 or 2.
    set_number: u8,
    team1_score: u32,
    team2_score: u32,
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

/// Path segment: join code (e.g. /api/tournaments/by-code/{code})
#[derive(Deserialize)]
struct AccessCodePath {
    code: String,
}

/// Optional ?year= filter for history and analytics.
#[derive(Deserialize)]
struct YearQuery {
    #[serde(default)]
    year: Option<i32>,
}

/// Finalized tournaments, optionally restricted to one year.
fn finalized_tournaments(
    tournaments: &HashMap<TournamentId, Tournament>,
    year: Option<i32>,
) -> Vec<Tournament> {
    tournaments
        .values()
        .filter(|t| t.is_finalized)
        .filter(|t| year.map_or(true, |y| t.date.year() == y))
        .cloned()
        .collect()
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "badminton-team-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Create a new tournament. Refused while a non-finalized tournament exists.
#[post("/api/tournaments")]
async fn api_create_tournament(state: AppState, body: Json<CreateTournamentBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    if g.values().any(|t| !t.is_finalized) {
        return HttpResponse::BadRequest().json(
            serde_json::json!({ "error": TournamentError::ActiveTournamentExists.to_string() }),
        );
    }
    let body = body.into_inner();
    let access_code = match body.access_code {
        Some(code) if !code.trim().is_empty() => code.trim().to_string(),
        _ => generate_access_code(),
    };
    match create_tournament(
        access_code,
        body.team1_name,
        body.team2_name,
        &body.team1_players,
        &body.team2_players,
        body.date,
    ) {
        Ok(tournament) => {
            log::info!(
                "Created tournament {} ({} vs {})",
                tournament.id,
                tournament.team1_name,
                tournament.team2_name
            );
            let response = HttpResponse::Ok().json(&tournament);
            g.insert(tournament.id, tournament);
            response
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// The current non-finalized tournament, if any.
#[get("/api/tournaments")]
async fn api_active_tournament(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g
        .values()
        .filter(|t| !t.is_finalized)
        .max_by_key(|t| t.created_at)
    {
        Some(t) => HttpResponse::Ok().json(t),
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No active tournament" })),
    }
}

/// Finalized tournaments, newest first (optionally one year), capped at 50.
#[get("/api/tournaments/history")]
async fn api_tournament_history(state: AppState, query: Query<YearQuery>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let mut history = finalized_tournaments(&g, query.year);
    history.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.created_at.cmp(&a.created_at)));
    history.truncate(HISTORY_LIMIT);
    HttpResponse::Ok().json(history)
}

/// Years that have finalized tournaments (for history filter dropdowns).
#[get("/api/tournaments/years")]
async fn api_tournament_years(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let tournaments: Vec<Tournament> = g.values().cloned().collect();
    HttpResponse::Ok().json(distinct_years(&tournaments))
}

/// Resolve a join code to a tournament id (latest created wins).
#[get("/api/tournaments/by-code/{code}")]
async fn api_tournament_by_code(state: AppState, path: Path<AccessCodePath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g
        .values()
        .filter(|t| t.access_code.eq_ignore_ascii_case(path.code.trim()))
        .max_by_key(|t| t.created_at)
    {
        Some(t) => HttpResponse::Ok().json(serde_json::json!({ "tournament_id": t.id })),
        None => HttpResponse::NotFound()
            .json(serde_json::json!({ "error": "No tournament with this access code" })),
    }
}

/// Get a tournament by id (404 if not found).
#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get(&path.id) {
        Some(t) => HttpResponse::Ok().json(t),
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    }
}

/// Remove a tournament entirely.
#[delete("/api/tournaments/{id}")]
async fn api_delete_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.remove(&path.id) {
        Some(t) => {
            log::info!("Deleted tournament {} ({} vs {})", t.id, t.team1_name, t.team2_name);
            HttpResponse::Ok().json(serde_json::json!({ "deleted": true }))
        }
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    }
}

/// Submit one set score. The conditions the engine treats as quiet no-ops
/// (unknown match, invalid score) are surfaced here as 400s.
#[post("/api/tournaments/{id}/score")]
async fn api_submit_score(
    state: AppState,
    path: Path<TournamentPath>,
    body: Json<SubmitScoreBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let t = match g.get_mut(&path.id) {
        Some(t) => t,
        None => {
            return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" }))
        }
    };
    if t.is_finalized {
        return HttpResponse::BadRequest()
            .json(serde_json::json!({ "error": TournamentError::AlreadyFinalized.to_string() }));
    }
    let set_number = match SetNumber::from_number(body.set_number) {
        Some(s) => s,
        None => {
            return HttpResponse::BadRequest()
                .json(serde_json::json!({ "error": "set_number must be 1 or 2" }))
        }
    };
    if t.find_match(body.match_id).is_none() {
        return HttpResponse::BadRequest().json(serde_json::json!({ "error": "Match not found" }));
    }
    if !validate_set_score(body.team1_score, body.team2_score) {
        return HttpResponse::BadRequest().json(serde_json::json!({ "error": "Invalid set score" }));
    }
    *t = apply_score(
        t.clone(),
        body.match_id,
        set_number,
        body.team1_score,
        body.team2_score,
    );
    log::info!(
        "Tournament {}: match {} set {} scored {}-{}",
        path.id,
        body.match_id,
        body.set_number,
        body.team1_score,
        body.team2_score
    );
    HttpResponse::Ok().json(&*t)
}

/// Finalize a fully played tournament; irreversible.
#[post("/api/tournaments/{id}/finalize")]
async fn api_finalize_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let t = match g.get_mut(&path.id) {
        Some(t) => t,
        None => {
            return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" }))
        }
    };
    match finalize_tournament(t) {
        Ok(()) => {
            log::info!("Finalized tournament {}", path.id);
            HttpResponse::Ok().json(&*t)
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Per-player win/loss records over finalized tournaments.
#[get("/api/analytics/players")]
async fn api_analytics_players(state: AppState, query: Query<YearQuery>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let tournaments = finalized_tournaments(&g, query.year);
    HttpResponse::Ok().json(player_records(&tournaments))
}

/// Per-partnership win/loss records over finalized tournaments.
#[get("/api/analytics/partnerships")]
async fn api_analytics_partnerships(state: AppState, query: Query<YearQuery>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let tournaments = finalized_tournaments(&g, query.year);
    HttpResponse::Ok().json(partnership_records(&tournaments))
}

/// Every player name seen in any tournament (for analytics pickers).
#[get("/api/analytics/player-names")]
async fn api_analytics_player_names(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let tournaments: Vec<Tournament> = g.values().cloned().collect();
    HttpResponse::Ok().json(player_names(&tournaments))
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(HashMap::<TournamentId, Tournament>::new()));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(favicon)
            .service(api_create_tournament)
            .service(api_active_tournament)
            .service(api_tournament_history)
            .service(api_tournament_years)
            .service(api_tournament_by_code)
            .service(api_get_tournament)
            .service(api_delete_tournament)
            .service(api_submit_score)
            .service(api_finalize_tournament)
            .service(api_analytics_players)
            .service(api_analytics_partnerships)
            .service(api_analytics_player_names)
    })
    .bind(bind)?
    .run()
    .await
}
