//! HTTP boundary: routes, the JSON response envelope, and error-kind -> status mapping.
//!
//! Every response body is `{"statusCode": <code>, "data": <payload>}`; errors
//! carry `{"error": <message>}` as data.

use crate::models::{PlayerId, TournamentError, TournamentId};
use crate::requests::{
    CreateTournamentRequest, PlayerNameRequest, RecordQualifyingTimeRequest,
    UpdateTournamentStatusRequest,
};
use crate::service::TournamentService;
use actix_web::{
    delete, get,
    http::StatusCode,
    patch, post,
    web::{self, Data, Json, Path},
    HttpResponse, ResponseError,
};
use serde::{Deserialize, Serialize};

pub const UNDECODABLE_REQUEST: &str = "Invalid request parameters.";

/// Shared service handle for all handlers.
pub type AppState = Data<TournamentService>;

type ApiResult = Result<HttpResponse, TournamentError>;

/// Standard response envelope.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub status_code: u16,
    pub data: T,
}

fn respond<T: Serialize>(status: StatusCode, data: T) -> HttpResponse {
    HttpResponse::build(status).json(ApiResponse {
        status_code: status.as_u16(),
        data,
    })
}

impl ResponseError for TournamentError {
    fn status_code(&self) -> StatusCode {
        match self {
            TournamentError::NotFound(_) => StatusCode::NOT_FOUND,
            TournamentError::InvalidParameter(_) => StatusCode::BAD_REQUEST,
            TournamentError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            TournamentError::Forbidden(_) => StatusCode::FORBIDDEN,
            TournamentError::NotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            TournamentError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("{}", self);
        }
        respond(status, serde_json::json!({ "error": self.message() }))
    }
}

/// Undecodable JSON bodies become InvalidParameter instead of actix's plain-text 400.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::debug!("Rejected request body: {}", err);
        TournamentError::invalid_parameter(UNDECODABLE_REQUEST).into()
    })
}

/// Path segments that are not valid ids answer 400 inside the envelope.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, req| {
        log::debug!("Rejected path {}: {}", req.path(), err);
        TournamentError::invalid_parameter(UNDECODABLE_REQUEST).into()
    })
}

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

/// Path segments: tournament id and player id (e.g. /api/tournaments/{id}/players/{player_id})
#[derive(Deserialize)]
struct TournamentPlayerPath {
    id: TournamentId,
    player_id: PlayerId,
}

#[get("/api/health")]
async fn api_health() -> HttpResponse {
    respond(
        StatusCode::OK,
        HealthResponse {
            ok: true,
            service: "tournament-rounds",
        },
    )
}

#[get("/api/tournaments")]
async fn api_list_tournaments(state: AppState) -> ApiResult {
    Ok(respond(StatusCode::OK, state.list_tournaments()?))
}

/// Create a tournament from a bracket description. Always starts in DRAFT.
#[post("/api/tournaments")]
async fn api_create_tournament(state: AppState, body: Json<CreateTournamentRequest>) -> ApiResult {
    let tournament = state.create_tournament(body.into_inner())?;
    Ok(respond(StatusCode::CREATED, tournament))
}

#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> ApiResult {
    Ok(respond(StatusCode::OK, state.get_tournament(path.id)?))
}

/// Delete a tournament (not while ACTIVE).
#[delete("/api/tournaments/{id}")]
async fn api_delete_tournament(state: AppState, path: Path<TournamentPath>) -> ApiResult {
    state.delete_tournament(path.id)?;
    Ok(respond(StatusCode::OK, ()))
}

#[patch("/api/tournaments/{id}/status")]
async fn api_update_status(
    state: AppState,
    path: Path<TournamentPath>,
    body: Json<UpdateTournamentStatusRequest>,
) -> ApiResult {
    let status = body.parse_status()?;
    Ok(respond(StatusCode::OK, state.change_status(path.id, status)?))
}

#[get("/api/tournaments/{id}/players")]
async fn api_list_players(state: AppState, path: Path<TournamentPath>) -> ApiResult {
    Ok(respond(StatusCode::OK, state.list_players(path.id)?))
}

/// Add a player (not while ACTIVE).
#[post("/api/tournaments/{id}/players")]
async fn api_add_player(
    state: AppState,
    path: Path<TournamentPath>,
    body: Json<PlayerNameRequest>,
) -> ApiResult {
    let player = state.add_player(path.id, body.into_inner())?;
    Ok(respond(StatusCode::CREATED, player))
}

#[get("/api/tournaments/{id}/players/{player_id}")]
async fn api_get_player(state: AppState, path: Path<TournamentPlayerPath>) -> ApiResult {
    Ok(respond(StatusCode::OK, state.get_player(path.id, path.player_id)?))
}

#[patch("/api/tournaments/{id}/players/{player_id}")]
async fn api_rename_player(
    state: AppState,
    path: Path<TournamentPlayerPath>,
    body: Json<PlayerNameRequest>,
) -> ApiResult {
    let player = state.rename_player(path.id, path.player_id, body.into_inner())?;
    Ok(respond(StatusCode::OK, player))
}

#[delete("/api/tournaments/{id}/players/{player_id}")]
async fn api_remove_player(state: AppState, path: Path<TournamentPlayerPath>) -> ApiResult {
    state.remove_player(path.id, path.player_id)?;
    Ok(respond(StatusCode::OK, ()))
}

#[get("/api/tournaments/{id}/qualifying")]
async fn api_get_qualifying(state: AppState, path: Path<TournamentPath>) -> ApiResult {
    Ok(respond(StatusCode::OK, state.qualifying(path.id)?))
}

#[post("/api/tournaments/{id}/qualifying")]
async fn api_record_qualifying_time(
    state: AppState,
    path: Path<TournamentPath>,
    body: Json<RecordQualifyingTimeRequest>,
) -> ApiResult {
    let best = state.record_qualifying_time(path.id, body.into_inner())?;
    Ok(respond(StatusCode::CREATED, best))
}

#[delete("/api/tournaments/{id}/qualifying")]
async fn api_clear_qualifying(state: AppState, path: Path<TournamentPath>) -> ApiResult {
    state.clear_qualifying(path.id)?;
    Ok(respond(StatusCode::OK, ()))
}

/// Register every API route plus the JSON error handler.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(path_config())
        .service(api_health)
        .service(api_list_tournaments)
        .service(api_create_tournament)
        .service(api_get_tournament)
        .service(api_delete_tournament)
        .service(api_update_status)
        .service(api_list_players)
        .service(api_add_player)
        .service(api_get_player)
        .service(api_rename_player)
        .service(api_remove_player)
        .service(api_get_qualifying)
        .service(api_record_qualifying_time)
        .service(api_clear_qualifying);
}
