// src/routes/matches.rs
use actix_web::{get, post, put, web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppError;
use crate::handlers::matches::{
    election_handler, event_handler, lineup_handler, match_handler, score_handler, stat_handler,
};
use crate::middleware::auth::Claims;
use crate::models::election::ElectionRequest;
use crate::models::lineup::SetLineupRequest;
use crate::models::match_event::CreateMatchEventRequest;
use crate::models::rugby_match::{FullTimeRequest, HalfTimeRequest};
use crate::models::stat::StatEditRequest;

/// Get match detail with both team names
#[get("/{match_id}")]
async fn get_match(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    match_handler::get_match(path.into_inner(), pool).await
}

/// Kick off a planned match
#[post("/{match_id}/start")]
async fn start_match(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, AppError> {
    match_handler::start_match(path.into_inner(), pool, claims).await
}

/// Event timeline, oldest first
#[get("/{match_id}/events")]
async fn list_events(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    event_handler::list_events(path.into_inner(), pool).await
}

/// Record a live event (try, penalty, card, substitution...)
#[post("/{match_id}/events")]
async fn record_event(
    path: web::Path<Uuid>,
    body: web::Json<CreateMatchEventRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, AppError> {
    event_handler::record_event(path.into_inner(), body, pool, claims).await
}

#[get("/{match_id}/stats")]
async fn list_stats(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    stat_handler::list_stats(path.into_inner(), pool).await
}

/// Apply counter deltas for a team or one of its players
#[post("/{match_id}/stats")]
async fn edit_stats(
    path: web::Path<Uuid>,
    body: web::Json<StatEditRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, AppError> {
    stat_handler::edit_stats(path.into_inner(), body, pool, claims).await
}

#[get("/{match_id}/halftime")]
async fn get_half_time(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    score_handler::get_half_time(path.into_inner(), pool).await
}

#[post("/{match_id}/halftime")]
async fn record_half_time(
    path: web::Path<Uuid>,
    body: web::Json<HalfTimeRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, AppError> {
    score_handler::record_half_time(path.into_inner(), body, pool, claims).await
}

#[get("/{match_id}/fulltime")]
async fn get_full_time(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    score_handler::get_full_time(path.into_inner(), pool).await
}

/// Enter the final score and close the match
#[post("/{match_id}/fulltime")]
async fn record_full_time(
    path: web::Path<Uuid>,
    body: web::Json<FullTimeRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, AppError> {
    score_handler::record_full_time(path.into_inner(), body, pool, claims).await
}

#[get("/{match_id}/lineup")]
async fn get_lineup(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    lineup_handler::get_lineup(path.into_inner(), pool).await
}

/// Replace one team's lineup
#[put("/{match_id}/lineup")]
async fn set_lineup(
    path: web::Path<Uuid>,
    body: web::Json<SetLineupRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, AppError> {
    lineup_handler::set_lineup(path.into_inner(), body, pool, claims).await
}

#[get("/{match_id}/election")]
async fn get_election(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    election_handler::get_election(path.into_inner(), pool).await
}

/// Elect the best and worst player of a finished match
#[post("/{match_id}/election")]
async fn elect_players(
    path: web::Path<Uuid>,
    body: web::Json<ElectionRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, AppError> {
    election_handler::elect_players(path.into_inner(), body, pool, claims).await
}
