use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppError;
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::models::rugby_match::{FullTimeRequest, HalfTimeRequest};
use crate::services::MatchService;

pub async fn get_half_time(
    match_id: Uuid,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    let view = MatchService::new(pool.get_ref().clone())
        .half_time_view(match_id)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Half-time retrieved", view)))
}

#[tracing::instrument(
    name = "Record half-time score",
    skip(body, pool, claims),
    fields(
        username = %claims.username,
        home_score = body.home_score,
        away_score = body.away_score
    )
)]
pub async fn record_half_time(
    match_id: Uuid,
    body: web::Json<HalfTimeRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, AppError> {
    let principal = claims.principal()?;
    let half_time = MatchService::new(pool.get_ref().clone())
        .record_half_time(&principal, match_id, &body)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Half-time recorded", half_time)))
}

pub async fn get_full_time(
    match_id: Uuid,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    let view = MatchService::new(pool.get_ref().clone())
        .full_time_view(match_id)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Full-time retrieved", view)))
}

#[tracing::instrument(
    name = "Record full-time score",
    skip(body, pool, claims),
    fields(
        username = %claims.username,
        home_score = body.home_score,
        away_score = body.away_score
    )
)]
pub async fn record_full_time(
    match_id: Uuid,
    body: web::Json<FullTimeRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, AppError> {
    let principal = claims.principal()?;
    let finished = MatchService::new(pool.get_ref().clone())
        .record_full_time(&principal, match_id, &body)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Match finished", finished)))
}
