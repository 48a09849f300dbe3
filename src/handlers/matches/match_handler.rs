use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppError;
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::services::MatchService;

#[tracing::instrument(name = "Get match", skip(pool))]
pub async fn get_match(
    match_id: Uuid,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    let rugby_match = MatchService::new(pool.get_ref().clone())
        .get_match(match_id)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Match retrieved", rugby_match)))
}

#[tracing::instrument(
    name = "Start match",
    skip(pool, claims),
    fields(username = %claims.username)
)]
pub async fn start_match(
    match_id: Uuid,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, AppError> {
    let principal = claims.principal()?;
    let started = MatchService::new(pool.get_ref().clone())
        .start_match(&principal, match_id)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Match is now live", started)))
}
