use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppError;
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::models::lineup::SetLineupRequest;
use crate::services::LineupService;

pub async fn get_lineup(
    match_id: Uuid,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    let lineup = LineupService::new(pool.get_ref().clone())
        .get_lineup(match_id)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Lineup retrieved", lineup)))
}

#[tracing::instrument(
    name = "Set match lineup",
    skip(body, pool, claims),
    fields(
        username = %claims.username,
        team_id = %body.team_id,
        players = body.players.len()
    )
)]
pub async fn set_lineup(
    match_id: Uuid,
    body: web::Json<SetLineupRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, AppError> {
    let principal = claims.principal()?;
    let entries = LineupService::new(pool.get_ref().clone())
        .set_lineup(&principal, match_id, &body)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Lineup saved", entries)))
}
