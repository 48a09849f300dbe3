use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppError;
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::models::rugby_match::CreateMatchRequest;
use crate::services::MatchService;

// POST /admin/matchs - Schedule a match between two teams
#[tracing::instrument(
    name = "Admin create match",
    skip(body, pool, claims),
    fields(
        admin = %claims.username,
        home_team_id = %body.home_team_id,
        away_team_id = %body.away_team_id
    )
)]
pub async fn create_match(
    body: web::Json<CreateMatchRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, AppError> {
    let principal = claims.principal()?;
    let created = MatchService::new(pool.get_ref().clone())
        .create_match(&principal, &body)
        .await?;
    Ok(HttpResponse::Created().json(ApiResponse::success("Match created", created)))
}

// PATCH /admin/matchs/{id}/validate-stats - Freeze post-match statistics
#[tracing::instrument(
    name = "Admin validate match statistics",
    skip(path, pool, claims),
    fields(admin = %claims.username)
)]
pub async fn validate_stats(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, AppError> {
    let principal = claims.principal()?;
    let validated = MatchService::new(pool.get_ref().clone())
        .validate_stats(&principal, path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Statistics validated", validated)))
}
