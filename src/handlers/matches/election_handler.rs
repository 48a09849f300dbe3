use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppError;
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::models::election::ElectionRequest;
use crate::services::ElectionService;

pub async fn get_election(
    match_id: Uuid,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    let view = ElectionService::new(pool.get_ref().clone())
        .election_view(match_id)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Election retrieved", view)))
}

#[tracing::instrument(
    name = "Elect best and worst player",
    skip(body, pool, claims),
    fields(username = %claims.username, team_id = %body.team_id)
)]
pub async fn elect_players(
    match_id: Uuid,
    body: web::Json<ElectionRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, AppError> {
    let principal = claims.principal()?;
    let elections = ElectionService::new(pool.get_ref().clone())
        .elect(&principal, match_id, &body)
        .await?;
    Ok(HttpResponse::Created().json(ApiResponse::success("Election recorded", elections)))
}
