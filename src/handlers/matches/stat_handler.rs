use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppError;
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::models::stat::StatEditRequest;
use crate::services::StatService;

#[tracing::instrument(
    name = "Edit match statistics",
    skip(body, pool, claims),
    fields(
        username = %claims.username,
        team_id = %body.team_id,
        deltas = body.deltas.len()
    )
)]
pub async fn edit_stats(
    match_id: Uuid,
    body: web::Json<StatEditRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, AppError> {
    let principal = claims.principal()?;
    let updated = StatService::new(pool.get_ref().clone())
        .edit_stats(&principal, match_id, &body)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Statistics updated", updated)))
}

pub async fn list_stats(
    match_id: Uuid,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    let stats = StatService::new(pool.get_ref().clone())
        .list_stats(match_id)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Statistics retrieved", stats)))
}
