use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppError;
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::models::match_event::CreateMatchEventRequest;
use crate::services::EventRecorder;

#[tracing::instrument(
    name = "Record match event",
    skip(body, pool, claims),
    fields(
        username = %claims.username,
        event_type = %body.event_type,
        minute = body.minute
    )
)]
pub async fn record_event(
    match_id: Uuid,
    body: web::Json<CreateMatchEventRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, AppError> {
    let principal = claims.principal()?;
    let recorded = EventRecorder::new(pool.get_ref().clone())
        .record_event(&principal, match_id, &body)
        .await?;
    Ok(HttpResponse::Created().json(ApiResponse::success("Event recorded", recorded)))
}

pub async fn list_events(
    match_id: Uuid,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    let events = EventRecorder::new(pool.get_ref().clone())
        .list_events(match_id)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Events retrieved", events)))
}
