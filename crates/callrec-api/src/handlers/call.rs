//! Call record handlers
//!
//! HTTP handlers for the call record CRUD endpoints.

use crate::dto::call::{
    CallCreateRequest, CallQueryParams, CallRecordResponse, CallUpdateRequest,
};
use crate::dto::ApiResponse;
use actix_web::{web, HttpResponse};
use callrec_core::traits::CallRecordRepository;
use callrec_core::AppError;
use callrec_db::PgCallRepository;
use sqlx::PgPool;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

/// List call records matching a phone number
///
/// GET /calls?number=N
///
/// Matches the number against either side of the call. No match yields an
/// empty array, not an error.
#[instrument(skip(pool, query))]
pub async fn list_calls(
    pool: web::Data<PgPool>,
    query: web::Query<CallQueryParams>,
) -> Result<HttpResponse, AppError> {
    let number = query
        .number
        .as_deref()
        .filter(|n| !n.is_empty())
        .ok_or_else(|| {
            warn!("List request without a number parameter");
            AppError::MissingField("number".to_string())
        })?;

    debug!(number, "Listing call records");

    let repo = PgCallRepository::new(pool.get_ref().clone());
    let records = repo.find_by_number(number).await?;

    info!(number, count = records.len(), "Retrieved call records");

    let response_data: Vec<CallRecordResponse> = records.into_iter().map(Into::into).collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(response_data)))
}

/// Get a single call record by ID
///
/// GET /calls/{id}
#[instrument(skip(pool))]
pub async fn get_call(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let call_id = path.into_inner();
    debug!(id = call_id, "Getting call record");

    let repo = PgCallRepository::new(pool.get_ref().clone());
    let record = repo
        .find_by_id(call_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Call record {} not found", call_id)))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(CallRecordResponse::from(record))))
}

/// Create a new call record
///
/// POST /calls
///
/// `start_time` is assigned by the server at insertion time; the generated
/// id and timestamp come back in the response.
#[instrument(skip(pool, req))]
pub async fn create_call(
    pool: web::Data<PgPool>,
    req: web::Json<CallCreateRequest>,
) -> Result<HttpResponse, AppError> {
    req.validate().map_err(|e| {
        warn!("Call record creation validation failed: {}", e);
        AppError::Validation(e.to_string())
    })?;

    debug!(
        caller = %req.caller_number,
        receiver = %req.receiver_number,
        "Creating call record"
    );

    let repo = PgCallRepository::new(pool.get_ref().clone());
    let created = repo.create(&req.caller_number, &req.receiver_number).await?;

    info!(id = created.id, "Call record created successfully");

    Ok(HttpResponse::Created().json(ApiResponse::with_message(
        CallRecordResponse::from(created),
        "Call record created successfully",
    )))
}

/// Update an existing call record
///
/// PUT /calls/{id}
///
/// Accepts one or both of `caller_number` / `receiver_number`; `id` and
/// `start_time` are never altered.
#[instrument(skip(pool, req))]
pub async fn update_call(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
    req: web::Json<CallUpdateRequest>,
) -> Result<HttpResponse, AppError> {
    let call_id = path.into_inner();

    req.validate().map_err(|e| {
        warn!("Call record update validation failed: {}", e);
        AppError::Validation(e.to_string())
    })?;

    if !req.has_changes() {
        warn!(id = call_id, "Update request without any field to change");
        return Err(AppError::InvalidInput(
            "Provide caller_number and/or receiver_number".to_string(),
        ));
    }

    debug!(id = call_id, "Updating call record");

    let repo = PgCallRepository::new(pool.get_ref().clone());
    let updated = repo
        .update(
            call_id,
            req.caller_number.as_deref(),
            req.receiver_number.as_deref(),
        )
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Call record {} not found", call_id)))?;

    info!(id = call_id, "Call record updated successfully");

    Ok(HttpResponse::Ok().json(ApiResponse::with_message(
        CallRecordResponse::from(updated),
        "Call record updated successfully",
    )))
}

/// Delete a call record
///
/// DELETE /calls/{id}
///
/// A second delete of the same id reports 404, not success.
#[instrument(skip(pool))]
pub async fn delete_call(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let call_id = path.into_inner();
    debug!(id = call_id, "Deleting call record");

    let repo = PgCallRepository::new(pool.get_ref().clone());
    let deleted = repo.delete(call_id).await?;

    if !deleted {
        return Err(AppError::NotFound(format!(
            "Call record {} not found",
            call_id
        )));
    }

    info!(id = call_id, "Call record deleted successfully");

    Ok(HttpResponse::Ok().json(ApiResponse::with_message(
        (),
        "Call record deleted successfully",
    )))
}

/// Configure call record routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/calls")
            .route("", web::get().to(list_calls))
            .route("", web::post().to(create_call))
            .route("/{id}", web::get().to(get_call))
            .route("/{id}", web::put().to(update_call))
            .route("/{id}", web::delete().to(delete_call)),
    );
}
