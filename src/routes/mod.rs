//! JSON handlers mounted under `/api/v1`.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use actix_web::HttpResponse;
use serde_json::json;

use crate::services::ServiceError;
use crate::session::SessionContext;

pub mod auth;
pub mod diary;
pub mod explore;
pub mod places;
pub mod trips;

/// Session shared by every worker.
pub type SharedSession = RwLock<SessionContext>;

/// Maps a service failure to its HTTP status with a JSON error body.
pub fn error_response(err: &ServiceError) -> HttpResponse {
    let body = json!({ "error": err.to_string() });
    match err {
        ServiceError::Unauthorized => HttpResponse::Unauthorized().json(body),
        ServiceError::NotFound => HttpResponse::NotFound().json(body),
        ServiceError::Form(_) | ServiceError::TypeConstraint(_) => {
            HttpResponse::BadRequest().json(body)
        }
        ServiceError::Internal(_) => HttpResponse::InternalServerError().finish(),
    }
}

fn read_session(session: &SharedSession) -> Result<RwLockReadGuard<'_, SessionContext>, HttpResponse> {
    session.read().map_err(|_| {
        log::error!("Session lock poisoned");
        HttpResponse::InternalServerError().finish()
    })
}

fn write_session(
    session: &SharedSession,
) -> Result<RwLockWriteGuard<'_, SessionContext>, HttpResponse> {
    session.write().map_err(|_| {
        log::error!("Session lock poisoned");
        HttpResponse::InternalServerError().finish()
    })
}
