use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::domain::types::{MomentId, TripId};
use crate::dto::trips::TripsQuery;
use crate::forms::moment::MomentForm;
use crate::forms::trip::TripForm;
use crate::models::config::ServerConfig;
use crate::repository::LocalRepository;
use crate::routes::{SharedSession, error_response, read_session};
use crate::services::ServiceError;
use crate::services::moments::{add_moment, delete_moment, update_moment};
use crate::services::trips::{create_trip, load_trip_detail, load_trips_page};

#[get("/trips")]
pub async fn list_trips(
    params: web::Query<TripsQuery>,
    repo: web::Data<LocalRepository>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let mut query = params.into_inner();
    query.per_page.get_or_insert(server_config.items_per_page);

    match load_trips_page(repo.get_ref(), query) {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(err) => error_response(&err),
    }
}

#[get("/trips/{trip_id}")]
pub async fn show_trip(trip_id: web::Path<i64>, repo: web::Data<LocalRepository>) -> impl Responder {
    let trip_id = match TripId::new(trip_id.into_inner()) {
        Ok(id) => id,
        Err(err) => return error_response(&ServiceError::from(err)),
    };

    match load_trip_detail(repo.get_ref(), trip_id) {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(err) => error_response(&err),
    }
}

#[post("/trips")]
pub async fn plan_trip(
    form: web::Json<TripForm>,
    repo: web::Data<LocalRepository>,
    session: web::Data<SharedSession>,
) -> impl Responder {
    let session = match read_session(&session) {
        Ok(session) => session,
        Err(response) => return response,
    };

    match create_trip(repo.get_ref(), &session, form.into_inner()) {
        Ok(trip) => HttpResponse::Created().json(trip),
        Err(err) => error_response(&err),
    }
}

#[post("/trips/{trip_id}/moments")]
pub async fn create_moment(
    trip_id: web::Path<i64>,
    form: web::Json<MomentForm>,
    repo: web::Data<LocalRepository>,
) -> impl Responder {
    let trip_id = match TripId::new(trip_id.into_inner()) {
        Ok(id) => id,
        Err(err) => return error_response(&ServiceError::from(err)),
    };

    match add_moment(repo.get_ref(), trip_id, form.into_inner()) {
        Ok(moment) => HttpResponse::Created().json(moment),
        Err(err) => error_response(&err),
    }
}

#[put("/moments/{moment_id}")]
pub async fn edit_moment(
    moment_id: web::Path<i64>,
    form: web::Json<MomentForm>,
    repo: web::Data<LocalRepository>,
) -> impl Responder {
    let moment_id = match MomentId::new(moment_id.into_inner()) {
        Ok(id) => id,
        Err(err) => return error_response(&ServiceError::from(err)),
    };

    match update_moment(repo.get_ref(), moment_id, form.into_inner()) {
        Ok(moment) => HttpResponse::Ok().json(moment),
        Err(err) => error_response(&err),
    }
}

#[delete("/moments/{moment_id}")]
pub async fn remove_moment(
    moment_id: web::Path<i64>,
    repo: web::Data<LocalRepository>,
) -> impl Responder {
    let moment_id = match MomentId::new(moment_id.into_inner()) {
        Ok(id) => id,
        Err(err) => return error_response(&ServiceError::from(err)),
    };

    match delete_moment(repo.get_ref(), moment_id) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(&err),
    }
}
