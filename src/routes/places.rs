use actix_web::{HttpResponse, Responder, get, post, web};
use serde_json::json;

use crate::domain::types::PlaceId;
use crate::dto::places::PlacesQuery;
use crate::forms::place::PlaceForm;
use crate::forms::review::ReviewForm;
use crate::models::config::ServerConfig;
use crate::repository::LocalRepository;
use crate::routes::{SharedSession, error_response, read_session};
use crate::services::ServiceError;
use crate::services::places::{
    add_place, add_review, load_place_detail, load_places_page, load_wishlist, toggle_wishlist,
};

#[get("/places")]
pub async fn list_places(
    params: web::Query<PlacesQuery>,
    repo: web::Data<LocalRepository>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let mut query = params.into_inner();
    query.per_page.get_or_insert(server_config.items_per_page);

    match load_places_page(repo.get_ref(), query) {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(err) => error_response(&err),
    }
}

#[get("/places/{key}")]
pub async fn show_place(key: web::Path<String>, repo: web::Data<LocalRepository>) -> impl Responder {
    match load_place_detail(repo.get_ref(), key.as_str()) {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(err) => error_response(&err),
    }
}

#[post("/places")]
pub async fn create_place(
    form: web::Json<PlaceForm>,
    repo: web::Data<LocalRepository>,
) -> impl Responder {
    match add_place(repo.get_ref(), form.into_inner()) {
        Ok(place) => HttpResponse::Created().json(place),
        Err(err) => error_response(&err),
    }
}

#[post("/places/{place_id}/wishlist")]
pub async fn wishlist_place(
    place_id: web::Path<i64>,
    repo: web::Data<LocalRepository>,
) -> impl Responder {
    let place_id = match PlaceId::new(place_id.into_inner()) {
        Ok(id) => id,
        Err(err) => return error_response(&ServiceError::from(err)),
    };

    match toggle_wishlist(repo.get_ref(), place_id) {
        Ok(in_wishlist) => HttpResponse::Ok().json(json!({
            "placeId": place_id,
            "inWishlist": in_wishlist,
        })),
        Err(err) => error_response(&err),
    }
}

#[post("/places/{place_id}/reviews")]
pub async fn review_place(
    place_id: web::Path<i64>,
    form: web::Json<ReviewForm>,
    repo: web::Data<LocalRepository>,
    session: web::Data<SharedSession>,
) -> impl Responder {
    let place_id = match PlaceId::new(place_id.into_inner()) {
        Ok(id) => id,
        Err(err) => return error_response(&ServiceError::from(err)),
    };
    let session = match read_session(&session) {
        Ok(session) => session,
        Err(response) => return response,
    };

    match add_review(repo.get_ref(), &session, place_id, form.into_inner()) {
        Ok(review) => HttpResponse::Created().json(review),
        Err(err) => error_response(&err),
    }
}

#[get("/wishlist")]
pub async fn show_wishlist(repo: web::Data<LocalRepository>) -> impl Responder {
    match load_wishlist(repo.get_ref()) {
        Ok(places) => HttpResponse::Ok().json(places),
        Err(err) => error_response(&err),
    }
}
