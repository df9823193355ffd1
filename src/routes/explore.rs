use actix_web::{HttpResponse, Responder, get, web};

use crate::dto::explore::ExploreQuery;
use crate::models::config::ServerConfig;
use crate::repository::LocalRepository;
use crate::routes::error_response;
use crate::services::dashboard::load_dashboard;
use crate::services::explore::load_explore;

#[get("/dashboard")]
pub async fn show_dashboard(repo: web::Data<LocalRepository>) -> impl Responder {
    match load_dashboard(repo.get_ref()) {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(err) => error_response(&err),
    }
}

#[get("/explore")]
pub async fn show_explore(
    params: web::Query<ExploreQuery>,
    repo: web::Data<LocalRepository>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let mut query = params.into_inner();
    query.per_page.get_or_insert(server_config.items_per_page);

    match load_explore(repo.get_ref(), query) {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(err) => error_response(&err),
    }
}
