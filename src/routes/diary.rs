use actix_web::{HttpResponse, Responder, get, post, web};

use crate::forms::diary::DiaryForm;
use crate::repository::LocalRepository;
use crate::routes::error_response;
use crate::services::diary::{add_diary_entry, load_diary};

#[get("/diary")]
pub async fn show_diary(repo: web::Data<LocalRepository>) -> impl Responder {
    match load_diary(repo.get_ref()) {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(err) => error_response(&err),
    }
}

#[post("/diary")]
pub async fn create_diary_entry(
    form: web::Json<DiaryForm>,
    repo: web::Data<LocalRepository>,
) -> impl Responder {
    match add_diary_entry(repo.get_ref(), form.into_inner()) {
        Ok(entry) => HttpResponse::Created().json(entry),
        Err(err) => error_response(&err),
    }
}
