use actix_web::{HttpResponse, Responder, get, post, web};

use crate::forms::auth::{SignInForm, SignUpForm};
use crate::forms::profile::ProfileForm;
use crate::repository::LocalRepository;
use crate::routes::{SharedSession, error_response, read_session, write_session};
use crate::services::profile::{load_profile_page, sign_in, sign_out, sign_up, update_profile};

#[post("/auth/signup")]
pub async fn signup(
    form: web::Json<SignUpForm>,
    repo: web::Data<LocalRepository>,
    session: web::Data<SharedSession>,
) -> impl Responder {
    let mut session = match write_session(&session) {
        Ok(session) => session,
        Err(response) => return response,
    };

    match sign_up(repo.get_ref(), &mut session, form.into_inner()) {
        Ok(profile) => HttpResponse::Created().json(profile),
        Err(err) => error_response(&err),
    }
}

#[post("/auth/signin")]
pub async fn signin(
    form: web::Json<SignInForm>,
    repo: web::Data<LocalRepository>,
    session: web::Data<SharedSession>,
) -> impl Responder {
    let mut session = match write_session(&session) {
        Ok(session) => session,
        Err(response) => return response,
    };

    match sign_in(repo.get_ref(), &mut session, form.into_inner()) {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(err) => error_response(&err),
    }
}

#[post("/auth/signout")]
pub async fn signout(
    repo: web::Data<LocalRepository>,
    session: web::Data<SharedSession>,
) -> impl Responder {
    let mut session = match write_session(&session) {
        Ok(session) => session,
        Err(response) => return response,
    };

    match sign_out(repo.get_ref(), &mut session) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(&err),
    }
}

#[get("/profile")]
pub async fn show_profile(
    repo: web::Data<LocalRepository>,
    session: web::Data<SharedSession>,
) -> impl Responder {
    let session = match read_session(&session) {
        Ok(session) => session,
        Err(response) => return response,
    };

    match load_profile_page(repo.get_ref(), &session) {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(err) => error_response(&err),
    }
}

#[post("/profile")]
pub async fn save_profile(
    form: web::Json<ProfileForm>,
    repo: web::Data<LocalRepository>,
    session: web::Data<SharedSession>,
) -> impl Responder {
    let mut session = match write_session(&session) {
        Ok(session) => session,
        Err(response) => return response,
    };

    match update_profile(repo.get_ref(), &mut session, form.into_inner()) {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(err) => error_response(&err),
    }
}
