//! Travel companion backend: places, trips with their moments, a travel
//! diary and the traveler's profile, browsed through searchable, filterable
//! and paginated list views.

#[cfg(feature = "server")]
use std::sync::RwLock;

#[cfg(feature = "server")]
use actix_cors::Cors;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};

#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::repository::LocalRepository;
#[cfg(feature = "server")]
use crate::repository::fixtures::Fixtures;
#[cfg(feature = "server")]
use crate::repository::storage::LocalStorage;
#[cfg(feature = "server")]
use crate::session::SessionContext;

#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
pub mod error_conversions;
#[cfg(feature = "data")]
pub mod forms;
#[cfg(feature = "data")]
pub mod list_view;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "data")]
pub mod services;
#[cfg(feature = "data")]
pub mod session;

/// Registers every API handler under `/api/v1`.
#[cfg(feature = "server")]
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    use crate::routes::auth::{save_profile, show_profile, signin, signout, signup};
    use crate::routes::diary::{create_diary_entry, show_diary};
    use crate::routes::explore::{show_dashboard, show_explore};
    use crate::routes::places::{
        create_place, list_places, review_place, show_place, show_wishlist, wishlist_place,
    };
    use crate::routes::trips::{
        create_moment, edit_moment, list_trips, plan_trip, remove_moment, show_trip,
    };

    cfg.service(
        web::scope("/api/v1")
            .service(show_dashboard)
            .service(show_explore)
            .service(list_places)
            .service(create_place)
            .service(show_place)
            .service(wishlist_place)
            .service(review_place)
            .service(show_wishlist)
            .service(list_trips)
            .service(plan_trip)
            .service(show_trip)
            .service(create_moment)
            .service(edit_moment)
            .service(remove_moment)
            .service(show_diary)
            .service(create_diary_entry)
            .service(signup)
            .service(signin)
            .service(signout)
            .service(show_profile)
            .service(save_profile),
    );
}

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let storage = LocalStorage::open(&server_config.storage_dir)
        .map_err(|e| std::io::Error::other(format!("Failed to open storage: {e}")))?;
    log::info!("Storing data in {}", storage.root().display());
    let fixtures = Fixtures::load(&server_config.fixtures_dir)
        .map_err(|e| std::io::Error::other(format!("Failed to load fixtures: {e}")))?;

    let repo = LocalRepository::new(storage, fixtures);

    // The session is restored once and shared by every worker.
    let session = SessionContext::load(&repo)
        .map_err(|e| std::io::Error::other(format!("Failed to restore session: {e}")))?;
    let session = web::Data::new(RwLock::new(session));

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!("Listening on {}:{}", bind_address.0, bind_address.1);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Logger::default())
            .configure(configure_api)
            .app_data(web::Data::new(repo.clone()))
            .app_data(session.clone())
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
