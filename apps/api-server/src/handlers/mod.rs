//! HTTP handlers and route configuration.

mod auth;
mod health;
mod post;

use actix_web::web;

/// Configure all application routes. Paths mirror the public API contract.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        // Auth routes
        .route("/register", web::post().to(auth::register))
        .route("/login", web::post().to(auth::login))
        .route("/profile", web::get().to(auth::profile))
        .route("/logout", web::post().to(auth::logout))
        // Post routes
        .route("/post", web::post().to(post::create))
        .route("/post", web::get().to(post::list))
        .route("/post", web::put().to(post::update))
        .route("/post/{id}", web::get().to(post::get))
        .route("/delete/{id}", web::delete().to(post::delete));
}
