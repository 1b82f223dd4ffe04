use crate::config::AppConfig;
use crate::middleware::cors::cors;
use crate::middleware::not_found::not_found;
use crate::post::post_body::PostBodyLimit;
use crate::post::post_store::PostStore;
use crate::router::index::routes;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::middleware::{ErrorHandlers, Logger, NormalizePath};
use actix_web::{App, Error, web};

/// Assemble the application around a shared post store.
pub fn create_app(
    post_store: web::Data<PostStore>,
    config: &AppConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Response = ServiceResponse<impl MessageBody + use<>>,
        Config = (),
        InitError = (),
        Error = Error,
    > + use<>,
> {
    App::new()
        .wrap(ErrorHandlers::new().handler(StatusCode::NOT_FOUND, not_found))
        .wrap(NormalizePath::trim())
        .wrap(cors(&config.cors_allowed_origins))
        .wrap(Logger::default())
        .app_data(post_store)
        .app_data(web::Data::new(PostBodyLimit(config.json_body_limit)))
        .configure(routes)
}
