use crate::post::post_index::post_routes;
use actix_web::web;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api").configure(post_routes));
}
