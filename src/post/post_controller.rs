use crate::post::post_body::{PostBodyLimit, read_post};
use crate::post::post_store::PostStore;
use crate::utils::error::CustomError;
use actix_web::{HttpRequest, HttpResponse, web};
use log::debug;
use serde_json::json;

/// List every stored post
/// GET /api/posts
pub async fn list_posts(post_store: web::Data<PostStore>) -> HttpResponse {
    HttpResponse::Ok().json(post_store.list().await)
}

/// Store the submitted post verbatim
/// POST /api/posts
pub async fn create_post(
    req: HttpRequest,
    post_store: web::Data<PostStore>,
    body_limit: web::Data<PostBodyLimit>,
    payload: web::Payload,
) -> Result<HttpResponse, CustomError> {
    let post = read_post(&req, payload, *body_limit.get_ref()).await?;
    debug!(
        "Storing post title={:?} has_content={}",
        post.title(),
        post.content().is_some()
    );

    let count = post_store.append(post).await;
    debug!("{count} posts in memory");

    Ok(HttpResponse::Created().json(json!({
        "message": "Post created successfully"
    })))
}
