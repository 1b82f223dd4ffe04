use crate::post::post_model::Post;
use crate::utils::error::CustomError;
use actix_web::{HttpMessage, HttpRequest, web};
use futures_util::StreamExt;

/// Largest post body read from the wire, in bytes.
#[derive(Debug, Clone, Copy)]
pub struct PostBodyLimit(pub usize);

fn is_json(req: &HttpRequest) -> bool {
    match req.mime_type() {
        Ok(Some(mime)) => {
            mime.subtype().as_str() == "json"
                || mime.suffix().map(|suffix| suffix.as_str()) == Some("json")
        }
        _ => false,
    }
}

/// Read the create-post body.
///
/// Bodies that are not sent as JSON, and empty JSON bodies, become an empty
/// post. A JSON body that is not an object fails with `BadRequestError`.
pub async fn read_post(
    req: &HttpRequest,
    mut payload: web::Payload,
    limit: PostBodyLimit,
) -> Result<Post, CustomError> {
    if !is_json(req) {
        return Ok(Post::default());
    }

    let mut body = web::BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk.map_err(|e| CustomError::BadRequestError(e.to_string()))?;
        if body.len() + chunk.len() > limit.0 {
            return Err(CustomError::PayloadTooLargeError(format!(
                "body exceeds {} bytes",
                limit.0
            )));
        }
        body.extend_from_slice(&chunk);
    }

    if body.is_empty() {
        return Ok(Post::default());
    }

    serde_json::from_slice(&body).map_err(|e| CustomError::BadRequestError(e.to_string()))
}
