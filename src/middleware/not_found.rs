use crate::utils::error::CustomError;
use actix_web::middleware::ErrorHandlerResponse;
use actix_web::{ResponseError, Result, dev::ServiceResponse};

/// Swap the framework's empty 404 for the `NOT_FOUND_ERROR` envelope.
pub fn not_found<B>(res: ServiceResponse<B>) -> Result<ErrorHandlerResponse<B>> {
    let response = CustomError::NotFoundError("Route does not exist".into()).error_response();
    let res = res.into_response(response).map_into_right_body();

    Ok(ErrorHandlerResponse::Response(res))
}
