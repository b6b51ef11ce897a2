use actix_web::HttpResponse;
use serde::Serialize;

use crate::services::ServiceError;

pub mod products;
pub mod users;

/// JSON body returned for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Translate a service failure into its HTTP response.
///
/// Known storage errors pass their message through on 500; unexpected
/// internal failures report a generic message.
pub(crate) fn error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::InvalidIdentifier => {
            HttpResponse::BadRequest().json(ErrorBody::new("Invalid product id"))
        }
        ServiceError::MissingRatingOrComment => HttpResponse::BadRequest()
            .json(ErrorBody::new("Update must include a rating or a comment")),
        ServiceError::Form(message) => HttpResponse::BadRequest().json(ErrorBody::new(message)),
        ServiceError::NotFound => HttpResponse::NotFound().json(ErrorBody::new("Product not found")),
        ServiceError::Unauthorized => {
            HttpResponse::Unauthorized().json(ErrorBody::new("Invalid email or password"))
        }
        ServiceError::Conflict => {
            HttpResponse::Conflict().json(ErrorBody::new("Email is already registered"))
        }
        ServiceError::Repository(err) => {
            log::error!("storage failure: {err}");
            HttpResponse::InternalServerError().json(ErrorBody::new(err.to_string()))
        }
        ServiceError::Internal(message) => {
            log::error!("internal error: {message}");
            HttpResponse::InternalServerError().json(ErrorBody::new("Internal server error"))
        }
    }
}
