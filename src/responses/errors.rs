use crate::errors::ServerError;
use crate::responses::json::raw_json_response;
use astra::Response;

/// Maps a ServerError to its HTTP status and a `{"detail": ...}` body,
/// the single place the error taxonomy meets the wire.
pub fn error_to_response(err: ServerError) -> Response {
    let (status, detail) = match err {
        ServerError::NotFound(msg) => (404, msg),
        ServerError::Conflict(msg) => (400, msg),
        ServerError::Invalid(msg) => (422, msg),
        ServerError::BadRequest(msg) => (400, msg),
        ServerError::DbError(msg) => (500, msg),
        ServerError::InternalError => (500, "Internal Server Error".to_string()),
    };

    let body = serde_json::json!({ "detail": detail });
    raw_json_response(status, body.to_string())
}
