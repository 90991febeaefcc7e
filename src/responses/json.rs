use crate::errors::{ResultResp, ServerError};
use astra::{Body, Response, ResponseBuilder};
use serde::Serialize;

/// Serializes `payload` into a JSON response with CORS headers attached.
pub fn json_response<T: Serialize>(status: u16, payload: &T) -> ResultResp {
    let body = serde_json::to_string(payload).map_err(|_| ServerError::InternalError)?;
    Ok(raw_json_response(status, body))
}

/// Infallible variant used where an error has already been decided on
/// and a second failure path would have nowhere to go.
pub fn raw_json_response(status: u16, body: String) -> Response {
    cors(ResponseBuilder::new().status(status))
        .header("Content-Type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

/// Empty 204 answer for CORS preflight requests.
pub fn preflight_response() -> ResultResp {
    Ok(cors(ResponseBuilder::new().status(204))
        .body(Body::empty())
        .unwrap())
}

// Public read/write API, no auth: every origin, method and header is allowed.
fn cors(builder: ResponseBuilder) -> ResponseBuilder {
    builder
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "*")
        .header("Access-Control-Allow-Headers", "*")
}
