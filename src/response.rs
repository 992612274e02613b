use crate::error::RequestError;
use serde::Serialize;
use serde_json::{json, Value};

/// Canonical reason phrase for the status codes this crate classifies.
#[must_use]
pub fn status_reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        405 => "Method Not Allowed",
        500 => "Internal Server Error",
        _ => "OK",
    }
}

/// Classified routing outcome for the transport layer.
///
/// Carries the status code and a JSON body; serializing the body to bytes
/// and emitting headers remain the transport layer's concern.
#[derive(Debug, Clone, Serialize)]
pub struct RouterResponse {
    pub status: u16,
    pub body: Value,
}

impl RouterResponse {
    /// A response with the given status and JSON body.
    #[must_use]
    pub fn json(status: u16, body: Value) -> Self {
        RouterResponse { status, body }
    }

    /// An error response with a `{"error": message}` body.
    #[must_use]
    pub fn error(status: u16, message: &str) -> Self {
        Self::json(status, json!({ "error": message }))
    }

    /// Map a classified request failure to its status and message.
    #[must_use]
    pub fn from_error(err: &RequestError) -> Self {
        Self::error(err.status(), &err.to_string())
    }
}

/// Fold a dispatch outcome into a response: a handler result becomes a 200,
/// a classified failure becomes its 4xx equivalent.
#[must_use]
pub fn respond(outcome: Result<Value, RequestError>) -> RouterResponse {
    match outcome {
        Ok(body) => RouterResponse::json(200, body),
        Err(err) => RouterResponse::from_error(&err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_reason() {
        assert_eq!(status_reason(200), "OK");
        assert_eq!(status_reason(404), "Not Found");
        assert_eq!(status_reason(405), "Method Not Allowed");
    }

    #[test]
    fn test_from_error_maps_status() {
        let resp = RouterResponse::from_error(&RequestError::NotFound);
        assert_eq!(resp.status, 404);

        let resp = RouterResponse::from_error(&RequestError::MethodNotAllowed);
        assert_eq!(resp.status, 405);

        let resp = RouterResponse::from_error(&RequestError::MissingParameter {
            name: "id".to_string(),
        });
        assert_eq!(resp.status, 400);
        assert!(resp.body["error"].as_str().unwrap().contains("id"));
    }

    #[test]
    fn test_respond_folds_outcome() {
        let ok = respond(Ok(json!({ "ok": true })));
        assert_eq!(ok.status, 200);
        assert_eq!(ok.body, json!({ "ok": true }));

        let err = respond(Err(RequestError::NotFound));
        assert_eq!(err.status, 404);
    }
}
