use axum::{
    body::{Body, to_bytes},
    extract::Request,
    http::{StatusCode, header::CONTENT_TYPE},
    middleware::Next,
    response::{IntoResponse, Response},
};
use bunner_method_override_rs::BodySource;
use serde_json::{Map, Value};

const BODY_LIMIT: usize = 1024 * 1024;

/// JSON object parsed from the request body, kept in request extensions.
#[derive(Clone, Debug)]
pub struct ParsedBody(pub Map<String, Value>);

impl BodySource for ParsedBody {
    fn field(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(Value::as_str)
    }
}

fn is_json(request: &Request) -> bool {
    request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json"))
}

pub async fn json_body_parser(request: Request, next: Next) -> Response {
    if !is_json(&request) {
        return next.run(request).await;
    }

    let (mut parts, body) = request.into_parts();
    let bytes = match to_bytes(body, BODY_LIMIT).await {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::warn!(error = %err, "failed to read request body");
            return (StatusCode::PAYLOAD_TOO_LARGE, "request body too large").into_response();
        }
    };

    match serde_json::from_slice::<Value>(&bytes) {
        Ok(Value::Object(fields)) => {
            parts.extensions.insert(ParsedBody(fields));
        }
        Ok(_) => {}
        Err(err) => {
            tracing::debug!(error = %err, "request body is not valid JSON");
        }
    }

    next.run(Request::from_parts(parts, Body::from(bytes))).await
}
