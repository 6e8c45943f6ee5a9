use axum::{
    extract::{Request, State},
    http::{HeaderMap, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use bunner_method_override_rs::{
    HeaderSource, InvalidOverrideMethod, OverrideDecision, RequestContext,
};

use super::AppState;
use crate::body_parser::ParsedBody;

struct HttpHeaders<'a>(&'a HeaderMap);

impl HeaderSource for HttpHeaders<'_> {
    fn header(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(|value| value.to_str().ok())
    }
}

pub async fn method_override_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let decision = {
        let headers = HttpHeaders(request.headers());
        let body = request.extensions().get::<ParsedBody>();
        let context = RequestContext::from_parts(request.method().as_str(), &headers, body);
        state.method_override.resolve(&context)
    };

    match decision {
        Ok(OverrideDecision::Overridden { method, source }) => {
            match Method::from_bytes(method.as_bytes()) {
                Ok(method) => *request.method_mut() = method,
                Err(_) => return StatusCode::BAD_REQUEST.into_response(),
            }
            tracing::info!(%method, %source, uri = %request.uri(), "method overridden");
            next.run(request).await
        }
        Ok(OverrideDecision::Unchanged) => next.run(request).await,
        Err(err) => {
            tracing::warn!(candidate = err.method(), uri = %request.uri(), "{err}");
            rejection_response(err)
        }
    }
}

fn rejection_response(err: InvalidOverrideMethod) -> Response {
    let status = StatusCode::from_u16(err.status()).unwrap_or(StatusCode::BAD_REQUEST);
    (status, err.to_string()).into_response()
}
