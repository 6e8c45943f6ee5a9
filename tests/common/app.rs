use axum::{
    Json, Router,
    body::{Body, to_bytes},
    extract::{Request, State},
    http::{self, HeaderMap, Method, StatusCode, header::CONTENT_TYPE},
    middleware::{Next, from_fn, from_fn_with_state},
    response::{IntoResponse, Response},
    routing::any,
};
use bunner_method_override_rs::{
    BodySource, HeaderSource, MethodOverride, OverrideDecision, RequestContext,
};
use http_body_util::BodyExt;
use serde_json::{Map, Value, json};
use std::convert::Infallible;
use std::sync::Arc;
use tower::{Service, ServiceBuilder, ServiceExt};

#[derive(Clone)]
pub struct ParsedBody(pub Map<String, Value>);

impl BodySource for ParsedBody {
    fn field(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(Value::as_str)
    }
}

struct HttpHeaders<'a>(&'a HeaderMap);

impl HeaderSource for HttpHeaders<'_> {
    fn header(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(|value| value.to_str().ok())
    }
}

async fn json_body_parser(request: Request, next: Next) -> Response {
    let is_json = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json"));
    if !is_json {
        return next.run(request).await;
    }

    let (mut parts, body) = request.into_parts();
    let Ok(bytes) = to_bytes(body, usize::MAX).await else {
        return StatusCode::BAD_REQUEST.into_response();
    };
    if let Ok(Value::Object(fields)) = serde_json::from_slice::<Value>(&bytes) {
        parts.extensions.insert(ParsedBody(fields));
    }

    next.run(Request::from_parts(parts, Body::from(bytes))).await
}

async fn method_override(
    State(resolver): State<Arc<MethodOverride>>,
    mut request: Request,
    next: Next,
) -> Response {
    let decision = {
        let headers = HttpHeaders(request.headers());
        let body = request.extensions().get::<ParsedBody>();
        let ctx = RequestContext::from_parts(request.method().as_str(), &headers, body);
        resolver.resolve(&ctx)
    };

    match decision {
        Ok(OverrideDecision::Overridden { method, .. }) => {
            match Method::from_bytes(method.as_bytes()) {
                Ok(method) => *request.method_mut() = method,
                Err(_) => return StatusCode::BAD_REQUEST.into_response(),
            }
            next.run(request).await
        }
        Ok(OverrideDecision::Unchanged) => next.run(request).await,
        Err(err) => (StatusCode::BAD_REQUEST, err.to_string()).into_response(),
    }
}

async fn echo(request: Request) -> Json<Value> {
    let body = request
        .extensions()
        .get::<ParsedBody>()
        .map(|parsed| Value::Object(parsed.0.clone()));

    let mut payload = json!({
        "method": request.method().as_str(),
        "url": request.uri().to_string(),
    });
    if let Some(body) = body {
        payload["body"] = body;
    }

    Json(payload)
}

/// Echo app with the override wrapped around the router so the rewrite happens before routing.
pub fn app(
    resolver: MethodOverride,
) -> impl Service<Request, Response = Response, Error = Infallible> + Clone {
    let router = Router::new().route("/foo", any(echo));

    ServiceBuilder::new()
        .layer(from_fn(json_body_parser))
        .layer(from_fn_with_state(Arc::new(resolver), method_override))
        .service(router)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("json response body")
    }
}

pub async fn send<S>(app: S, request: Request) -> TestResponse
where
    S: Service<Request, Response = Response, Error = Infallible>,
{
    let response = app.oneshot(request).await.expect("infallible service");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("response body")
        .to_bytes();

    TestResponse {
        status,
        body: String::from_utf8(bytes.to_vec()).expect("utf-8 body"),
    }
}

pub fn json_request(method: Method, body: Value) -> Request {
    http::Request::builder()
        .method(method)
        .uri("/foo")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid request")
}

pub fn header_request(method: Method, name: &str, value: &str) -> Request {
    http::Request::builder()
        .method(method)
        .uri("/foo")
        .header(name, value)
        .body(Body::empty())
        .expect("valid request")
}
