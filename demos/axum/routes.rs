use axum::{
    Json,
    extract::{Path, Request, State},
    http::StatusCode,
};
use serde_json::{Value, json};

use crate::body_parser::ParsedBody;
use crate::method_override::AppState;

fn describe(state: &AppState, action: &str, id: Option<u64>, request: &Request) -> Value {
    json!({
        "service": state.service_name,
        "action": action,
        "id": id,
        "method": request.method().as_str(),
        "url": request.uri().to_string(),
        "body": request
            .extensions()
            .get::<ParsedBody>()
            .map(|parsed| Value::Object(parsed.0.clone())),
    })
}

pub async fn create_item(
    State(state): State<AppState>,
    request: Request,
) -> (StatusCode, Json<Value>) {
    (
        StatusCode::CREATED,
        Json(describe(&state, "create", None, &request)),
    )
}

pub async fn show_item(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    request: Request,
) -> Json<Value> {
    Json(describe(&state, "show", Some(id), &request))
}

pub async fn replace_item(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    request: Request,
) -> Json<Value> {
    Json(describe(&state, "replace", Some(id), &request))
}

pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    request: Request,
) -> Json<Value> {
    Json(describe(&state, "delete", Some(id), &request))
}
