mod body_parser;
mod method_override;
mod routes;

use std::net::SocketAddr;

use axum::{
    Router, ServiceExt,
    extract::Request,
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
};
use method_override::middleware::method_override_middleware;
use tower::Layer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,bunner_method_override_rs=debug")),
        )
        .init();

    let app_state = method_override::build_state().expect("valid method override configuration");

    let router = Router::new()
        .route("/items", post(routes::create_item))
        .route(
            "/items/{id}",
            get(routes::show_item)
                .put(routes::replace_item)
                .delete(routes::delete_item),
        )
        .with_state(app_state.clone());

    // Wrap the router itself: a route layer would run after method dispatch.
    let app = from_fn(body_parser::json_body_parser).layer(
        from_fn_with_state(app_state, method_override_middleware).layer(router),
    );

    let addr: SocketAddr = "127.0.0.1:5002".parse().unwrap();
    tracing::info!(%addr, "axum method override example running");

    axum::serve(
        tokio::net::TcpListener::bind(addr).await.unwrap(),
        ServiceExt::<Request>::into_make_service(app),
    )
    .await
    .unwrap();
}
