use std::sync::Arc;

use bunner_method_override_rs::{AllowedMethods, MethodOverride, OverrideOptions, ValidationError};

pub type SharedMethodOverride = Arc<MethodOverride>;

#[derive(Clone)]
pub struct AppState {
    pub method_override: SharedMethodOverride,
    pub service_name: &'static str,
}

pub fn build_state() -> Result<AppState, ValidationError> {
    let options = OverrideOptions {
        allowed_methods: AllowedMethods::list(["GET", "PUT", "DELETE"]),
    };

    let method_override = Arc::new(MethodOverride::new(options)?);

    Ok(AppState {
        method_override,
        service_name: "axum-method-override-example",
    })
}

pub mod middleware;
