use crate::allowed_methods::AllowedMethods;
use crate::util::is_http_token;
use thiserror::Error;

/// Installer-facing configuration for [`MethodOverride`](crate::MethodOverride).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OverrideOptions {
    /// Methods a `POST` request may be rewritten to.
    pub allowed_methods: AllowedMethods,
}

/// Errors raised when the configured options can never behave sensibly.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("allowed methods cannot be empty; no override could ever succeed")]
    EmptyAllowedMethods,
    #[error("allowed method {0:?} is not a valid HTTP method token")]
    InvalidAllowedMethod(String),
}

impl OverrideOptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.allowed_methods.is_empty() {
            return Err(ValidationError::EmptyAllowedMethods);
        }

        if let Some(invalid) = self
            .allowed_methods
            .iter()
            .find(|method| !is_http_token(method))
        {
            return Err(ValidationError::InvalidAllowedMethod(invalid.clone()));
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
