use crate::constants::INVALID_OVERRIDE_STATUS;
use std::fmt;
use thiserror::Error;

/// Where an accepted override candidate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverrideSource {
    Header,
    Body,
}

impl OverrideSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverrideSource::Header => "header",
            OverrideSource::Body => "body",
        }
    }
}

impl fmt::Display for OverrideSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a successful resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverrideDecision {
    /// Downstream should see `method` instead of the transport method.
    Overridden {
        method: String,
        source: OverrideSource,
    },
    /// No override applies; the request keeps its method.
    Unchanged,
}

impl OverrideDecision {
    /// The method downstream handlers should observe.
    pub fn effective_method<'a>(&'a self, original: &'a str) -> &'a str {
        match self {
            OverrideDecision::Overridden { method, .. } => method,
            OverrideDecision::Unchanged => original,
        }
    }

    pub fn is_overridden(&self) -> bool {
        matches!(self, OverrideDecision::Overridden { .. })
    }
}

/// An override candidate that is not in the allowed set.
///
/// Hosts surface this as a `400 Bad Request` whose plain-text body is the `Display` output.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid overriden method: \"{method}\"")]
pub struct InvalidOverrideMethod {
    method: String,
}

impl InvalidOverrideMethod {
    pub const STATUS: u16 = INVALID_OVERRIDE_STATUS;

    pub(crate) fn new(method: String) -> Self {
        Self { method }
    }

    /// The rejected candidate, upper-cased.
    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn status(&self) -> u16 {
        Self::STATUS
    }
}

#[cfg(test)]
#[path = "result_test.rs"]
mod result_test;
