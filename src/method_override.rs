use crate::case::normalize_upper;
use crate::constants::method;
use crate::context::RequestContext;
use crate::options::{OverrideOptions, ValidationError};
use crate::result::{InvalidOverrideMethod, OverrideDecision, OverrideSource};
use crate::util::non_blank;

/// Resolves the effective method of a request using [`OverrideOptions`].
#[derive(Debug, Clone, Default)]
pub struct MethodOverride {
    options: OverrideOptions,
}

impl MethodOverride {
    pub fn new(options: OverrideOptions) -> Result<Self, ValidationError> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &OverrideOptions {
        &self.options
    }

    /// Only `POST` requests are eligible. A non-blank header wins over the body field;
    /// the winning candidate must be in the allowed set or the request is rejected.
    ///
    /// Header values are trimmed. Body values are taken verbatim, so a padded or
    /// whitespace-only `_method` is rejected rather than ignored.
    pub fn resolve(
        &self,
        request: &RequestContext<'_>,
    ) -> Result<OverrideDecision, InvalidOverrideMethod> {
        if request.method != method::POST {
            return Ok(OverrideDecision::Unchanged);
        }

        let Some((raw, source)) = Self::candidate(request) else {
            return Ok(OverrideDecision::Unchanged);
        };

        let candidate = normalize_upper(raw);
        if !self.options.allowed_methods.allows_method(&candidate) {
            tracing::debug!(
                from = request.method,
                candidate = %candidate,
                source = source.as_str(),
                "rejected method override"
            );
            return Err(InvalidOverrideMethod::new(candidate));
        }

        tracing::debug!(
            from = request.method,
            to = %candidate,
            source = source.as_str(),
            "overriding request method"
        );

        Ok(OverrideDecision::Overridden {
            method: candidate,
            source,
        })
    }

    fn candidate<'a>(request: &RequestContext<'a>) -> Option<(&'a str, OverrideSource)> {
        non_blank(request.header_override)
            .map(|value| (value, OverrideSource::Header))
            .or_else(|| {
                request
                    .body_override
                    .filter(|value| !value.is_empty())
                    .map(|value| (value, OverrideSource::Body))
            })
    }
}

#[cfg(test)]
#[path = "method_override_test.rs"]
mod method_override_test;
