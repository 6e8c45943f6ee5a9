use crate::constants::{body, header};
use crate::lookup::{BodySource, HeaderSource, lookup_body_field, lookup_header_ignore_case};

/// Borrowed view of the parts of a request that drive an override.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestContext<'a> {
    /// Method as received at the transport layer.
    pub method: &'a str,
    /// Value of `X-Http-Method-Override`, if sent.
    pub header_override: Option<&'a str>,
    /// Value of the `_method` body field, if the host parsed a body carrying one.
    pub body_override: Option<&'a str>,
}

impl<'a> RequestContext<'a> {
    pub fn new(method: &'a str) -> Self {
        Self {
            method,
            header_override: None,
            body_override: None,
        }
    }

    /// Builds a context from host headers and an optional parsed body.
    pub fn from_parts<H, B>(method: &'a str, headers: &'a H, parsed_body: Option<&'a B>) -> Self
    where
        H: HeaderSource + ?Sized,
        B: BodySource + ?Sized,
    {
        Self {
            method,
            header_override: lookup_header_ignore_case(headers, header::X_HTTP_METHOD_OVERRIDE),
            body_override: parsed_body
                .and_then(|fields| lookup_body_field(fields, body::METHOD_FIELD)),
        }
    }

    /// Builds a context for a request whose body was not parsed.
    pub fn from_headers<H>(method: &'a str, headers: &'a H) -> Self
    where
        H: HeaderSource + ?Sized,
    {
        Self {
            method,
            header_override: lookup_header_ignore_case(headers, header::X_HTTP_METHOD_OVERRIDE),
            body_override: None,
        }
    }

    pub fn with_header_override(mut self, value: &'a str) -> Self {
        self.header_override = Some(value);
        self
    }

    pub fn with_body_override(mut self, value: &'a str) -> Self {
        self.body_override = Some(value);
        self
    }
}

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;
