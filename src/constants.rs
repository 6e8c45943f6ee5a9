pub mod header {
    pub const X_HTTP_METHOD_OVERRIDE: &str = "X-Http-Method-Override";
}

pub mod body {
    pub const METHOD_FIELD: &str = "_method";
}

pub mod method {
    pub const DELETE: &str = "DELETE";
    pub const GET: &str = "GET";
    pub const HEAD: &str = "HEAD";
    pub const OPTIONS: &str = "OPTIONS";
    pub const PATCH: &str = "PATCH";
    pub const POST: &str = "POST";
    pub const PUT: &str = "PUT";
}

/// Status code hosts answer with when an override candidate is rejected.
pub const INVALID_OVERRIDE_STATUS: u16 = 400;
