mod allowed_methods;
mod case;
pub mod constants;
mod context;
mod lookup;
mod method_override;
mod options;
mod result;
mod util;

pub use allowed_methods::AllowedMethods;
pub use context::RequestContext;
pub use lookup::{BodySource, HeaderSource, lookup_body_field, lookup_header_ignore_case};
pub use method_override::MethodOverride;
pub use options::{OverrideOptions, ValidationError};
pub use result::{InvalidOverrideMethod, OverrideDecision, OverrideSource};
