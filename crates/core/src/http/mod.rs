//! HTTP-facing pieces of the functional core: the cross-origin headers, the
//! proxy response envelope, and the error to status code mapping.

mod cors;
mod envelope;
mod status;

pub use cors::{
    cors_headers, is_preflight, ALLOW_HEADERS, ALLOW_METHODS, ALLOW_ORIGIN,
    HEADER_ALLOW_HEADERS, HEADER_ALLOW_METHODS, HEADER_ALLOW_ORIGIN,
};
pub use envelope::ProxyResponse;
pub use status::record_error_to_status_code;
