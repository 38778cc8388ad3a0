use http::Method;

pub const HEADER_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
pub const HEADER_ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
pub const HEADER_ALLOW_METHODS: &str = "Access-Control-Allow-Methods";

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_HEADERS: &str =
    "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token";
pub const ALLOW_METHODS: &str = "OPTIONS,POST";

/// The permissive cross-origin headers attached to every response.
pub fn cors_headers() -> [(&'static str, &'static str); 3] {
    [
        (HEADER_ALLOW_ORIGIN, ALLOW_ORIGIN),
        (HEADER_ALLOW_HEADERS, ALLOW_HEADERS),
        (HEADER_ALLOW_METHODS, ALLOW_METHODS),
    ]
}

/// Whether the request is a browser pre-flight probe.
pub fn is_preflight(method: &Method) -> bool {
    *method == Method::OPTIONS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_headers_values() {
        let headers = cors_headers();
        assert_eq!(headers[0], ("Access-Control-Allow-Origin", "*"));
        assert_eq!(
            headers[1],
            (
                "Access-Control-Allow-Headers",
                "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token"
            )
        );
        assert_eq!(headers[2], ("Access-Control-Allow-Methods", "OPTIONS,POST"));
    }

    #[test]
    fn test_is_preflight() {
        assert!(is_preflight(&Method::OPTIONS));
        assert!(!is_preflight(&Method::POST));
        assert!(!is_preflight(&Method::GET));
    }
}
