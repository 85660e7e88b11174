pub mod gemini;

use actix_cors::Cors;

/// Open policy: the proxy performs no authentication of its own, so any
/// browser origin may call it, credentials included.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
}
