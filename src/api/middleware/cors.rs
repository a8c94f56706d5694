//! CORS middleware configuration
//!
//! Configures Cross-Origin Resource Sharing (CORS) to allow requests from
//! any origin, with standard preflight headers echoed on every response.

use tower_http::cors::CorsLayer;

/// Create the permissive CORS layer (all origins)
pub fn cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}
