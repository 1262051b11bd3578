//! CORS layer configuration.
//!
//! Allowed origins may be exact (`https://booster.fruitice.fr`), the
//! catch-all `*`, or patterns where `*` matches any run of characters
//! (`https://*.booster.fruitice.fr`, `http://localhost:*`).

use std::time::Duration;

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use booster_core::config::CorsConfig;

/// Builds a CORS tower layer from configuration.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let mut layer = CorsLayer::new();

    // Origins
    if config.allowed_origins.iter().any(|o| o == "*") {
        layer = layer.allow_origin(Any);
    } else {
        let patterns = config.allowed_origins.clone();
        layer = layer.allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _parts| {
                origin
                    .to_str()
                    .map(|origin| patterns.iter().any(|p| origin_matches(p, origin)))
                    .unwrap_or(false)
            },
        ));
    }

    // Methods
    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    layer = layer.allow_methods(methods);

    // Headers
    if config.allowed_headers.iter().any(|h| h == "*") {
        layer = layer.allow_headers(Any);
    } else {
        let headers: Vec<HeaderName> = config
            .allowed_headers
            .iter()
            .filter_map(|h| h.parse().ok())
            .collect();
        layer = layer.allow_headers(headers);
    }

    layer.max_age(Duration::from_secs(config.max_age_seconds))
}

/// Matches an origin against a pattern where `*` stands for any run of
/// characters, including none.
pub fn origin_matches(pattern: &str, origin: &str) -> bool {
    if !pattern.contains('*') {
        return pattern.eq_ignore_ascii_case(origin);
    }

    let pattern = pattern.to_ascii_lowercase();
    let origin = origin.to_ascii_lowercase();
    let mut parts = pattern.split('*');

    // The first segment is anchored at the start.
    let first = parts.next().unwrap_or_default();
    let Some(mut rest) = origin.strip_prefix(first) else {
        return false;
    };

    let segments: Vec<&str> = parts.collect();
    let Some((last, middle)) = segments.split_last() else {
        return rest.is_empty();
    };

    for segment in middle {
        match rest.find(segment) {
            Some(pos) => rest = &rest[pos + segment.len()..],
            None => return false,
        }
    }

    // The last segment is anchored at the end.
    rest.ends_with(last)
}
