//! HTTP middleware (CORS, 404 handler)

use axum::extract::Request;
use axum::http::{HeaderValue, Method, header};
use axum::response::IntoResponse;
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::api::types::ApiError;
use crate::core::config::is_all_interfaces;

/// Allowed origins configuration
#[derive(Debug, Clone)]
pub struct AllowedOrigins {
    origins: Vec<String>,
}

impl AllowedOrigins {
    /// Create allowed origins from host and port configuration
    pub fn new(host: &str, port: u16) -> Self {
        let mut origins = Vec::new();
        let dev_port = port + 1;
        let is_all = is_all_interfaces(host);

        // When binding to all interfaces or localhost, allow both localhost
        // and 127.0.0.1; otherwise use the configured host directly.
        let base_hosts: Vec<&str> = if is_all || host == "127.0.0.1" || host == "localhost" {
            vec!["localhost", "127.0.0.1"]
        } else {
            vec![host]
        };

        for h in &base_hosts {
            origins.push(format!("http://{}:{}", h, port));
            origins.push(format!("http://{}:{}", h, dev_port));
            origins.push(format!("http://{}", h));
        }

        Self { origins }
    }

    /// Check if an origin is allowed
    pub fn is_allowed(&self, origin: &str) -> bool {
        self.origins.iter().any(|o| o == origin)
    }

    /// Get origins as HeaderValues for CORS
    fn as_header_values(&self) -> Vec<HeaderValue> {
        self.origins.iter().filter_map(|o| o.parse().ok()).collect()
    }
}

/// Create CORS layer
pub fn cors(allowed: &AllowedOrigins) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed.as_header_values()))
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::ORIGIN,
            header::CACHE_CONTROL,
        ])
}

/// Handle 404 Not Found with logging
pub async fn handle_404(req: Request) -> impl IntoResponse {
    tracing::debug!("[404] {} {}", req.method(), req.uri());
    ApiError::not_found("ROUTE_NOT_FOUND", "The requested route does not exist")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn localhost_origins_include_both_aliases() {
        let allowed = AllowedOrigins::new("127.0.0.1", 5170);
        assert!(allowed.is_allowed("http://localhost:5170"));
        assert!(allowed.is_allowed("http://127.0.0.1:5170"));
        assert!(allowed.is_allowed("http://localhost:5171"));
        assert!(!allowed.is_allowed("http://evil.example.com"));
    }

    #[test]
    fn explicit_host_is_used_directly() {
        let allowed = AllowedOrigins::new("parks.example.com", 80);
        assert!(allowed.is_allowed("http://parks.example.com:80"));
        assert!(allowed.is_allowed("http://parks.example.com"));
        assert!(!allowed.is_allowed("http://localhost:80"));
    }

    #[tokio::test]
    async fn unknown_route_returns_structured_404() {
        let request = axum::http::Request::builder()
            .uri("/no/such/route")
            .body(axum::body::Body::empty())
            .unwrap();
        let response = handle_404(request).await.into_response();
        assert_eq!(response.status(), axum::http::StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "not_found");
        assert_eq!(body["code"], "ROUTE_NOT_FOUND");
    }
}
