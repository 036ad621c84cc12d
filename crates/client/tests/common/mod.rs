//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root

#[allow(unused_imports)]
pub use alignak_backend_client::testing::{items_page, load_fixture};
#[allow(unused_imports)]
pub use alignak_backend_client::{AuthStrategy, BackendClient, endpoints};
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use secrecy::SecretString;

/// Basic auth header the backend expects for `static-token`.
#[allow(dead_code)]
pub const STATIC_TOKEN_AUTH: &str = "Basic c3RhdGljLXRva2VuOg==";

/// Basic auth header for the token in `auth/login_success.json`.
#[allow(dead_code)]
pub const LOGIN_TOKEN_AUTH: &str =
    "Basic MTQ0MjU4MzgxNDYzNi1iZWQzMjU2NS0yZmY3LTQwMjMtODdmYi0zNGEzYTNkNGUxZDc6";

/// A client for `server` holding the pre-obtained `static-token`.
#[allow(dead_code)]
pub fn token_client(server: &MockServer) -> BackendClient {
    BackendClient::builder()
        .base_url(server.uri())
        .auth_strategy(AuthStrategy::Token {
            token: SecretString::new("static-token".to_string().into()),
        })
        .max_retries(0)
        .build()
        .expect("client builds")
}

/// A client for `server` that logs in as `admin`.
#[allow(dead_code)]
pub fn login_client(server: &MockServer, allow_generate_token: bool) -> BackendClient {
    BackendClient::builder()
        .base_url(server.uri())
        .auth_strategy(AuthStrategy::Login {
            username: "admin".to_string(),
            password: SecretString::new("admin".to_string().into()),
            allow_generate_token,
        })
        .max_retries(0)
        .build()
        .expect("client builds")
}
