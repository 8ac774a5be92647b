use console_core::ApiClient;

/// Client for the configured API, optionally carrying a session token.
pub fn client(token: Option<String>) -> ApiClient {
    let client = ApiClient::new(console_core::config::config().api.clone());
    match token {
        Some(token) => client.with_token(token),
        None => client,
    }
}
