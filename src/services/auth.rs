//! Credentials attached to metadata requests.

/// How metadata requests are authorized.
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    /// Short-lived token from a login call, sent as `Authorization: Bearer`.
    Bearer(String),
    /// API key sent as the `api_key` query parameter.
    ApiKey(String),
}

impl Credential {
    /// Attach this credential to a request.
    pub fn apply(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self {
            Credential::Bearer(token) => {
                request.header("Authorization", format!("Bearer {}", token))
            }
            Credential::ApiKey(key) => request.query(&[("api_key", key.as_str())]),
        }
    }
}

// Keep secrets out of logs.
impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credential::Bearer(_) => f.write_str("Credential::Bearer(***)"),
            Credential::ApiKey(_) => f.write_str("Credential::ApiKey(***)"),
        }
    }
}
