use reqwest::RequestBuilder;

/// Request header carrying a static deployment key.
pub const API_KEY_HEADER: &str = "api-key";

/// Credential attached to outbound deployment requests.
///
/// Serverless deployments accept either a static key in the `api-key` header
/// or a token as a standard bearer authorization. Pick one per client; there
/// is no fallback chain.
#[derive(Debug, Clone)]
pub enum Credential {
    /// Sent as an `api-key` request header.
    ApiKey(String),
    /// Sent as `Authorization: Bearer <token>`.
    Bearer(String),
}

impl Credential {
    /// Attach the credential to an outbound request.
    pub fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        match self {
            Credential::ApiKey(key) => builder.header(API_KEY_HEADER, key),
            Credential::Bearer(token) => builder.bearer_auth(token),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_goes_into_api_key_header() {
        let client = reqwest::Client::new();
        let req = Credential::ApiKey("secret".into())
            .apply(client.post("http://localhost/chat/completions"))
            .build()
            .unwrap();
        assert_eq!(req.headers()[API_KEY_HEADER], "secret");
        assert!(req.headers().get(http::header::AUTHORIZATION).is_none());
    }

    #[test]
    fn bearer_goes_into_authorization_header() {
        let client = reqwest::Client::new();
        let req = Credential::Bearer("tok".into())
            .apply(client.post("http://localhost/chat/completions"))
            .build()
            .unwrap();
        assert_eq!(req.headers()[http::header::AUTHORIZATION], "Bearer tok");
        assert!(req.headers().get(API_KEY_HEADER).is_none());
    }
}
