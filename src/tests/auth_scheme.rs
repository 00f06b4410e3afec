#[cfg(test)]
mod test {

    use crate::auth::AuthScheme;

    #[tokio::test]
    async fn api_key_scheme_renders_bearer_header() {
        let scheme = AuthScheme::ApiKey("key-123".to_string());
        let header = scheme.authorization_header().await.expect("header");
        assert_eq!(header, "Bearer key-123");
    }

    #[tokio::test]
    async fn basic_scheme_renders_encoded_header() {
        let scheme = AuthScheme::Basic {
            username: "user".to_string(),
            password: "pass".to_string(),
        };
        let header = scheme.authorization_header().await.expect("header");
        assert_eq!(header, "Basic dXNlcjpwYXNz");
    }
}
