#[cfg(test)]
mod test {

    use std::io::Write;

    use serial_test::serial;
    use tempfile::NamedTempFile;

    use crate::auth::{build_auth, AuthScheme};
    use crate::config::loader::load_config;

    const BASE: &str = r#"
settings:
  server:
    host: "127.0.0.1"
    port: "8080"
  metrics:
    is_enabled: false
upstream:
  base_url: https://api.example.com/api/V1
"#;

    fn write_config(yaml: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(yaml.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn oauth2_config_loads_with_default_margin() {
        let yaml = format!(
            "{BASE}auth:\n  oauth2:\n    token_url: https://id.example.com/connect/token\n    client_id:\n      value: client-abc\n    client_secret:\n      value: secret-xyz\n"
        );
        let file = write_config(&yaml);
        let config = load_config(file.path()).expect("config");

        assert_eq!(config.settings.safety_margin_seconds, Some(60));
        assert!(config.auth.oauth2.is_some());
        assert_eq!(config.upstream.base_url, "https://api.example.com/api/V1");
    }

    #[test]
    fn absent_credentials_fail_at_startup() {
        let file = write_config(BASE);
        let err = load_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("no credentials"));
    }

    #[test]
    fn multiple_auth_flavors_are_rejected() {
        let yaml = format!(
            "{BASE}auth:\n  api_key:\n    key:\n      value: key-123\n  oauth2:\n    token_url: https://id.example.com/connect/token\n    client_id:\n      value: client-abc\n    client_secret:\n      value: secret-xyz\n"
        );
        let file = write_config(&yaml);
        let err = load_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("mutually exclusive"));
    }

    #[test]
    #[serial]
    fn env_credentials_resolve_when_building_auth() {
        std::env::set_var("TOPUP_TEST_KEY", "key-from-env");

        let yaml = format!("{BASE}auth:\n  api_key:\n    key:\n      from_env: TOPUP_TEST_KEY\n");
        let file = write_config(&yaml);
        let config = load_config(file.path()).expect("config");

        let auth = build_auth(&config.auth, 60, &reqwest::Client::new()).expect("auth scheme");
        match auth {
            AuthScheme::ApiKey(key) => assert_eq!(key, "key-from-env"),
            other => panic!("expected api key scheme, got {:?}", other),
        }

        std::env::remove_var("TOPUP_TEST_KEY");
    }

    #[test]
    #[serial]
    fn unset_env_credential_is_an_error() {
        std::env::remove_var("TOPUP_TEST_MISSING_KEY");

        let yaml = format!("{BASE}auth:\n  api_key:\n    key:\n      from_env: TOPUP_TEST_MISSING_KEY\n");
        let file = write_config(&yaml);
        let config = load_config(file.path()).expect("config");

        let err = build_auth(&config.auth, 60, &reqwest::Client::new()).unwrap_err();
        assert!(err.to_string().contains("TOPUP_TEST_MISSING_KEY"));
    }
}
