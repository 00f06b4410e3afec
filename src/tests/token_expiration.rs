#[cfg(test)]
mod test {

    use crate::auth::oauth2::compute_expires_at;
    use crate::auth::token::CachedToken;

    #[test]
    fn validity_window_applies_safety_margin() {
        let issued_at = 1_700_000_000;
        // declared lifetime 3600s, margin 60s
        let expires_at = compute_expires_at(issued_at, Some(3600), 60);
        assert_eq!(expires_at, issued_at + 3540);

        let token = CachedToken::new("tok".into(), expires_at);
        assert!(token.is_valid_at(issued_at));
        assert!(token.is_valid_at(issued_at + 3539));
        // invalid strictly before the real expiry
        assert!(!token.is_valid_at(issued_at + 3540));
        assert!(!token.is_valid_at(issued_at + 3541));
    }

    #[test]
    fn missing_lifetime_defaults_to_one_hour() {
        let issued_at = 1_700_000_000;
        let expires_at = compute_expires_at(issued_at, None, 60);
        assert_eq!(expires_at, issued_at + 3600 - 60);
    }
}
