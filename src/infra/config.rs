//! Centralized configuration (environment variables + defaults).

/// HTTP port to bind (defaults to 8082 when unset).
pub fn http_port() -> u16 {
    match std::env::var("HTTP_PORT") {
        Ok(v) => v.parse::<u16>().expect("HTTP_PORT must be a valid port number"),
        Err(_) => 8082,
    }
}

/// When true, skills are kept in process memory instead of Postgres.
pub fn use_db_mock() -> bool {
    std::env::var("USE_DB_MOCK")
        .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
        .unwrap_or(false)
}

/// Database URL must be provided (no default) for safety. Only read when the
/// Postgres backend is selected.
pub fn database_url() -> String {
    std::env::var("DATABASE_URL").expect("DATABASE_URL must be set")
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the HTTP_PORT mutations can't race each other.
    #[test]
    fn http_port_defaults_parses_and_rejects_garbage() {
        std::env::remove_var("HTTP_PORT");
        assert_eq!(http_port(), 8082);

        std::env::set_var("HTTP_PORT", "9090");
        assert_eq!(http_port(), 9090);

        // Present but unparsable must panic, not silently fall back.
        std::env::set_var("HTTP_PORT", "not-a-port");
        assert!(std::panic::catch_unwind(http_port).is_err());

        std::env::remove_var("HTTP_PORT");
    }
}
