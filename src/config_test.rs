use super::*;

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_host_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("LWMS_API_BASE_URL");
        std::env::remove_var("LWMS_READY_TIMEOUT_SECS");
    }
}

#[test]
fn from_env_uses_defaults() {
    unsafe { clear_host_env() };

    let cfg = Config::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api_base_url, "http://localhost:8080");
    assert_eq!(cfg.ready_timeout_secs, DEFAULT_READY_TIMEOUT_SECS);
}

#[test]
fn from_env_reads_overrides() {
    unsafe {
        clear_host_env();
        std::env::set_var("PORT", "8123");
        std::env::set_var("LWMS_API_BASE_URL", "https://wms.example.test/api/");
        std::env::set_var("LWMS_READY_TIMEOUT_SECS", "9");
    }

    let cfg = Config::from_env().unwrap();
    assert_eq!(cfg.port, 8123);
    assert_eq!(cfg.api_base_url, "https://wms.example.test/api");
    assert_eq!(cfg.ready_timeout_secs, 9);

    unsafe { clear_host_env() };
}

#[test]
fn from_env_rejects_bad_port() {
    unsafe {
        clear_host_env();
        std::env::set_var("PORT", "eighty");
    }

    assert_eq!(Config::from_env(), Err(ConfigError::InvalidPort("eighty".into())));

    unsafe { clear_host_env() };
}

#[test]
fn blank_api_base_falls_back_to_default() {
    assert_eq!(parse_api_base(Some("   ")).unwrap(), "http://localhost:8080");
}

#[test]
fn api_base_requires_http_scheme() {
    assert_eq!(parse_api_base(Some("ftp://x")), Err(ConfigError::InvalidApiBase("ftp://x".into())));
}

#[test]
fn from_env_rejects_bad_ready_timeout() {
    unsafe {
        clear_host_env();
        std::env::set_var("LWMS_READY_TIMEOUT_SECS", "soon");
    }

    assert_eq!(Config::from_env(), Err(ConfigError::InvalidReadyTimeout("soon".into())));

    unsafe { clear_host_env() };
}

#[test]
fn zero_ready_timeout_is_rejected() {
    assert_eq!(parse_ready_timeout("0"), Err(ConfigError::InvalidReadyTimeout("0".into())));
    assert_eq!(parse_ready_timeout(" 12 "), Ok(12));
}
