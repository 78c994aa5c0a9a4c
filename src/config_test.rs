use super::*;

/// # Safety
/// Only `from_env_uses_defaults_then_reads_overrides` touches these variables.
unsafe fn clear_host_env() {
    unsafe {
        std::env::remove_var("HOST");
        std::env::remove_var("PORT");
    }
}

// Both env-driven cases share one test so they never race on HOST/PORT.
#[test]
fn from_env_uses_defaults_then_reads_overrides() {
    unsafe { clear_host_env() };

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.host, DEFAULT_HOST);
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.addr().to_string(), "0.0.0.0:3000");

    unsafe {
        std::env::set_var("HOST", "127.0.0.1");
        std::env::set_var("PORT", "8080");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.addr().to_string(), "127.0.0.1:8080");

    unsafe {
        std::env::set_var("PORT", "eighty");
    }
    assert_eq!(ServerConfig::from_env(), Err(ConfigError::InvalidPort("eighty".into())));

    unsafe { clear_host_env() };
}

#[test]
fn parse_port_rejects_garbage() {
    assert_eq!(parse_port(Some("http")), Err(ConfigError::InvalidPort("http".into())));
    assert_eq!(parse_port(Some("70000")), Err(ConfigError::InvalidPort("70000".into())));
}

#[test]
fn parse_port_treats_blank_as_default() {
    assert_eq!(parse_port(Some("  ")), Ok(DEFAULT_PORT));
    assert_eq!(parse_port(None), Ok(DEFAULT_PORT));
}

#[test]
fn parse_host_accepts_ipv6() {
    assert_eq!(parse_host(Some("::1")), Ok("::1".parse::<IpAddr>().unwrap()));
}

#[test]
fn parse_host_rejects_names() {
    assert_eq!(parse_host(Some("localhost")), Err(ConfigError::InvalidHost("localhost".into())));
}
