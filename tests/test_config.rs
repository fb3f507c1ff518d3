use std::path::PathBuf;
use std::time::Duration;

use statik::config::{Config, ParseErrorPolicy};
use statik::http::response::ContentTypeStyle;

#[test]
fn test_config_defaults() {
    let cfg = Config::default();

    assert_eq!(cfg.server.backlog, 8);
    assert_eq!(cfg.server.max_connections, 64);
    assert_eq!(cfg.server.max_request_bytes, 8192);
    assert_eq!(cfg.static_files.root, PathBuf::from("public"));
    assert_eq!(cfg.static_files.content_type_style, ContentTypeStyle::Standard);
    assert_eq!(cfg.static_files.on_parse_error, ParseErrorPolicy::BadRequest);
    assert_eq!(cfg.read_timeout(), Duration::from_secs(30));
    assert_eq!(cfg.write_timeout(), Duration::from_secs(30));
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_config_partial_yaml_keeps_defaults() {
    let cfg = Config::from_yaml_str("server:\n  max_connections: 2\n").unwrap();

    assert_eq!(cfg.server.max_connections, 2);
    assert_eq!(cfg.server.backlog, 8);
    assert_eq!(cfg.static_files.root, PathBuf::from("public"));
}

#[test]
fn test_config_full_yaml() {
    let yaml = r#"
server:
  backlog: 16
  max_connections: 10
  max_request_bytes: 1024
  read_timeout_secs: 2
  write_timeout_secs: 3
static_files:
  root: /srv/www
  content_type_style: legacy
  on_parse_error: close
"#;
    let cfg = Config::from_yaml_str(yaml).unwrap();

    assert_eq!(cfg.server.backlog, 16);
    assert_eq!(cfg.server.max_request_bytes, 1024);
    assert_eq!(cfg.read_timeout(), Duration::from_secs(2));
    assert_eq!(cfg.write_timeout(), Duration::from_secs(3));
    assert_eq!(cfg.static_files.root, PathBuf::from("/srv/www"));
    assert_eq!(cfg.static_files.content_type_style, ContentTypeStyle::Legacy);
    assert_eq!(cfg.static_files.on_parse_error, ParseErrorPolicy::Close);
}

#[test]
fn test_config_rejects_unknown_style() {
    let result = Config::from_yaml_str("static_files:\n  content_type_style: fancy\n");
    assert!(result.is_err());
}

#[test]
fn test_config_validate_rejects_zero_values() {
    let mut cfg = Config::default();
    cfg.server.max_connections = 0;
    assert!(cfg.validate().is_err());

    let mut cfg = Config::default();
    cfg.server.max_request_bytes = 0;
    assert!(cfg.validate().is_err());

    let mut cfg = Config::default();
    cfg.server.read_timeout_secs = 0;
    assert!(cfg.validate().is_err());

    let mut cfg = Config::default();
    cfg.server.backlog = 0;
    assert!(cfg.validate().is_err());
}

#[test]
fn test_config_load_from_env() {
    let yaml = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/statik.yaml");

    // Only test in this binary touching the environment
    unsafe {
        std::env::remove_var("STATIK_ROOT");
        std::env::set_var("STATIK_CONFIG", yaml);
    }
    let cfg = Config::load().unwrap();
    assert_eq!(cfg.server.max_connections, 4);
    assert_eq!(cfg.static_files.root, PathBuf::from("tests/fixtures/public"));
    assert_eq!(cfg.static_files.on_parse_error, ParseErrorPolicy::Close);

    unsafe {
        std::env::set_var("STATIK_ROOT", "/srv/override");
    }
    let cfg = Config::load().unwrap();
    assert_eq!(cfg.static_files.root, PathBuf::from("/srv/override"));

    unsafe {
        std::env::set_var("STATIK_CONFIG", "/nonexistent/statik.yaml");
    }
    assert!(Config::load().is_err());

    unsafe {
        std::env::remove_var("STATIK_CONFIG");
        std::env::remove_var("STATIK_ROOT");
    }
    let cfg = Config::load().unwrap();
    assert_eq!(cfg.static_files.root, PathBuf::from("public"));
}

#[test]
fn test_config_clone() {
    let cfg1 = Config::default();
    let cfg2 = cfg1.clone();
    assert_eq!(cfg1.static_files.root, cfg2.static_files.root);
}
