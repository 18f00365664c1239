use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn empty_environment_uses_defaults() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, ClientConfig::default());
    assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    assert_eq!(cfg.timeouts, Timeouts { request_secs: None, connect_secs: None });
    assert_eq!(cfg.canvas_size, 280);
}

#[test]
fn overrides_are_parsed() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[
        ("DIGITPAD_BASE_URL", "https://digits.example.test/"),
        ("DIGITPAD_REQUEST_TIMEOUT_SECS", "42"),
        ("DIGITPAD_CONNECT_TIMEOUT_SECS", " 7 "),
        ("DIGITPAD_CANVAS_SIZE", "200"),
    ]))
    .unwrap();
    assert_eq!(cfg.base_url, "https://digits.example.test");
    assert_eq!(cfg.timeouts, Timeouts { request_secs: Some(42), connect_secs: Some(7) });
    assert_eq!(cfg.canvas_size, 200);
}

#[test]
fn unparseable_numbers_fall_back_to_defaults() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[
        ("DIGITPAD_REQUEST_TIMEOUT_SECS", "soon"),
        ("DIGITPAD_CANVAS_SIZE", "-3"),
    ]))
    .unwrap();
    assert_eq!(cfg.timeouts.request_secs, None);
    assert_eq!(cfg.canvas_size, 280);
}

#[test]
fn zero_canvas_size_falls_back_to_default() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[("DIGITPAD_CANVAS_SIZE", "0")])).unwrap();
    assert_eq!(cfg.canvas_size, 280);
}

#[test]
fn blank_base_url_is_rejected() {
    let err = ClientConfig::from_lookup(lookup_from(&[("DIGITPAD_BASE_URL", " / ")])).unwrap_err();
    assert!(matches!(err, ClientError::Config(_)));
}

#[test]
fn with_base_url_trims_trailing_slashes() {
    let cfg = ClientConfig::default().with_base_url("http://localhost:9000//").unwrap();
    assert_eq!(cfg.base_url, "http://localhost:9000");
}

#[test]
fn zero_timeout_means_no_timeout() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[
        ("DIGITPAD_REQUEST_TIMEOUT_SECS", "0"),
        ("DIGITPAD_CONNECT_TIMEOUT_SECS", "3"),
    ]))
    .unwrap();
    assert_eq!(cfg.timeouts, Timeouts { request_secs: None, connect_secs: Some(3) });
}
