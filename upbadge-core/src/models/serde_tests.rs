//! Serde round-trip tests for core types.
//!
//! The serde shapes here double as the persisted record shapes, so these
//! tests pin the wire format as much as the Rust API.

use chrono::Utc;

use crate::{HistoryPoint, MonitorConfig, ProbeErrorKind, ProbeOutcome, ServedFrom, Theme};

// ============================================================================
// Theme Serde Tests
// ============================================================================

#[test]
fn test_theme_serde_roundtrip_all_variants() {
    for theme in Theme::all() {
        let json = serde_json::to_string(theme).unwrap();
        let deserialized: Theme = serde_json::from_str(&json).unwrap();
        assert_eq!(*theme, deserialized, "Round-trip failed for {theme:?}");
    }
}

#[test]
fn test_theme_deserialize_lowercase() {
    let test_cases = vec![
        (r#""default""#, Theme::Default),
        (r#""dark""#, Theme::Dark),
        (r#""minimal""#, Theme::Minimal),
    ];

    for (json, expected) in test_cases {
        let result: Theme = serde_json::from_str(json).unwrap();
        assert_eq!(result, expected, "Failed for {json}");
    }
}

// ============================================================================
// MonitorConfig Serde Tests
// ============================================================================

#[test]
fn test_monitor_config_roundtrip() {
    let config = MonitorConfig::new("xk29fa01", "https://example.com", "Example API", Theme::Dark);

    let json = serde_json::to_string(&config).unwrap();
    let parsed: MonitorConfig = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed, config);
}

#[test]
fn test_monitor_config_theme_defaults_when_absent() {
    // Configs written before the theme field existed have no `theme` key.
    let json = format!(
        r#"{{"id":"ab01cd23","target_url":"https://example.com","display_name":"Example","created_at":"{}"}}"#,
        Utc::now().to_rfc3339()
    );
    let parsed: MonitorConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.theme, Theme::Default);
}

// ============================================================================
// ProbeOutcome Serde Tests
// ============================================================================

#[test]
fn test_probe_outcome_roundtrip() {
    let outcome = ProbeOutcome::responded(true, 301, 145);
    let json = serde_json::to_string(&outcome).unwrap();
    let parsed: ProbeOutcome = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, outcome);
}

#[test]
fn test_probe_outcome_omits_absent_fields() {
    let outcome = ProbeOutcome::responded(true, 200, 10);
    let json = serde_json::to_value(&outcome).unwrap();
    assert!(json.get("error_kind").is_none());

    let failed = ProbeOutcome::failed(ProbeErrorKind::TransportError, 33);
    let json = serde_json::to_value(&failed).unwrap();
    assert!(json.get("status_code").is_none());
    assert_eq!(json["error_kind"], "transport_error");
}

#[test]
fn test_probe_error_kind_snake_case() {
    let json = serde_json::to_string(&ProbeErrorKind::Timeout).unwrap();
    assert_eq!(json, r#""timeout""#);
    let parsed: ProbeErrorKind = serde_json::from_str(r#""transport_error""#).unwrap();
    assert_eq!(parsed, ProbeErrorKind::TransportError);
}

// ============================================================================
// ServedFrom / HistoryPoint Serde Tests
// ============================================================================

#[test]
fn test_served_from_kebab_case() {
    let json = serde_json::to_string(&ServedFrom::StaleRefreshing).unwrap();
    assert_eq!(json, r#""stale-refreshing""#);
    let parsed: ServedFrom = serde_json::from_str(r#""miss-refreshed""#).unwrap();
    assert_eq!(parsed, ServedFrom::MissRefreshed);
}

#[test]
fn test_history_point_roundtrip() {
    let point = HistoryPoint {
        timestamp: Utc::now(),
        online: true,
        response_time_ms: 250,
    };
    let json = serde_json::to_string(&point).unwrap();
    let parsed: HistoryPoint = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, point);
}
