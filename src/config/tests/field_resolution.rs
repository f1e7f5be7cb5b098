//! Tests for API URL, credential, filter and path resolution.

use rstest::rstest;

use crate::ShipdeskConfig;
use crate::api::{ApiError, DEFAULT_API_BASE_URL};
use crate::export::ExportFormat;
use crate::persistence::PersistenceError;

#[rstest]
fn api_config_defaults_to_local_server() {
    let api = ShipdeskConfig::default()
        .api_config()
        .expect("default URL is valid");

    assert_eq!(api.base_url, DEFAULT_API_BASE_URL);
}

#[rstest]
fn api_config_strips_trailing_slash() {
    let config = ShipdeskConfig {
        api_url: Some("https://api.example.com/".to_owned()),
        ..Default::default()
    };

    let api = config.api_config().expect("URL should be valid");

    assert_eq!(api.endpoint("/auth/login"), "https://api.example.com/auth/login");
}

#[rstest]
fn require_database_url_reports_missing_value() {
    assert_eq!(
        ShipdeskConfig::default().require_database_url(),
        Err(PersistenceError::MissingDatabaseUrl)
    );
}

#[rstest]
fn credentials_validate_email_and_password() {
    let config = ShipdeskConfig {
        email: Some("ana@example.com".to_owned()),
        password: Some("secreto".to_owned()),
        ..Default::default()
    };

    let credentials = config.credentials().expect("credentials should validate");

    assert_eq!(credentials.email, "ana@example.com");
}

#[rstest]
fn missing_credentials_list_each_field() {
    let error = ShipdeskConfig::default()
        .credentials()
        .expect_err("blank credentials should fail");

    let ApiError::Validation { message } = error else {
        panic!("expected validation error, got {error:?}");
    };
    assert!(message.contains("email: Email is required"), "{message}");
    assert!(message.contains("password:"), "{message}");
}

#[rstest]
#[case::unset(None, None)]
#[case::markdown(Some("md"), Some(ExportFormat::Markdown))]
#[case::jsonl(Some("jsonl"), Some(ExportFormat::Jsonl))]
fn export_format_parses_optional_value(
    #[case] raw: Option<&str>,
    #[case] expected: Option<ExportFormat>,
) {
    let config = ShipdeskConfig {
        export: raw.map(str::to_owned),
        ..Default::default()
    };

    assert_eq!(config.export_format().expect("format should parse"), expected);
}

#[rstest]
fn filter_criteria_combine_query_and_range() {
    let config = ShipdeskConfig {
        query: Some("ana".to_owned()),
        date_range: Some("2024-01-16..2024-01-17".to_owned()),
        ..Default::default()
    };

    let criteria = config.filter_criteria().expect("criteria should build");

    assert_eq!(criteria.query, "ana");
    let range = criteria.date_range.expect("range should be set");
    assert_eq!(range.start().to_string(), "2024-01-16");
    assert_eq!(range.end().to_string(), "2024-01-17");
}

#[rstest]
fn blank_date_range_means_no_range() {
    let config = ShipdeskConfig {
        date_range: Some("  ".to_owned()),
        ..Default::default()
    };

    let criteria = config.filter_criteria().expect("criteria should build");

    assert!(criteria.is_empty());
}

#[rstest]
fn paths_are_exposed_as_utf8() {
    let config = ShipdeskConfig {
        shipments_file: Some("data/shipments.json".to_owned()),
        output: Some("out.md".to_owned()),
        ..Default::default()
    };

    assert_eq!(
        config.shipments_path().as_deref().map(camino::Utf8Path::as_str),
        Some("data/shipments.json")
    );
    assert_eq!(config.output_path().as_deref().map(camino::Utf8Path::as_str), Some("out.md"));
}
