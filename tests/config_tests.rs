//! Configuration loading tests

use confenv::{ConfigError, ConfigRecord, Format, load_config, load_config_from_str};
use rstest::rstest;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn fixture(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(path)
}

#[rstest]
#[case("good/test-config.hcl", "Test Config HCL", "http://localhost:8089/base_url_hcl", "testHCL")]
#[case("good/test-config.toml", "Test Config TOML", "http://localhost:8089/base_url_toml", "testTOML")]
#[case("good/test-config.xml", "Test Config XML", "http://localhost:8089/base_url_xml", "testXML")]
#[case("good/test-config.yml", "Test Config YAML", "http://localhost:8089/base_url_yaml", "testYAML")]
#[case("good/test-config.json", "Test Config JSON", "http://localhost:8089/base_url_json", "testJSON")]
fn test_good_config(
    #[case] file: &str,
    #[case] name: &str,
    #[case] base_url: &str,
    #[case] driver: &str,
) {
    let config = load_config(fixture(file)).unwrap();

    assert_eq!(config.name, name);
    assert_eq!(config.base_url, base_url);
    assert_eq!(config.driver, driver);
}

#[rstest]
#[case("bad/test-config.hcl", Format::Hcl)]
#[case("bad/test-config.toml", Format::Toml)]
#[case("bad/test-config.xml", Format::Xml)]
#[case("bad/test-config.yml", Format::Yaml)]
#[case("bad/test-config.json", Format::Json)]
fn test_bad_config(#[case] file: &str, #[case] expected: Format) {
    let err = load_config(fixture(file)).unwrap_err();

    match err {
        ConfigError::Parse { format, .. } => assert_eq!(format, expected),
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[test]
fn test_no_config_file() {
    let err = load_config(fixture("bad/test-config.hcl1")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_invalid_config_file_extension() {
    let err = load_config(fixture("test-config.hc")).unwrap_err();

    assert!(matches!(err, ConfigError::UnsupportedFormat));
    assert_eq!(
        err.to_string(),
        "config file format not supported. Supported formats are json, xml, yaml, toml, hcl"
    );
}

#[rstest]
#[case("config.json", r#"{"driver": "mysql"}"#)]
#[case("config.xml", "<config><driver>mysql</driver></config>")]
#[case("config.yml", "driver: mysql\n")]
#[case("config.toml", "driver = \"mysql\"\n")]
#[case("config.hcl", "driver = \"mysql\"\n")]
fn test_partial_config_keeps_defaults(#[case] file: &str, #[case] content: &str) {
    let dir = tempdir().unwrap();
    let path = dir.path().join(file);
    fs::write(&path, content).unwrap();

    let config = load_config(&path).unwrap();

    assert_eq!(config.name, "No name");
    assert_eq!(config.base_url, "No base url");
    assert_eq!(config.driver, "mysql");
}

#[rstest]
#[case(Format::Json)]
#[case(Format::Xml)]
#[case(Format::Yaml)]
#[case(Format::Toml)]
#[case(Format::Hcl)]
fn test_round_trip(#[case] format: Format) {
    let original = ConfigRecord {
        name: "Round Trip".to_string(),
        base_url: "https://example.com/api?x=1&y=2".to_string(),
        driver: "sqlite".to_string(),
    };

    let serialized = match format {
        Format::Json => serde_json::to_string_pretty(&original).unwrap(),
        Format::Xml => quick_xml::se::to_string_with_root("config", &original).unwrap(),
        Format::Yaml => serde_yaml::to_string(&original).unwrap(),
        Format::Toml => toml::to_string(&original).unwrap(),
        Format::Hcl => hcl::to_string(&original).unwrap(),
    };

    let dir = tempdir().unwrap();
    let path = dir.path().join(format!("config.{}", format.extension()));
    fs::write(&path, serialized).unwrap();

    assert_eq!(load_config(&path).unwrap(), original);
}

#[test]
fn test_load_config_from_str_matches_file() {
    let content = fs::read_to_string(fixture("good/test-config.toml")).unwrap();

    let from_str = load_config_from_str(&content, Format::Toml).unwrap();
    let from_file = load_config(fixture("good/test-config.toml")).unwrap();

    assert_eq!(from_str, from_file);
}

#[test]
fn test_yaml_extension_is_not_yml() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "name: long extension\n").unwrap();

    let err = load_config(&path).unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedFormat));
}

#[test]
fn test_sample_config_loads() {
    let config = load_config(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("config/config.json"))
        .unwrap();

    assert_eq!(config.name, "confenv");
    assert_eq!(config.base_url, "http://localhost:8080");
    assert_eq!(config.driver, "postgres");
}

#[rstest]
#[case("config.json", r#"{"name": null, "driver": "mysql"}"#)]
#[case("config.yml", "name: ~\ndriver: mysql\n")]
fn test_null_value_keeps_default(#[case] file: &str, #[case] content: &str) {
    let dir = tempdir().unwrap();
    let path = dir.path().join(file);
    fs::write(&path, content).unwrap();

    let config = load_config(&path).unwrap();

    assert_eq!(config.name, "No name");
    assert_eq!(config.driver, "mysql");
}
