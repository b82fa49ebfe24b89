//! Tests for the external schema adapters and documents.

use crate::config::{Config, ConfigVersion, IdPaths, IgnoreIdPaths};
use crate::error::ConfigError;
use crate::external::{
    ExternalConfig, OutputFormat, config_from_external, detect_version, external_from_config,
    migrate, parse_document, render, render_document,
};
use crate::ignore_only::IgnoreOnly;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn sample_external() -> ExternalConfig {
    ExternalConfig {
        use_ids: strings(&["FILE"]),
        except_ids: strings(&["FIELD_SAME_JSON_NAME"]),
        ignore: strings(&["foo", "bar/baz.proto"]),
        ignore_only: IgnoreOnly::new(vec![
            IdPaths::new("WIRE", ["c"]),
            IdPaths::new("FIELD_SAME_TYPE", ["a", "b"]),
        ]),
        ignore_unstable_packages: true,
    }
}

#[test]
fn test_config_from_external_copies_fields() {
    for version in ConfigVersion::ALL {
        let config = config_from_external(version, sample_external());

        assert_eq!(config.use_ids, vec!["FILE"]);
        assert_eq!(config.except_ids, vec!["FIELD_SAME_JSON_NAME"]);
        assert_eq!(config.ignore_root_paths, vec!["foo", "bar/baz.proto"]);
        assert_eq!(
            config.ignore_id_or_category_to_root_paths.to_pairs(),
            vec![
                IdPaths::new("WIRE", ["c"]),
                IdPaths::new("FIELD_SAME_TYPE", ["a", "b"]),
            ]
        );
        assert!(config.ignore_unstable_packages);
        assert_eq!(config.version, version.as_str());
    }
}

#[test]
fn test_config_from_external_collapses_duplicates() {
    let external = ExternalConfig {
        ignore_only: IgnoreOnly::new(vec![
            IdPaths::new("RULE1", ["first"]),
            IdPaths::new("RULE1", ["second"]),
        ]),
        ..ExternalConfig::default()
    };
    let config = config_from_external(ConfigVersion::V1, external);

    assert_eq!(config.ignore_id_or_category_to_root_paths.len(), 1);
    assert_eq!(
        config.ignore_id_or_category_to_root_paths.get("RULE1"),
        Some(&["second".to_string()][..])
    );
}

#[test]
fn test_external_round_trip_preserves_order() {
    let external = sample_external();
    let config = config_from_external(ConfigVersion::V1, external.clone());
    assert_eq!(external_from_config(ConfigVersion::V1, &config), external);
}

#[test]
fn test_external_from_config_keeps_empty_path_entries() {
    let mut config = Config::new(ConfigVersion::V1);
    config.ignore_id_or_category_to_root_paths =
        IgnoreIdPaths::from_pairs(vec![IdPaths::new("RULE3", Vec::<String>::new())]);

    let external = external_from_config(ConfigVersion::V1, &config);
    assert_eq!(external.ignore_only.id_to_paths.len(), 1);
    assert!(external.ignore_only.is_omitted());
}

#[test]
fn test_external_yaml_field_names() {
    let yaml = serde_yaml::to_string(&sample_external()).unwrap();
    let value: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();

    assert!(value.get("use").is_some());
    assert!(value.get("except").is_some());
    assert!(value.get("ignore").is_some());
    assert!(value.get("ignore_only").is_some());
    assert_eq!(
        value.get("ignore_unstable_packages"),
        Some(&serde_yaml::Value::Bool(true))
    );
}

#[test]
fn test_external_yaml_omits_empty_fields() {
    let external = ExternalConfig {
        ignore_only: IgnoreOnly::new(vec![IdPaths::new("RULE3", Vec::<String>::new())]),
        ..ExternalConfig::default()
    };
    let yaml = serde_yaml::to_string(&external).unwrap();
    assert_eq!(yaml.trim(), "{}");
}

#[test]
fn test_detect_version() {
    assert_eq!(
        detect_version("version: v1beta1\n").unwrap(),
        ConfigVersion::V1Beta1
    );
    assert_eq!(
        detect_version("version: v1\nlint:\n  use: [DEFAULT]\n").unwrap(),
        ConfigVersion::V1
    );
}

#[test]
fn test_detect_version_rejects_unknown() {
    let err = detect_version("version: v2\n").unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedVersion(ref v) if v == "v2"));

    let err = detect_version("breaking: {}\n").unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedVersion(ref v) if v.is_empty()));
}

#[test]
fn test_detect_version_is_exact() {
    for text in ["version: \" v1\"\n", "version: \"v1 \"\n", "version: V1\n"] {
        let err = detect_version(text).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedVersion(_)), "{text}");
    }
}

#[test]
fn test_parse_document_full() {
    let yaml = r#"
version: v1
lint:
  use:
    - DEFAULT
breaking:
  use:
    - FILE
  except:
    - FIELD_SAME_JSON_NAME
  ignore:
    - foo
  ignore_only:
    WIRE_JSON:
      - b.proto
    FIELD_SAME_TYPE:
      - a.proto
      - c.proto
  ignore_unstable_packages: true
"#;
    let config = parse_document(yaml).unwrap();

    assert_eq!(config.version, "v1");
    assert_eq!(config.use_ids, vec!["FILE"]);
    assert_eq!(config.except_ids, vec!["FIELD_SAME_JSON_NAME"]);
    assert_eq!(config.ignore_root_paths, vec!["foo"]);
    assert_eq!(
        config.ignore_id_or_category_to_root_paths.to_pairs(),
        vec![
            IdPaths::new("WIRE_JSON", ["b.proto"]),
            IdPaths::new("FIELD_SAME_TYPE", ["a.proto", "c.proto"]),
        ]
    );
    assert!(config.ignore_unstable_packages);
}

#[test]
fn test_parse_document_without_breaking_section() {
    let config = parse_document("version: v1beta1\n").unwrap();
    assert_eq!(config, Config::new(ConfigVersion::V1Beta1));
}

#[test]
fn test_parse_document_duplicate_ids_last_wins() {
    let yaml = r#"
version: v1
breaking:
  ignore_only:
    RULE1:
      - a
    RULE2:
      - b
    RULE1:
      - c
"#;
    let config = parse_document(yaml).unwrap();
    assert_eq!(
        config.ignore_id_or_category_to_root_paths.to_pairs(),
        vec![IdPaths::new("RULE1", ["c"]), IdPaths::new("RULE2", ["b"])]
    );
}

#[test]
fn test_parse_document_unknown_field() {
    let yaml = r#"
version: v1
breaking:
  use: [FILE]
  ignore_root_paths: [foo]
"#;
    let err = parse_document(yaml).unwrap_err();
    assert!(matches!(err, ConfigError::Schema(_)));
    assert!(err.to_string().contains("ignore_root_paths"));
    assert!(err.to_string().contains("v1 breaking config"));
}

#[test]
fn test_parse_document_ignore_only_sequence() {
    let yaml = r#"
version: v1
breaking:
  ignore_only:
    - RULE1
"#;
    let err = parse_document(yaml).unwrap_err();
    assert!(matches!(err, ConfigError::Schema(_)));
    assert_eq!(
        err.to_string(),
        "ignore_only must be a YAML map, instead is sequence"
    );
}

#[test]
fn test_parse_document_keeps_scalar_text() {
    let yaml = r#"
version: v1
breaking:
  ignore_only:
    1.10:
      - 1.10
      - 0x10
      - 1e3
      - yes
"#;
    let config = parse_document(yaml).unwrap();
    assert_eq!(
        config.ignore_id_or_category_to_root_paths.to_pairs(),
        vec![IdPaths::new("1.10", ["1.10", "0x10", "1e3", "yes"])]
    );
}

#[test]
fn test_parse_document_drops_tags() {
    let yaml = r#"
version: v1
breaking:
  ignore_only:
    RULE1:
      - !custom a.proto
    RULE2: !custom [b.proto]
"#;
    let config = parse_document(yaml).unwrap();
    assert_eq!(
        config.ignore_id_or_category_to_root_paths.to_pairs(),
        vec![
            IdPaths::new("RULE1", ["a.proto"]),
            IdPaths::new("RULE2", ["b.proto"]),
        ]
    );
}

#[test]
fn test_parse_document_null_ignore_only() {
    let config = parse_document("version: v1\nbreaking:\n  ignore_only: ~\n").unwrap();
    assert!(config.ignore_id_or_category_to_root_paths.is_empty());
}

#[test]
fn test_parse_document_invalid_yaml() {
    let err = parse_document("version: [v1").unwrap_err();
    assert!(err.to_string().contains("failed to parse config YAML"));
}

#[test]
fn test_render_document_round_trip() {
    let yaml = r#"
version: v1beta1
breaking:
  use: [WIRE]
  ignore_only:
    ZULU: [z.proto]
    ALPHA: [a.proto]
"#;
    let config = parse_document(yaml).unwrap();
    let rendered = render_document(&config).unwrap();

    assert!(rendered.starts_with("version: v1beta1"));
    assert!(rendered.find("ZULU").unwrap() < rendered.find("ALPHA").unwrap());
    assert_eq!(parse_document(&rendered).unwrap(), config);
}

#[test]
fn test_render_json() {
    let mut config = Config::new(ConfigVersion::V1);
    config.use_ids = strings(&["FILE"]);
    config.ignore_id_or_category_to_root_paths =
        IgnoreIdPaths::from_pairs(vec![IdPaths::new("WIRE", ["a"])]);

    let json = render(&config, OutputFormat::Json).unwrap();
    assert_eq!(
        json,
        r#"{
  "version": "v1",
  "breaking": {
    "use": [
      "FILE"
    ],
    "ignore_only": {
      "WIRE": [
        "a"
      ]
    }
  }
}
"#
    );
}

#[test]
fn test_render_requires_known_version() {
    let config = Config {
        version: "v9".to_string(),
        ..Config::default()
    };
    let err = render_document(&config).unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedVersion(ref v) if v == "v9"));
}

#[test]
fn test_output_format_from_str() {
    assert_eq!(OutputFormat::from_str("text"), Some(OutputFormat::Text));
    assert_eq!(OutputFormat::from_str("json"), Some(OutputFormat::Json));
    assert_eq!(OutputFormat::from_str("yaml"), None);
    assert_eq!(OutputFormat::default().to_string(), "text");
}

#[test]
fn test_migrate_v1beta1_to_v1() {
    let config = config_from_external(ConfigVersion::V1Beta1, sample_external());
    let migrated = migrate(&config, ConfigVersion::V1);

    assert_eq!(migrated.version, "v1");
    assert_eq!(
        Config {
            version: config.version.clone(),
            ..migrated.clone()
        },
        config
    );
}

#[test]
fn test_migrate_unknown_version_stamps_target() {
    let config = Config {
        use_ids: strings(&["FILE"]),
        version: String::new(),
        ..Config::default()
    };
    let migrated = migrate(&config, ConfigVersion::V1Beta1);
    assert_eq!(migrated.version, "v1beta1");
    assert_eq!(migrated.use_ids, vec!["FILE"]);
}
