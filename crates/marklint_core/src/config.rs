//! Linter configuration.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use jsonschema::Validator;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{LinterError, Severity};

const SCHEMA_JSON: &str = include_str!("../schema/config.json");
static CONFIG_SCHEMA: OnceLock<Result<Validator, String>> = OnceLock::new();

/// Configuration for the linter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinterConfig {
    /// Rule configuration (enable/disable/options), keyed by rule id.
    #[serde(default)]
    pub options: HashMap<String, RuleOption>,

    /// File patterns to include.
    #[serde(default)]
    pub include: Vec<String>,

    /// File patterns to exclude.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Directory containing the configuration file, if loaded from disk.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

/// Configuration for a single rule (in options map).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RuleOption {
    /// Rule is enabled/disabled (boolean).
    Enabled(bool),
    /// A severity name ("error", "warning", "info", "off") or a string
    /// preferred value such as "consistent".
    Severity(String),
    /// A preferred value, or an object with `preferred` and `severity`.
    Options(Value),
}

impl RuleOption {
    /// Returns whether the rule is enabled.
    pub fn is_enabled(&self) -> bool {
        match self {
            RuleOption::Enabled(enabled) => *enabled,
            RuleOption::Severity(s) => s != "off",
            RuleOption::Options(Value::Object(map)) => {
                map.get("severity").and_then(Value::as_str) != Some("off")
            }
            RuleOption::Options(_) => true,
        }
    }

    /// Resolves this entry into the options a rule runs with.
    pub fn options(&self) -> RuleOptions {
        match self {
            RuleOption::Enabled(_) => RuleOptions::default(),
            RuleOption::Severity(s) => match Severity::from_name(s) {
                Some(severity) => RuleOptions {
                    severity: Some(severity),
                    ..RuleOptions::default()
                },
                None => RuleOptions::new(Value::String(s.clone())),
            },
            RuleOption::Options(Value::Object(map)) => RuleOptions {
                preferred: map.get("preferred").cloned().unwrap_or(Value::Null),
                severity: map
                    .get("severity")
                    .and_then(Value::as_str)
                    .and_then(Severity::from_name),
            },
            RuleOption::Options(value) => RuleOptions::new(value.clone()),
        }
    }
}

/// Options handed to a rule for one invocation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleOptions {
    preferred: Value,
    severity: Option<Severity>,
}

impl RuleOptions {
    /// Creates options with a raw preferred value.
    pub fn new(preferred: Value) -> Self {
        Self {
            preferred,
            severity: None,
        }
    }

    /// The raw preferred value; `Null` when not configured.
    ///
    /// Rules normalize this themselves.
    pub fn preferred(&self) -> &Value {
        &self.preferred
    }

    /// Severity override, if configured.
    pub fn severity(&self) -> Option<Severity> {
        self.severity
    }
}

impl LinterConfig {
    /// Configuration file names, in discovery order.
    pub const CONFIG_FILES: &'static [&'static str] =
        &[".marklint.jsonc", ".marklint.json", ".marklintrc.json"];

    /// Creates a new empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Finds the first configuration file in `dir`.
    pub fn discover(dir: impl AsRef<Path>) -> Option<PathBuf> {
        let dir = dir.as_ref();
        Self::CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }

    /// Loads configuration from a file.
    ///
    /// Comments and trailing commas are accepted in every supported file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LinterError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| LinterError::config(format!("Failed to read config: {}", e)))?;

        let mut config = Self::from_json(&content)?;

        config.base_dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => Some(parent.to_path_buf()),
            _ => Some(PathBuf::from(".")),
        };

        Ok(config)
    }

    /// Parses configuration from JSON (or JSONC) with schema validation.
    pub fn from_json(json: &str) -> Result<Self, LinterError> {
        let value = jsonc_parser::parse_to_serde_value(json, &Default::default())
            .map_err(|e| LinterError::config(format!("Invalid JSON: {}", e)))?
            .unwrap_or_else(|| Value::Object(serde_json::Map::new()));

        let schema = CONFIG_SCHEMA
            .get_or_init(|| {
                let schema_json: Value = serde_json::from_str(SCHEMA_JSON)
                    .map_err(|e| format!("Invalid embedded config schema: {}", e))?;
                Validator::new(&schema_json)
                    .map_err(|e| format!("Invalid config schema compilation: {}", e))
            })
            .as_ref()
            .map_err(|e| LinterError::Internal(e.clone()))?;

        if let Err(e) = schema.validate(&value) {
            let error_msg = format!("{} at {}", e, e.instance_path());
            return Err(LinterError::config(format!(
                "Config validation failed: {}",
                error_msg
            )));
        }

        serde_json::from_value(value)
            .map_err(|e| LinterError::config(format!("Invalid config: {}", e)))
    }

    /// Options for `rule_id`, or `None` if the rule is disabled.
    ///
    /// Rules absent from the configuration run with default options.
    pub fn rule_options(&self, rule_id: &str) -> Option<RuleOptions> {
        match self.options.get(rule_id) {
            Some(option) if !option.is_enabled() => None,
            Some(option) => Some(option.options()),
            None => Some(RuleOptions::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn test_config_new() {
        let config = LinterConfig::new();
        assert!(config.options.is_empty());
        assert!(config.include.is_empty());
        assert!(config.exclude.is_empty());
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{
            "options": {
                "blockquote-indentation": 2,
                "maximum-line-length": { "preferred": 100, "severity": "error" }
            },
            "include": ["**/*.md"]
        }"#;

        let config = LinterConfig::from_json(json).unwrap();
        assert_eq!(config.options.len(), 2);
        assert_eq!(config.include, vec!["**/*.md".to_string()]);

        let length = config.rule_options("maximum-line-length").unwrap();
        assert_eq!(length.preferred(), &json!(100));
        assert_eq!(length.severity(), Some(Severity::Error));
    }

    #[test]
    fn test_config_accepts_comments() {
        let json = r#"{
            // prefer one space after the marker
            "options": { "blockquote-indentation": 2, },
        }"#;

        let config = LinterConfig::from_json(json).unwrap();
        assert_eq!(
            config.rule_options("blockquote-indentation").unwrap().preferred(),
            &json!(2)
        );
    }

    #[test]
    fn test_empty_document_is_default_config() {
        let config = LinterConfig::from_json("").unwrap();
        assert!(config.options.is_empty());
    }

    #[rstest]
    #[case::enabled(RuleOption::Enabled(true), true)]
    #[case::disabled(RuleOption::Enabled(false), false)]
    #[case::off(RuleOption::Severity("off".to_string()), false)]
    #[case::error(RuleOption::Severity("error".to_string()), true)]
    #[case::string_value(RuleOption::Severity("consistent".to_string()), true)]
    #[case::number(RuleOption::Options(json!(4)), true)]
    #[case::object_off(RuleOption::Options(json!({ "severity": "off" })), false)]
    fn test_rule_option_enabled(#[case] option: RuleOption, #[case] enabled: bool) {
        assert_eq!(option.is_enabled(), enabled);
    }

    #[rstest]
    #[case::flag(RuleOption::Enabled(true), Value::Null, None)]
    #[case::severity(RuleOption::Severity("info".to_string()), Value::Null, Some(Severity::Info))]
    #[case::consistent(RuleOption::Severity("consistent".to_string()), json!("consistent"), None)]
    #[case::number(RuleOption::Options(json!(120)), json!(120), None)]
    #[case::object(
        RuleOption::Options(json!({ "preferred": 4, "severity": "error" })),
        json!(4),
        Some(Severity::Error)
    )]
    #[case::object_without_preferred(
        RuleOption::Options(json!({ "severity": "warning" })),
        Value::Null,
        Some(Severity::Warning)
    )]
    fn test_rule_option_values(
        #[case] option: RuleOption,
        #[case] preferred: Value,
        #[case] severity: Option<Severity>,
    ) {
        let options = option.options();
        assert_eq!(options.preferred(), &preferred);
        assert_eq!(options.severity(), severity);
    }

    #[test]
    fn test_rule_options_for_unconfigured_and_disabled_rules() {
        let config =
            LinterConfig::from_json(r#"{ "options": { "maximum-line-length": false } }"#).unwrap();

        assert_eq!(config.rule_options("maximum-line-length"), None);
        assert_eq!(
            config.rule_options("blockquote-indentation"),
            Some(RuleOptions::default())
        );
    }

    #[rstest]
    #[case::unknown_property(r#"{ "optionz": {} }"#, "Config validation failed")]
    #[case::type_mismatch(r#"{ "include": "docs/**" }"#, "Config validation failed")]
    #[case::invalid_severity(
        r#"{ "options": { "maximum-line-length": { "severity": "fatal" } } }"#,
        "Config validation failed"
    )]
    #[case::invalid_json(r#"{ "options": "#, "Invalid JSON")]
    fn test_config_validation_errors(#[case] json: &str, #[case] expected_error_part: &str) {
        let result = LinterConfig::from_json(json);
        assert!(result.is_err(), "Expected error for JSON: {}", json);
        let err = result.unwrap_err();
        assert!(
            err.to_string().contains(expected_error_part),
            "Error message '{}' should contain '{}'",
            err,
            expected_error_part
        );
    }

    #[test]
    fn test_discover_prefers_jsonc() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".marklint.json"), "{}").unwrap();
        fs::write(dir.path().join(".marklint.jsonc"), "{}").unwrap();

        let found = LinterConfig::discover(dir.path()).unwrap();
        assert_eq!(found, dir.path().join(".marklint.jsonc"));
    }

    #[test]
    fn test_discover_none() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(LinterConfig::discover(dir.path()), None);
    }

    #[test]
    fn test_from_file_sets_base_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".marklintrc.json");
        fs::write(&path, r#"{ "exclude": ["vendor/**"] }"#).unwrap();

        let config = LinterConfig::from_file(&path).unwrap();
        assert_eq!(config.exclude, vec!["vendor/**".to_string()]);
        assert_eq!(config.base_dir.as_deref(), Some(dir.path()));
    }

    #[test]
    fn test_inline_config_has_no_base_dir() {
        assert_eq!(LinterConfig::from_json("{}").unwrap().base_dir, None);
    }
}
