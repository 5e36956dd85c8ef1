//! Init command implementation

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use marklint_core::{LinterConfig, builtin_rules};
use miette::{IntoDiagnostic, Result};
use tracing::info;

pub fn run_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(LinterConfig::CONFIG_FILES[1]);
    let content = default_config()?;

    let mut options = OpenOptions::new();
    options.write(true);
    if force {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }

    match options.open(&config_path) {
        Ok(mut file) => {
            file.write_all(content.as_bytes()).into_diagnostic()?;
            info!("Created {}", config_path.display());
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Err(miette::miette!(
            "Config file already exists. Use --force to overwrite."
        )),
        Err(e) => Err(e).into_diagnostic(),
    }
}

/// Every built-in rule with its default preferred value.
fn default_config() -> Result<String> {
    let options: serde_json::Map<String, serde_json::Value> = builtin_rules()
        .iter()
        .map(|rule| (rule.id().to_string(), rule.default_preferred()))
        .collect();

    let config = serde_json::json!({
        "options": options,
        "include": ["**/*.md"],
        "exclude": [],
    });

    let mut content = serde_json::to_string_pretty(&config).into_diagnostic()?;
    content.push('\n');
    Ok(content)
}
