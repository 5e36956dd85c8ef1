//! Rules command implementation

use marklint_core::builtin_rules;
use miette::Result;

pub fn run_rules() -> Result<()> {
    for rule in builtin_rules() {
        println!("{:<24} {}", rule.id(), rule.description());
        println!(
            "{:<24} default: {}, severity: {}",
            "",
            rule.default_preferred(),
            rule.default_severity()
        );
    }
    Ok(())
}
