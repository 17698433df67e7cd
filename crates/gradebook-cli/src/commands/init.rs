//! The `gradebook init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("gradebook.toml").exists() {
        println!("gradebook.toml already exists, skipping.");
    } else {
        std::fs::write("gradebook.toml", SAMPLE_CONFIG)?;
        println!("Created gradebook.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit gradebook.toml to pick how students are keyed");
    println!("  2. Run: gradebook shell");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# gradebook configuration

# How students are keyed: "name" (unique, compared case-insensitively) or
# "id" (numeric id plus a display name).
identity = "name"

# Prompt shown by the interactive shell.
prompt = "gradebook> "
"#;
