//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# annot-lint configuration
# See https://github.com/annot-lint/annot-lint for documentation

[analyzer]
# Root directory to analyze (default: current directory)
# root = "./src"

# Glob patterns to exclude from analysis
exclude = [
    "**/target/**",
    "**/vendor/**",
]

[scan]
# Annotation identity to search for. A bare name under the "name"
# policy, a full path (wildcards allowed) under "path".
annotation = "range"

# How identity is compared: "name" matches the simple name of the
# resolved annotation, "path" matches the full import-resolved path.
match = "name"

# "emit" reports findings; "dry-run" classifies without reporting.
report = "emit"

# Emit a note when a collected method cannot be resolved. The bundled
# scan resolves everything it collects; this matters for embedding
# front ends that supply their own resolver.
note_unresolved = true
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("annot-lint.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created annot-lint.toml");
    println!("\nNext steps:");
    println!("  1. Edit annot-lint.toml to configure the scan");
    println!("  2. Run: annot-lint check");

    Ok(())
}
