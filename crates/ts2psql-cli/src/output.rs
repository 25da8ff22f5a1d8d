//! Output writing

use anyhow::{Context, Result};
use std::path::Path;
use ts2psql_core::{DdlGenerator, GeneratedStatement};

/// Write the statements as one script, creating missing parent directories.
pub fn write_statements(out_file: &Path, statements: &[GeneratedStatement]) -> Result<()> {
    if let Some(dir) = out_file.parent().filter(|d| !d.as_os_str().is_empty()) {
        if !dir.exists() {
            tracing::info!(dir = %dir.display(), "Creating output directory");
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
        }
    }

    let script = DdlGenerator::render_script(statements);
    std::fs::write(out_file, script)
        .with_context(|| format!("Failed to write output file: {}", out_file.display()))?;

    tracing::info!(
        path = %out_file.display(),
        statements = statements.len(),
        "Wrote output"
    );
    Ok(())
}
