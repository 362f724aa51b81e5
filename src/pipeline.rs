//! End-to-end generation: read the statement, build the model, render the
//! class and write it wrapped in the prefix/suffix boilerplate.

use crate::config::GeneratorConfig;
use crate::error::{Result, Sql2EntityError};
use crate::parser::build_table;
use crate::writer::EntityWriter;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Generate an entity file for the statement in `input`, reporting progress
/// on stdout
///
/// `entity_name` defaults to the parsed table name. Returns the path written.
/// Nothing is written when the input cannot be read or parsed.
pub fn generate_file(
    input: &Path,
    entity_name: Option<&str>,
    config: &GeneratorConfig,
) -> Result<PathBuf> {
    generate_file_to(input, entity_name, config, io::stdout().lock())
}

/// Same as [`generate_file`], with progress lines written to `progress`
pub fn generate_file_to<W: Write>(
    input: &Path,
    entity_name: Option<&str>,
    config: &GeneratorConfig,
    mut progress: W,
) -> Result<PathBuf> {
    let prefix = read_boilerplate(&config.prefix_path);
    let suffix = read_boilerplate(&config.suffix_path);

    let bytes = fs::read(input).map_err(|source| Sql2EntityError::ReadInput {
        path: input.to_path_buf(),
        source,
    })?;
    report(&mut progress, "Read file succeed");

    let table = build_table(&String::from_utf8_lossy(&bytes))?;
    report(&mut progress, "Model build succeed");
    log::debug!(
        "Table `{}` with {} column(s)",
        table.table_name,
        table.columns.len()
    );

    let entity_name = entity_name.unwrap_or(&table.table_name);
    report(&mut progress, &format!("Entity class name: {}", entity_name));

    let code = EntityWriter::new().generate(&table, entity_name);
    report(&mut progress, "Generate code succeed");

    let output = output_path(config, entity_name);
    fs::write(&output, render_file(&prefix, &code, &suffix)).map_err(|source| {
        Sql2EntityError::WriteOutput {
            path: output.clone(),
            source,
        }
    })?;
    report(&mut progress, "Write file succeed");

    Ok(output)
}

/// Final file content: prefix, a newline, the class, then the suffix
pub fn render_file(prefix: &str, code: &str, suffix: &str) -> String {
    format!("{}\n{}{}", prefix, code, suffix)
}

fn output_path(config: &GeneratorConfig, entity_name: &str) -> PathBuf {
    config
        .output_dir
        .join(format!("{}.{}", entity_name, config.extension))
}

fn report<W: Write>(progress: &mut W, line: &str) {
    if let Err(e) = writeln!(progress, "{}", line) {
        log::debug!("Failed to write progress: {}", e);
    }
}

fn read_boilerplate(path: &Path) -> String {
    match fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            log::error!("Failed to read {}: {}", path.display(), e);
            String::new()
        }
    }
}
