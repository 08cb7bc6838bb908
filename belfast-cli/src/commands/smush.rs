use std::fs;
use std::path::{Path, PathBuf};

use belfast_graph_turtle::{parse, write_graph};
use belfast_smush::GroupsheetSmusher;
use belfast_vocab::belfast;

use crate::error::{CliError, CliResult};

pub fn run(
    files: &[PathBuf],
    topic: Option<&str>,
    namespace: Option<&str>,
    quiet: bool,
) -> CliResult<()> {
    if let Some(ns) = namespace {
        if ns.is_empty() {
            return Err(CliError::Usage("--namespace must not be empty".to_string()));
        }
    }

    let smusher = GroupsheetSmusher::new(
        topic.unwrap_or(belfast::BELFAST_GROUP),
        namespace.unwrap_or(belfast::GROUPSHEET_NS),
    );

    let mut rewritten = 0usize;
    let mut skipped = 0usize;
    let mut errors = 0usize;

    for path in files {
        match process_file(&smusher, path, quiet) {
            Ok(true) => rewritten += 1,
            Ok(false) => skipped += 1,
            Err(e) => {
                eprintln!("{e}");
                errors += 1;
            }
        }
    }

    if !quiet {
        println!(
            "{} files processed: {rewritten} rewritten, {skipped} without groupsheets, {errors} errors",
            files.len()
        );
    }

    if errors > 0 {
        return Err(CliError::Input(format!(
            "failed to process {errors} of {} files",
            files.len()
        )));
    }
    Ok(())
}

/// Smush one file in place. Returns whether the file was rewritten.
fn process_file(smusher: &GroupsheetSmusher, path: &Path, quiet: bool) -> CliResult<bool> {
    let source = fs::read_to_string(path)
        .map_err(|e| CliError::Input(format!("{}: {e}", path.display())))?;
    let graph = parse(&source)
        .map_err(|e| CliError::Input(format!("{}: {e}", path.display())))?;

    let Some(output) = smusher.smush(&graph) else {
        // no groupsheets, leave the file untouched
        return Ok(false);
    };

    if !quiet {
        println!("Replacing {}", path.display());
    }
    fs::write(path, write_graph(&output))
        .map_err(|e| CliError::Input(format!("{}: {e}", path.display())))?;
    Ok(true)
}
