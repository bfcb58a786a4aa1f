/* Helpers shared by the generate and check commands */

use anyhow::Context;
use primjson_gen::{DeclarationSet, Diagnostic, GeneratorOptions};
use std::path::{Path, PathBuf};

/* Load and merge every declaration file, in command-line order */
pub fn load_declarations(files: &[PathBuf], verbose: bool) -> anyhow::Result<DeclarationSet> {
    if verbose {
        println!("[~] Loading declaration files...");
    }

    let mut set = DeclarationSet::new();
    for file in files {
        set.load_file(file)
            .with_context(|| format!("while loading {}", file.display()))?;
        if verbose {
            println!("    - {}", file.display());
        }
    }

    if verbose {
        println!("[~] {} declared type(s) after merging", set.len());
    }
    Ok(set)
}

/* Options from `--config`, or the defaults */
pub fn load_options(config: Option<&Path>) -> anyhow::Result<GeneratorOptions> {
    let options = match config {
        Some(path) => GeneratorOptions::load(path)?,
        None => GeneratorOptions::default(),
    };
    Ok(options)
}

/* Compiler-style warning lines on stderr */
pub fn print_diagnostics(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        eprintln!("{}", diagnostic);
    }
}
