/* Generate command - write converter and companion sources to a directory */

use super::common::{load_declarations, load_options, print_diagnostics};
use primjson_gen::{Diagnostic, GenError, GenResult, Generator, GeneratorSink};
use std::path::{Path, PathBuf};

/* Writes each logical source as a file named after it */
struct DirectorySink<'a> {
    output_dir: &'a Path,
    written: Vec<PathBuf>,
    diagnostics: Vec<Diagnostic>,
}

impl GeneratorSink for DirectorySink<'_> {
    fn emit_source(&mut self, logical_name: &str, text: &str) -> GenResult<()> {
        let path = self.output_dir.join(logical_name);
        std::fs::write(&path, text).map_err(|source| GenError::Write {
            logical_name: logical_name.to_string(),
            source,
        })?;
        self.written.push(path);
        Ok(())
    }

    fn report_diagnostic(&mut self, diagnostic: &Diagnostic) -> GenResult<()> {
        self.diagnostics.push(diagnostic.clone());
        Ok(())
    }
}

/* Execute the generate command */
pub fn run(
    files: Vec<PathBuf>,
    output_dir: PathBuf,
    config: Option<PathBuf>,
    deny_diagnostics: bool,
    verbose: bool,
) -> anyhow::Result<()> {
    let options = load_options(config.as_deref())?;

    if verbose {
        println!("Primitive JSON converter generator");
        println!("==================================\n");
        println!("[~] Configuration:");
        println!("  Output directory: {}", output_dir.display());
        println!("  Adapter suffix: {}", options.adapter_suffix);
        println!("  File suffix: {}", options.file_suffix);
        println!("  Input files: {}", files.len());
        println!();
    }

    let declarations = load_declarations(&files, verbose)?;

    std::fs::create_dir_all(&output_dir).map_err(|source| GenError::Io {
        path: output_dir.clone(),
        source,
    })?;

    let mut sink = DirectorySink {
        output_dir: &output_dir,
        written: Vec::new(),
        diagnostics: Vec::new(),
    };
    let output = Generator::try_new(options)?.run(&declarations, &mut sink)?;

    for path in &sink.written {
        println!("[✓] Generated {}", path.display());
    }
    print_diagnostics(&sink.diagnostics);

    println!(
        "[~] {} adapter(s), {} source file(s), {} diagnostic(s)",
        output.adapters.len(),
        sink.written.len(),
        sink.diagnostics.len()
    );

    if deny_diagnostics && !sink.diagnostics.is_empty() {
        anyhow::bail!("[✗] {} diagnostic(s) reported", sink.diagnostics.len());
    }

    Ok(())
}
