/* Check command - report accepted mappings and diagnostics without writing */

use super::common::{load_declarations, load_options, print_diagnostics};
use clap::ValueEnum;
use primjson_gen::{GenerationOutput, Generator, GeneratorOptions};
use serde_derive::Serialize;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
struct MappingReport {
    wrapper: String,
    adapter: String,
    primitive: String,
    logical_name: String,
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
struct DiagnosticReport {
    id: &'static str,
    severity: String,
    location: String,
    type_name: String,
    message: String,
}

#[derive(Serialize)]
struct CheckReport {
    mappings: Vec<MappingReport>,
    diagnostics: Vec<DiagnosticReport>,
}

fn build_report(output: &GenerationOutput, options: &GeneratorOptions) -> CheckReport {
    CheckReport {
        mappings: output
            .adapters
            .iter()
            .map(|ir| MappingReport {
                wrapper: ir.wrapper.dotted_name(),
                adapter: ir.adapter_dotted_name(),
                primitive: ir.primitive.to_string(),
                logical_name: ir.logical_name(options),
            })
            .collect(),
        diagnostics: output
            .diagnostics
            .iter()
            .map(|diagnostic| DiagnosticReport {
                id: diagnostic.kind.id(),
                severity: diagnostic.severity().to_string(),
                location: diagnostic.location.to_string(),
                type_name: diagnostic.type_name.clone(),
                message: diagnostic.message(),
            })
            .collect(),
    }
}

/* Execute the check command; fails when any diagnostic is reported */
pub fn run(files: Vec<PathBuf>, config: Option<PathBuf>, format: ReportFormat, verbose: bool) -> anyhow::Result<()> {
    let options = load_options(config.as_deref())?;
    let declarations = load_declarations(&files, verbose && matches!(format, ReportFormat::Text))?;
    let output = Generator::try_new(options.clone())?.generate(&declarations);

    match format {
        ReportFormat::Text => {
            for ir in &output.adapters {
                println!(
                    "[✓] {} -> {} ({})",
                    ir.wrapper.dotted_name(),
                    ir.adapter_dotted_name(),
                    ir.primitive
                );
            }
            print_diagnostics(&output.diagnostics);
        }
        ReportFormat::Json => {
            let report = build_report(&output, &options);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    if !output.diagnostics.is_empty() {
        anyhow::bail!("[✗] {} diagnostic(s) reported", output.diagnostics.len());
    }
    Ok(())
}
