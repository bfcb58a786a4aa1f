use clap::{Parser, Subcommand};
use cmds::check::ReportFormat;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod cmds;

#[derive(Parser)]
#[command(name = "primjson-gen")]
#[command(about = "Generate System.Text.Json converters for primitive value objects", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /* Generate converter and companion sources */
    Generate {
        /* Input YAML declaration files */
        #[arg(short = 'f', long = "files", value_name = "FILE", required = true)]
        files: Vec<PathBuf>,

        /* Output directory for generated sources */
        #[arg(
            short = 'o',
            long = "output",
            value_name = "DIR",
            default_value = "generated"
        )]
        output_dir: PathBuf,

        /* Generator options (YAML) */
        #[arg(short = 'c', long = "config", value_name = "FILE")]
        config: Option<PathBuf>,

        /* Fail when any diagnostic is reported */
        #[arg(long = "deny-diagnostics")]
        deny_diagnostics: bool,

        /* Enable verbose output */
        #[arg(short = 'v', long = "verbose")]
        verbose: bool,
    },

    /* Resolve and validate declarations without writing sources */
    Check {
        /* Input YAML declaration files */
        #[arg(short = 'f', long = "files", value_name = "FILE", required = true)]
        files: Vec<PathBuf>,

        /* Generator options (YAML) */
        #[arg(short = 'c', long = "config", value_name = "FILE")]
        config: Option<PathBuf>,

        /* Report format */
        #[arg(long = "format", value_enum, default_value = "text")]
        format: ReportFormat,

        /* Enable verbose output */
        #[arg(short = 'v', long = "verbose")]
        verbose: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            files,
            output_dir,
            config,
            deny_diagnostics,
            verbose,
        } => {
            init_tracing(verbose);
            cmds::generate::run(files, output_dir, config, deny_diagnostics, verbose)?;
        }

        Commands::Check {
            files,
            config,
            format,
            verbose,
        } => {
            init_tracing(verbose);
            cmds::check::run(files, config, format, verbose)?;
        }
    }

    Ok(())
}
