//! CLI entry point for `ts2psql`.

mod config;
mod discovery;
mod logging;
mod output;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::Parser;
use ts2psql_core::{AnnotationMatchers, DdlGenerator, parse_sources};

use crate::config::{Config, DEFAULT_CONFIG_PATH, Overrides, Settings};

#[derive(Parser, Debug)]
#[command(
    name = "ts2psql",
    version,
    about = "Generate PostgreSQL CREATE TABLE statements from annotated TypeScript types"
)]
struct Cli {
    /// Input files; replace `file` and `include` from the config file
    inputs: Vec<PathBuf>,

    /// Config file (default: ./ts2psqlconfig.json, skipped when absent)
    #[arg(long, short, env = "TS2PSQL_CONFIG")]
    config: Option<PathBuf>,

    /// Glob pattern selecting input files (repeatable)
    #[arg(long, short)]
    include: Vec<String>,

    /// Output file for the generated script
    #[arg(long, short)]
    out_file: Option<PathBuf>,

    /// Fail on unknown types or unresolved foreign keys instead of writing error markers
    #[arg(long)]
    strict: bool,

    /// Annotation tag to look for inside comments
    #[arg(long)]
    tag: Option<String>,

    /// Print progress information
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let settings = Settings::resolve(
        config,
        Overrides {
            inputs: cli.inputs,
            include: cli.include,
            out_file: cli.out_file,
            verbose: cli.verbose,
            strict: cli.strict,
            tag: cli.tag,
        },
    );

    logging::init(logging::LoggingConfig::from_verbosity(settings.verbose))?;

    // Phase 1: parse every input into declarations
    let paths = discovery::resolve_inputs(&settings.inputs)?;
    if paths.is_empty() {
        tracing::warn!("No input files matched; writing an empty script");
    }
    for path in &paths {
        tracing::info!(path = %path.display(), "Parsing");
    }

    let sources = discovery::read_sources(&paths)?;
    let matchers = AnnotationMatchers::with_tag(&settings.tag)
        .with_context(|| format!("Invalid annotation tag: {}", settings.tag))?;
    let schema = parse_sources(&matchers, &sources)?;

    tracing::info!(
        files = sources.len(),
        declarations = schema.len(),
        "Parsed declarations"
    );

    // Phase 2: generate DDL against the complete declaration set
    let statements = DdlGenerator::generate_all(&schema);
    for statement in &statements {
        for diagnostic in &statement.diagnostics {
            tracing::warn!(
                declaration = diagnostic.declaration(),
                property = diagnostic.property(),
                "{}",
                diagnostic
            );
        }
    }
    settings.policy.check(&statements)?;

    output::write_statements(&settings.out_file, &statements)
}

/// Load the config file. An explicitly named file must exist; the default one
/// is optional.
fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => match Config::load(path)? {
            Some(config) => Ok(config),
            None => bail!("Config file not found: {}", path.display()),
        },
        None => Ok(Config::load(Path::new(DEFAULT_CONFIG_PATH))?.unwrap_or_default()),
    }
}
