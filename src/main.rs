//! sql2entity - C# entity generation from a `CREATE TABLE` statement
//!
//! Usage: `sql2entity [entity name] <file>`

use anyhow::Context;
use clap::Parser;
use sql2entity::{generate_file_to, GeneratorConfig};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "sql2entity")]
#[command(about = "Generate a C# entity class from a CREATE TABLE statement")]
#[command(override_usage = "sql2entity [entity name] <file>")]
struct Cli {
    /// `[entity name] <file>`; the entity name defaults to the table name
    #[arg(required = true, num_args = 1..=2, value_name = "ARGS")]
    args: Vec<String>,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory the entity file is written to
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet output (errors only)
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn entity_and_input(&self) -> (Option<&str>, PathBuf) {
        match self.args.as_slice() {
            [entity, input, ..] => (Some(entity.as_str()), PathBuf::from(input)),
            [input] => (None, PathBuf::from(input)),
            [] => (None, PathBuf::new()),
        }
    }

    /// Progress lines go to stdout unless `--quiet` is set
    fn progress_output(&self) -> Box<dyn Write> {
        if self.quiet {
            Box::new(io::sink())
        } else {
            Box::new(io::stdout().lock())
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(&cli) {
        eprintln!("❌ Error: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => GeneratorConfig::load_from(path),
        None => GeneratorConfig::load(),
    }
    .context("loading configuration")?;
    if let Some(dir) = &cli.output_dir {
        config.output_dir = dir.clone();
    }

    let (entity_name, input) = cli.entity_and_input();
    let output = generate_file_to(&input, entity_name, &config, cli.progress_output())
        .with_context(|| format!("generating entity from {}", input.display()))?;
    log::info!("Wrote {}", output.display());

    Ok(())
}
