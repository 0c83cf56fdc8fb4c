use crate::constants::{exit_codes, verbosity};
use clap::{error::ErrorKind, Args, CommandFactory, Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// Backend project generator.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generate a new project from a template.
    Create(CreateArgs),
    /// Turn the `example` scaffold of an existing project into modules.
    Materialize(MaterializeArgs),
}

/// Arguments of `stencil create`.
#[derive(Args, Debug, Clone)]
pub struct CreateArgs {
    /// Template directory or Git repository.
    #[arg(short, long, default_value = ".")]
    pub template: String,

    /// Directory the project directory is created in.
    #[arg(value_name = "OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Replace an existing project directory.
    #[arg(short, long)]
    pub force: bool,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Predefined answers as JSON string or `-` to read from stdin.
    #[arg(short, long)]
    pub answers: Option<String>,

    /// Use defaults instead of prompting for missing answers.
    #[arg(long = "non-interactive")]
    pub non_interactive: bool,

    /// Preview actions without touching the filesystem.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Validate module names and destinations before generating anything.
    #[arg(long)]
    pub strict: bool,

    /// Do not check that the template's required tools are installed.
    #[arg(long = "skip-preflight")]
    pub skip_preflight: bool,
}

/// Arguments of `stencil materialize`.
#[derive(Args, Debug, Clone)]
pub struct MaterializeArgs {
    /// Root of the generated project. Defaults to the hook payload's output
    /// directory, then to the `project_slug` answer.
    #[arg(value_name = "PROJECT_DIR")]
    pub project_dir: Option<PathBuf>,

    /// Answers as JSON string, or `-` to read answers or a hook payload from stdin.
    #[arg(short, long)]
    pub answers: Option<String>,

    /// Template whose config provides the layout. The defaults apply without it.
    #[arg(short, long)]
    pub template: Option<PathBuf>,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Preview actions without touching the filesystem.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Validate module names and destinations before touching anything.
    #[arg(long)]
    pub strict: bool,
}

impl Commands {
    pub fn verbose(&self) -> u8 {
        match self {
            Commands::Create(args) => args.verbose,
            Commands::Materialize(args) => args.verbose,
        }
    }
}

/// Parse command line arguments with custom handling for missing required inputs.
pub fn parse_cli() -> Cli {
    Cli::try_parse().unwrap_or_else(|e| {
        if matches!(
            e.kind(),
            ErrorKind::MissingRequiredArgument
                | ErrorKind::MissingSubcommand
                | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        ) {
            let mut command = Cli::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
