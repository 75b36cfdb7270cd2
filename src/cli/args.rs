use crate::constants::{exit_codes, verbosity};
use clap::{CommandFactory, Parser};
use log::LevelFilter;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// CLI arguments for stencil.
#[derive(Parser, Debug, Clone)]
#[command(version, long_about = None)]
#[command(
    about = "Render TEMPLATES, parameterising them using values read from the command line or YAML/JSON files."
)]
pub struct Args {
    /// Template files rendered in order; names starting with `_` are only available to `include`.
    #[arg(value_name = "TEMPLATES")]
    pub templates: Vec<PathBuf>,

    /// Output rendered templates to FILE rather than stderr.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Set the parameter at Values.KEY to VALUE (repeatable or comma-separated).
    #[arg(long = "set", value_name = "KEY=VALUE", value_delimiter = ',')]
    pub values: Vec<String>,

    /// Set the parameter at Values.KEY to the YAML or JSON object read from FILE (repeatable or comma-separated).
    #[arg(long = "set-from-file", value_name = "KEY=FILE", value_delimiter = ',')]
    pub value_files: Vec<String>,

    /// Append each rendered template to the output file instead of overwriting it.
    #[arg(long, requires = "output")]
    pub append: bool,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parse command line arguments with custom handling for missing templates.
///
/// # Exits
/// * With status code 2 and usage on stderr if no template is given
/// * With clap's default handling otherwise (status 0 for `--help`, 2 for usage errors)
pub fn get_args() -> Args {
    let args = Args::try_parse().unwrap_or_else(|e| e.exit());
    if args.templates.is_empty() {
        let mut command = Args::command().help_template(HELP_TEMPLATE);
        eprintln!("Error: need at least one template file\n");
        eprint!("{}", command.render_help());
        std::process::exit(exit_codes::USAGE);
    }
    args
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
