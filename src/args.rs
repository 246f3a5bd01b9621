mod proc_errors;

use clap::{
    Args,
    Parser,
    Subcommand,
    ValueEnum,
};

// Re-export errors
pub use proc_errors::{
    ArgError,
    ProcResult,
    err_str,
};

/// Format, send and parse MAPDL APDL commands.
#[derive(Debug, Parser)]
#[command(name = "apdl-client", version)]
pub struct ApdlCli {
    #[clap(subcommand)]
    pub sub_command: CliCommand,
}

/// Subcommands of the apdl-client binary.
#[derive(Debug, Subcommand)]
pub enum CliCommand {
    #[command(name = "format")]
    /// Format a command into an APDL line.
    Format(FormatArgs),

    #[command(name = "parse")]
    /// Parse MAPDL output (stdin or file) and print the result as JSON.
    Parse(ParseArgs),

    #[command(name = "run")]
    /// Run an APDL script line by line through a session.
    Run(RunArgs),

    #[command(name = "list")]
    /// List the command catalog or the available parsers.
    List(ListArgs),

    #[command(name = "example")]
    /// Print an example session config.
    Example(ExampleArgs),
}

/// Arguments for the format command.
#[derive(Debug, Args)]
pub struct FormatArgs {
    /// Command mnemonic (K, BLOCK, ET...).
    pub mnemonic: String,

    #[arg(short, long = "set", value_name = "NAME=VALUE")]
    /// Set a field by name. Can be repeated.
    pub set: Vec<String>,

    #[arg(long)]
    /// Accept mnemonics missing from the catalog (fields are written as given).
    pub raw: bool,

    #[arg(allow_hyphen_values = true)]
    /// Positional field values. Pass "" for a blank field.
    pub fields: Vec<String>,
}

/// Arguments for the parse command.
#[derive(Debug, Args)]
pub struct ParseArgs {
    /// Parser name (keypoint, parse_k...) or a command mnemonic (K).
    pub parser: String,

    #[arg(short, long = "input")]
    /// File with the MAPDL output. Read from stdin when missing.
    pub input_path: Option<String>,
}

/// Arguments for the run command.
#[derive(Debug, Args)]
pub struct RunArgs {
    #[arg(short, long = "cfg")]
    /// Session config file (.json, .toml, .yaml or .yml).
    pub cfg_file: String,

    /// APDL script to run.
    pub script: String,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    /// Output format for responses.
    pub format: OutputFormat,

    #[arg(long)]
    /// Skip error checks on responses, overriding the config.
    pub ignore_errors: bool,
}

/// Arguments for the list command.
#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(short, long)]
    /// Only list commands from this group (areas, keypoints...).
    pub group: Option<String>,

    #[arg(long)]
    /// List the parsers instead of the commands.
    pub parsers: bool,
}

/// Arguments for the example command.
#[derive(Debug, Args)]
pub struct ExampleArgs {
    #[arg(short, long)]
    /// Transport to show. Lists the transports when missing.
    pub transport: Option<String>,

    #[arg(short, long, value_enum, default_value_t = Format::Yaml)]
    /// Config file format.
    pub format: Format,
}

/// Config file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Yaml,
    Json,
    Toml,
}

/// Output formats for responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Parse the command line arguments for the apdl-client binary.
pub fn parse_cli_args() -> ApdlCli {
    ApdlCli::parse()
}

/// Split a `NAME=VALUE` assignment.
pub fn split_assignment(assignment: &str) -> ProcResult<(&str, &str)> {
    match assignment.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => Ok((name.trim(), value.trim())),
        _ => Err(ArgError::BadAssignment(assignment.to_string())),
    }
}
