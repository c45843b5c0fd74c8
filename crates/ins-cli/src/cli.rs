//! CLI argument definitions for the enumeration catalog tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use ins_model::WireFormat;

#[derive(Parser)]
#[command(
    name = "ins-enum",
    version,
    about = "Inspect the insurance enumeration catalog",
    long_about = "Inspect the insurance enumeration catalog.\n\n\
                  Lists enumerations and members, resolves identifiers and alternative keys,\n\
                  and runs the JSON and XML identifier codecs against any enumeration."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Load Enumerations.csv and Members.csv from this directory instead of
    /// the embedded catalog.
    #[arg(long = "catalog-dir", value_name = "DIR", global = true)]
    pub catalog_dir: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List all enumerations.
    Tables,

    /// List the members of an enumeration.
    Members(MembersArgs),

    /// Resolve a value and print its member document.
    Lookup(LookupArgs),

    /// Encode a strict identifier.
    Encode(EncodeArgs),

    /// Decode wire input into an identifier.
    Decode(DecodeArgs),
}

#[derive(Args)]
pub struct MembersArgs {
    #[arg(value_name = "ENUMERATION")]
    pub enumeration: String,

    /// Order by sort order instead of declaration order.
    #[arg(long = "sorted")]
    pub sorted: bool,

    /// Print member documents as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct LookupArgs {
    #[arg(value_name = "ENUMERATION")]
    pub enumeration: String,

    #[arg(value_name = "VALUE")]
    pub value: String,

    /// Resolve VALUE as an alternative key.
    #[arg(long = "alternative")]
    pub alternative: bool,
}

#[derive(Args)]
pub struct EncodeArgs {
    #[arg(value_name = "ENUMERATION")]
    pub enumeration: String,

    #[arg(value_name = "VALUE")]
    pub value: String,

    #[arg(long = "format", value_enum, default_value = "json")]
    pub format: FormatArg,

    /// XML element name (default: the enumeration name).
    #[arg(long = "tag", value_name = "NAME")]
    pub tag: Option<String>,
}

#[derive(Args)]
pub struct DecodeArgs {
    #[arg(value_name = "ENUMERATION")]
    pub enumeration: String,

    /// Raw wire input, e.g. '"va"' or '<UsState>va</UsState>'.
    #[arg(value_name = "INPUT")]
    pub input: String,

    #[arg(long = "format", value_enum, default_value = "json")]
    pub format: FormatArg,

    /// Capture the input and report errors instead of failing.
    #[arg(long = "validated")]
    pub validated: bool,
}

/// CLI wire format choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Json,
    Xml,
}

impl From<FormatArg> for WireFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Json => Self::Json,
            FormatArg::Xml => Self::Xml,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn decode_arguments() {
        let cli = Cli::try_parse_from([
            "ins-enum",
            "decode",
            "UsState",
            "<UsState>va</UsState>",
            "--format",
            "xml",
            "--validated",
        ])
        .expect("parse");
        let Command::Decode(args) = cli.command else {
            panic!("expected decode");
        };
        assert_eq!(args.enumeration, "UsState");
        assert_eq!(args.format, FormatArg::Xml);
        assert!(args.validated);
    }

    #[test]
    fn global_flags_follow_subcommands() {
        let cli = Cli::try_parse_from(["ins-enum", "tables", "--catalog-dir", "/tmp/catalog"])
            .expect("parse");
        assert_eq!(cli.catalog_dir, Some(PathBuf::from("/tmp/catalog")));
        assert!(matches!(cli.command, Command::Tables));
    }

    #[test]
    fn encode_defaults_to_json() {
        let cli = Cli::try_parse_from(["ins-enum", "encode", "CreditCard", "VISA"]).expect("parse");
        let Command::Encode(args) = cli.command else {
            panic!("expected encode");
        };
        assert_eq!(WireFormat::from(args.format), WireFormat::Json);
        assert!(args.tag.is_none());
    }
}
