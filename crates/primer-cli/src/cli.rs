//! CLI argument definitions for the `primer` binary.

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "primer",
    version,
    about = "State Primer - browse the study guide from a terminal",
    long_about = "Browse the State Primer topic catalog without opening the app.\n\n\
                  Lists and searches topics, prints full lessons as plain text,\n\
                  and runs their code snippets through the same sandbox the app uses."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the topic catalog.
    Topics(TopicsArgs),

    /// Search topic titles and descriptions.
    Search(SearchArgs),

    /// Print one topic in full.
    Show(ShowArgs),

    /// Run a topic's code snippet in the sandbox.
    Run(RunArgs),
}

#[derive(Parser)]
pub struct TopicsArgs {
    /// Restrict the listing to one category.
    #[arg(long = "category", value_enum)]
    pub category: Option<CategoryArg>,

    /// Emit the catalog as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct SearchArgs {
    /// Text matched against topic titles and descriptions.
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Restrict matches to one category.
    #[arg(long = "category", value_enum)]
    pub category: Option<CategoryArg>,
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Route path (`/concepts/store`) or bare topic id (`store`).
    #[arg(value_name = "PATH_OR_ID")]
    pub target: String,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Id of the topic holding the snippet.
    #[arg(value_name = "TOPIC_ID")]
    pub topic_id: String,

    /// Which of the topic's runnable snippets to run, counting from 1.
    #[arg(long = "snippet", value_name = "N", default_value_t = 1)]
    pub snippet: usize,
}

/// CLI category choices, mirroring the catalog's fixed set.
#[derive(Clone, Copy, ValueEnum)]
pub enum CategoryArg {
    Core,
    Middleware,
    Advanced,
    Implementation,
    Normalization,
    Selectors,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
