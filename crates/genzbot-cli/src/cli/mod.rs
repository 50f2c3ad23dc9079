//! CLI argument definitions using the clap derive API.
//!
//! Argument names, aliases and help text live here and nowhere else.
//! Backend and template are taken as plain strings: they may also come from
//! the config file, and both sources go through the same domain validation.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

/// Environment variable read when `--api-key` is not given.
pub const API_KEY_ENV: &str = "GENZBOT_API_KEY";

// ── Top-level CLI ─────────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(
    name    = "genzbot",
    bin_name = "genzbot",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f916} Generate a ready-to-run AI chatbot web project",
    long_about = "GenZBot writes a small Flask chatbot project wired to the LLM \
                  backend of your choice, and can provision and launch it.",
    after_help = "EXAMPLES:\n\
        \x20 genzbot new my-bot -b gemini -t galaxy -n Nova\n\
        \x20 genzbot new my-bot -b llama --behavior \"You answer in haiku.\" --run\n\
        \x20 genzbot run my-bot\n\
        \x20 genzbot completions bash > /usr/share/bash-completion/completions/genzbot",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(
        visible_alias = "n",
        about = "Generate a new chatbot project",
        after_help = "EXAMPLES:\n\
            \x20 genzbot new                                # ./Chatbot_Project, defaults from config\n\
            \x20 genzbot new my-bot -b openai -k sk-...\n\
            \x20 genzbot new my-bot -b mixtral -t galaxy --behavior-file persona.txt\n\
            \x20 genzbot new my-bot -b gemma --dry-run"
    )]
    New(NewArgs),

    #[command(
        about = "Provision and launch a generated project",
        after_help = "EXAMPLES:\n\
            \x20 genzbot run my-bot\n\
            \x20 genzbot -v run"
    )]
    Run(RunArgs),

    #[command(
        visible_alias = "ls",
        about = "List available backends and templates",
        after_help = "EXAMPLES:\n\
            \x20 genzbot list\n\
            \x20 genzbot list --format json"
    )]
    List(ListArgs),

    #[command(
        about = "Write a default configuration file",
        after_help = "EXAMPLES:\n\
            \x20 genzbot init\n\
            \x20 genzbot init --force\n\
            \x20 genzbot --config ./genzbot.toml init"
    )]
    Init(InitArgs),

    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 genzbot completions bash > ~/.local/share/bash-completion/completions/genzbot\n\
            \x20 genzbot completions zsh  > ~/.zfunc/_genzbot\n\
            \x20 genzbot completions fish > ~/.config/fish/completions/genzbot.fish"
    )]
    Completions(CompletionsArgs),

    #[command(
        about = "Inspect the configuration",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 genzbot config get defaults.backend\n\
            \x20 genzbot config list\n\
            \x20 genzbot config path"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project directory. Defaults to `defaults.output_dir` from the config.
    #[arg(value_name = "DIR", help = "Project directory")]
    pub dir: Option<PathBuf>,

    #[arg(
        short = 'b',
        long = "backend",
        value_name = "BACKEND",
        help = "LLM backend: gemini, openai, llama, gemma, mixtral"
    )]
    pub backend: Option<String>,

    /// Written to `.env`. Prompted for when missing and stdin is a terminal.
    #[arg(
        short = 'k',
        long = "api-key",
        value_name = "KEY",
        env = API_KEY_ENV,
        hide_env_values = true,
        help = "API key for the chosen backend"
    )]
    pub api_key: Option<String>,

    #[arg(
        short = 't',
        long = "template",
        value_name = "TEMPLATE",
        help = "Frontend template: plain, galaxy"
    )]
    pub template: Option<String>,

    #[arg(
        long = "behavior",
        value_name = "TEXT",
        conflicts_with = "behavior_file",
        help = "System instruction for the model"
    )]
    pub behavior: Option<String>,

    #[arg(
        long = "behavior-file",
        value_name = "FILE",
        help = "Read the system instruction from FILE"
    )]
    pub behavior_file: Option<PathBuf>,

    #[arg(
        short = 'n',
        long = "name",
        value_name = "BOT_NAME",
        help = "Display name shown in the page title"
    )]
    pub name: Option<String>,

    #[arg(long = "run", help = "Provision and launch the project after generating it")]
    pub run: bool,

    #[arg(long = "dry-run", help = "Show what would be written without writing")]
    pub dry_run: bool,

    #[arg(short = 'y', long = "yes", help = "Skip the confirmation prompt")]
    pub yes: bool,
}

// ── run ───────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Generated project directory. Defaults to `defaults.output_dir`.
    #[arg(value_name = "DIR", help = "Project directory")]
    pub dir: Option<PathBuf>,
}

// ── list ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON object with `backends` and `templates`.
    Json,
    /// CSV rows.
    Csv,
}

// ── init ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct InitArgs {
    #[arg(short = 'f', long = "force", help = "Overwrite an existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.backend`.
        key: String,
    },
    /// Print the effective configuration.
    List,
    /// Print the path to the configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
