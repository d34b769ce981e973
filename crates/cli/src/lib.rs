pub mod commands;
pub mod fixtures;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use satsuma_core::Tone;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "satsuma",
    about = "Satsuma reply-assistant CLI",
    long_about = "Drive the Satsuma core from the command line: summarize customer conversations, generate ranked reply suggestions, and run smoke validation.",
    after_help = "Examples:\n  satsuma suggest --message \"青島みかんを5kg注文したいです\"\n  satsuma summarize --customer taro --history history.json\n  satsuma smoke"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Build a customer profile summary from a conversation history file")]
    Summarize {
        #[arg(long, help = "Customer identifier")]
        customer: String,
        #[arg(long, help = "Path to a JSON array of messages (omit for an empty history)")]
        history: Option<PathBuf>,
    },
    #[command(about = "Generate ranked reply suggestions for one customer message")]
    Suggest {
        #[arg(long, help = "Inbound customer message text")]
        message: String,
        #[arg(long, value_enum, help = "Single preferred tone instead of the default pair")]
        tone: Option<ToneArg>,
        #[arg(long, help = "Path to a customer summary JSON file")]
        summary: Option<PathBuf>,
        #[arg(long, help = "Path to a JSON array of prior messages")]
        history: Option<PathBuf>,
        #[arg(long, help = "Seed for deterministic template selection")]
        seed: Option<u64>,
    },
    #[command(about = "Run deterministic end-to-end checks over bundled demo fixtures")]
    Smoke,
}

/// Command-line spelling of the core tone values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ToneArg {
    Friendly,
    Professional,
    Apologetic,
    Enthusiastic,
}

impl From<ToneArg> for Tone {
    fn from(value: ToneArg) -> Self {
        match value {
            ToneArg::Friendly => Tone::Friendly,
            ToneArg::Professional => Tone::Professional,
            ToneArg::Apologetic => Tone::Apologetic,
            ToneArg::Enthusiastic => Tone::Enthusiastic,
        }
    }
}

pub fn run() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Summarize { customer, history } => {
            commands::summarize::run(&customer, history.as_deref())
        }
        Command::Suggest { message, tone, summary, history, seed } => {
            commands::suggest::run(commands::suggest::SuggestArgs {
                message: &message,
                tone: tone.map(Tone::from),
                summary_path: summary.as_deref(),
                history_path: history.as_deref(),
                seed,
            })
        }
        Command::Smoke => commands::smoke::run(),
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}

// Logs go to stderr; stdout carries the JSON payload.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
