use std::path::PathBuf;

use clap::{Parser, Subcommand};

use uz_cli::commands::convert_ops::DirectionChoice;
use uz_cli::commands::{accuracy_ops, config_ops, convert_ops};
use uz_core::Direction;

#[derive(Parser)]
#[command(name = "uztool", about = "Uzbek Cyrillic/Latin transliteration tool")]
struct Cli {
    /// Custom settings TOML (see `settings-export`)
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Write JSON trace events to this directory (requires --features trace)
    #[arg(long, global = true)]
    trace_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate text, preserving <...> tags
    Convert {
        /// Text to convert (reads --file or stdin when omitted)
        text: Option<String>,
        /// Read input from a file
        #[arg(long, conflicts_with = "text")]
        file: Option<String>,
        /// cyrillic-to-latin, latin-to-cyrillic or auto (default: from settings)
        #[arg(short, long)]
        direction: Option<DirectionChoice>,
        /// Treat tags as ordinary text
        #[arg(long)]
        plain: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show how text is split into text and tag spans
    Spans {
        /// Text to split
        text: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Run conversion accuracy tests from a TOML corpus
    Accuracy {
        /// Path to the accuracy corpus TOML file
        corpus_file: String,
        /// Only run cases in this direction
        #[arg(short, long)]
        direction: Option<Direction>,
        /// Show passing cases too (default: only failures and skips)
        #[arg(long)]
        verbose: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Export the compiled character tables as TOML
    TableExport,
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Some(ref dir) = cli.trace_dir {
        uz_engine::trace_init::init_tracing(dir);
    }
    if let Some(ref file) = cli.settings {
        config_ops::load_settings(file);
    }

    match cli.command {
        Command::Convert {
            text,
            file,
            direction,
            plain,
            json,
        } => convert_ops::convert_cmd(
            text.as_deref(),
            file.as_deref(),
            direction,
            plain,
            json,
        ),
        Command::Spans { text, json } => convert_ops::spans_cmd(&text, json),
        Command::Accuracy {
            corpus_file,
            direction,
            verbose,
            json,
        } => accuracy_ops::accuracy_cmd(&corpus_file, direction, verbose, json),
        Command::TableExport => config_ops::table_export(),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
