use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing::warn;

use hant_cli::commands::{convert_ops, detect_ops, read_input, settings_ops};
use hant_core::{Script, ScriptConverter};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Parser)]
#[command(name = "hanttool", about = "Chinese script detection and conversion diagnostics")]
struct Cli {
    /// Custom settings TOML (see `settings export`)
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Write JSONL traces to this directory (requires the `trace` feature)
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Detect whether text is Simplified or Traditional
    Detect {
        /// Input file (stdin when omitted or "-")
        file: Option<String>,
        /// Print the full detection report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Convert text into the given script
    Convert {
        /// Target script: traditional or simplified
        #[arg(long)]
        to: Script,
        /// Input file (stdin when omitted or "-")
        file: Option<String>,
    },
    /// Load a document session and toggle it repeatedly
    Toggle {
        /// Input file (stdin when omitted or "-")
        file: Option<String>,
        /// Document title, converted along with the body
        #[arg(long, default_value = "")]
        title: String,
        /// Number of toggles to perform
        #[arg(short = 'n', long, default_value = "1")]
        times: usize,
    },
    /// Inspect or validate detector settings
    Settings {
        #[command(subcommand)]
        command: SettingsCommand,
    },
}

#[derive(Subcommand)]
enum SettingsCommand {
    /// Print the default settings TOML
    Export,
    /// Validate a settings TOML file
    Validate {
        /// Settings file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    hant_cli::trace_init::init_tracing(cli.log_dir.as_deref());
    if let Some(ref file) = cli.settings {
        die!(settings_ops::settings_install(file), "Error: {}");
    }

    let converter = ScriptConverter::shared();

    match cli.command {
        Command::Detect { file, json } => {
            let text = die!(read_input(file.as_deref()), "Error: {}");
            let out = die!(detect_ops::detect(converter, &text, json), "Error: {}");
            println!("{out}");
        }
        Command::Convert { to, file } => {
            let text = die!(read_input(file.as_deref()), "Error: {}");
            if !converter.is_available() {
                warn!(script = %to, "conversion engine unavailable");
                eprintln!("Warning: conversion engine unavailable, output is unchanged");
            }
            print!("{}", convert_ops::convert(converter, &text, to));
        }
        Command::Toggle { file, title, times } => {
            let text = die!(read_input(file.as_deref()), "Error: {}");
            print!("{}", convert_ops::toggle(converter, &title, &text, times));
        }
        Command::Settings { command } => match command {
            SettingsCommand::Export => print!("{}", settings_ops::settings_export()),
            SettingsCommand::Validate { file } => {
                println!("{}", die!(settings_ops::settings_validate(&file), "Error: {}"));
            }
        },
    }
}
