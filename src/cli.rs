// CLI module - command-line argument parsing and handlers
//
// Subcommands:
// - search <keyword>: run one search without the TUI, print the results
// - config --show / --reset / --path: configuration management

use crate::config::{Config, VERSION};
use clap::{Parser, Subcommand};
use std::io::Write;

/// newsdesk - terminal client for a news search & content backend
#[derive(Parser)]
#[command(name = "newsdesk")]
#[command(version = VERSION)]
#[command(about = "Search news and generate content from your terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one search without the TUI and print the results
    Search {
        /// Keyword to search for
        keyword: String,
    },

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

/// What main should do after argument parsing
pub enum CliAction {
    /// No subcommand: run the TUI
    Tui,
    /// Headless one-shot search
    Search(String),
    /// A subcommand was fully handled, exit
    Done,
}

pub fn handle_cli() -> CliAction {
    let cli = Cli::parse();

    match cli.command {
        None => CliAction::Tui,
        Some(Commands::Search { keyword }) => CliAction::Search(keyword),
        Some(Commands::Config { show, reset, path }) => {
            if path {
                handle_config_path();
            } else if show {
                handle_config_show();
            } else if reset {
                handle_config_reset();
            } else {
                println!("Usage: newsdesk config [--show|--reset|--path]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --reset   Reset config file to defaults");
                println!("  --path    Show config file path");
            }
            CliAction::Done
        }
    }
}

fn handle_config_path() {
    match Config::config_path() {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!("Error: Could not determine config path");
            std::process::exit(1);
        }
    }
}

fn handle_config_show() {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    println!("api_url = {:?}", config.api_url);
    println!();
    println!("[logging]");
    println!("level = {:?}", config.logging.level);
    println!("file_enabled = {}", config.logging.file_enabled);
    println!("file_dir = {:?}", config.logging.file_dir.display().to_string());
    println!("file_prefix = {:?}", config.logging.file_prefix);

    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    // Never clobber an existing file without asking
    if path.exists() && !confirm_overwrite(&path) {
        println!("Aborted.");
        return;
    }

    let written = path
        .parent()
        .map(std::fs::create_dir_all)
        .unwrap_or(Ok(()))
        .and_then(|()| std::fs::write(&path, Config::default().to_toml()));

    match written {
        Ok(()) => println!("Config reset to defaults: {}", path.display()),
        Err(e) => {
            eprintln!("Error writing {}: {}", path.display(), e);
            std::process::exit(1);
        }
    }
}

/// Prompt on stderr so the answer works even with stdout redirected.
/// Anything but an explicit "y" (or an unreadable stdin) keeps the file.
fn confirm_overwrite(path: &std::path::Path) -> bool {
    eprint!("{} already exists. Overwrite? [y/N] ", path.display());
    let _ = std::io::stderr().flush();

    let mut answer = String::new();
    if std::io::stdin().read_line(&mut answer).is_err() {
        return false;
    }
    answer.trim().eq_ignore_ascii_case("y")
}
