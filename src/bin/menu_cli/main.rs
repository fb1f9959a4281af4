// ABOUTME: menu-cli - command-line browser for the Train Therapy menu
// ABOUTME: Lists sections, searches items, shows item details with nutrition, audits coverage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Train Therapy
//!
//! Usage:
//! ```bash
//! # Navigation anchors with item counts
//! menu-cli sections
//!
//! # Full menu, or only items whose names contain a query
//! menu-cli browse
//! menu-cli browse --query latte
//!
//! # Item detail sheet at a size
//! menu-cli show juices "Melon Juice" --size large
//!
//! # Nutrition coverage report as JSON
//! menu-cli --format json audit
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing::debug;

use train_therapy_menu::catalog::Menu;
use train_therapy_menu::config::{DisplayFormat, MenuConfig};
use train_therapy_menu::constants::service_names;
use train_therapy_menu::errors::AppError;
use train_therapy_menu::logging::LoggingConfig;
use train_therapy_menu::models::SizeKey;

#[derive(Parser)]
#[command(
    name = "menu-cli",
    about = "Train Therapy menu browser",
    long_about = "Browse the Train Therapy café menu: sections, search, item details with size-aware prices and nutrition."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format (defaults to MENU_OUTPUT_FORMAT, then text)
    #[arg(long, short = 'f', global = true, value_enum)]
    format: Option<DisplayFormat>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// List sections in menu order
    Sections,

    /// List items, optionally filtered by name
    Browse {
        /// Case-insensitive substring of item names
        #[arg(long, short = 'q')]
        query: Option<String>,
    },

    /// Show one item's detail sheet
    Show {
        /// Section id, e.g. `juices`
        section_id: String,

        /// Item name or slug, e.g. "Melon Juice" or `melon-juice`
        item: String,

        /// Size to display (defaults to MENU_DEFAULT_SIZE, then regular)
        #[arg(long, short = 's')]
        size: Option<SizeKey>,
    },

    /// Report nutrition coverage for every item
    Audit,
}

/// Settings resolved from flags and environment, passed to every command
pub struct Context<'a> {
    /// Loaded menu
    pub menu: &'a Menu,
    /// Effective configuration
    pub config: MenuConfig,
    /// Effective output format
    pub format: DisplayFormat,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = LoggingConfig::from_env().with_verbosity(cli.verbose).init() {
        eprintln!("warning: {e}");
    }

    let config = match MenuConfig::from_env() {
        Ok(config) => config,
        Err(error) => return helpers::display::report_error(error, cli.format),
    };
    let format = cli.format.unwrap_or(config.output_format);

    match run(cli.command, config, format) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => match e.downcast::<AppError>() {
            Ok(error) => helpers::display::report_error(error, Some(format)),
            Err(other) => {
                eprintln!("Error: {other:#}");
                ExitCode::FAILURE
            }
        },
    }
}

fn run(command: Command, config: MenuConfig, format: DisplayFormat) -> Result<()> {
    debug!(service = service_names::MENU_CLI, config = %config.summary(), %format, "Starting");

    let owned;
    let menu = if config.strict_nutrition_keys {
        owned = Menu::load_builtin(config.load_options()).map_err(AppError::from)?;
        &owned
    } else {
        Menu::builtin()?
    };

    let ctx = Context {
        menu,
        config,
        format,
    };

    match command {
        Command::Sections => commands::sections::run(&ctx)?,
        Command::Browse { query } => commands::browse::run(&ctx, query.as_deref().unwrap_or(""))?,
        Command::Show {
            section_id,
            item,
            size,
        } => commands::show::run(&ctx, &section_id, &item, size)?,
        Command::Audit => commands::audit::run(&ctx)?,
    }

    Ok(())
}
