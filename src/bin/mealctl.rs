//! Headless driver: runs commands against the same menu the TUI edits.
//!
//! ```text
//! mealctl exec mon-u-s club
//! mealctl suggest mon-u-s ch
//! mealctl mail
//! mealctl show
//! ```

use anyhow::{bail, Result};
use mealplan::app::{
    config::AppConfig, context::AppContext, interpreter::CommandError, logging::init_logging,
};
use mealplan::domain::models::{MealEntry, Zone};
use std::process::ExitCode;

const USAGE: &str = "usage: mealctl <exec <command>...|suggest <partial>...|mail|show>";

#[tokio::main]
async fn main() -> ExitCode {
    match run(std::env::args().skip(1).collect()).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("mealctl: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// `Ok(false)` means the command ran but was rejected.
async fn run(args: Vec<String>) -> Result<bool> {
    let Some((subcommand, rest)) = args.split_first() else {
        bail!("{USAGE}");
    };

    let (config, config_error) = load_config();
    init_logging(&config.data_dir())?;
    if let Some(message) = config_error {
        tracing::warn!(error = %message, "Config ignored");
        eprintln!("mealctl: {message} (using defaults)");
    }
    let mut ctx = AppContext::from_config(config)?;

    match subcommand.as_str() {
        "exec" => {
            ctx.store.load();
            let outcome = ctx.execute(&rest.join(" "));
            if outcome.success {
                println!("{}", outcome.message);
            } else {
                eprintln!("{}", outcome.message);
            }
            Ok(outcome.success)
        }
        "suggest" => {
            for suggestion in ctx.suggest(&rest.join(" ")) {
                println!("{suggestion}");
            }
            Ok(true)
        }
        "mail" => {
            ctx.store.load();
            let Some(grid) = ctx.store.grid() else {
                bail!("{}", CommandError::Uninitialized);
            };
            print!("{}", ctx.mail.generate(grid).await);
            Ok(true)
        }
        "show" => {
            ctx.store.load();
            let Some(grid) = ctx.store.grid() else {
                bail!("{}", CommandError::Uninitialized);
            };
            for (index, day) in grid.days().iter().enumerate() {
                let label = ctx.days.label(index).unwrap_or("?");
                let token = ctx.days.token_for(index).unwrap_or_default();
                println!(
                    "{label:<10} {token:<4} {}: {:<24} {}: {}",
                    Zone::Upper.token(),
                    describe(day.slot(Zone::Upper)),
                    Zone::Lower.token(),
                    describe(day.slot(Zone::Lower)),
                );
            }
            Ok(true)
        }
        other => bail!("unknown subcommand '{other}'\n{USAGE}"),
    }
}

/// A malformed config file falls back to the defaults, like the TUI does.
fn load_config() -> (AppConfig, Option<String>) {
    config_or_default(AppConfig::load())
}

fn config_or_default(loaded: Result<AppConfig>) -> (AppConfig, Option<String>) {
    match loaded {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(format!("{e:#}"))),
    }
}

fn describe(entry: &MealEntry) -> String {
    if entry.is_unset() {
        "-".to_string()
    } else if entry.is_free_text() {
        format!("\"{}\"", entry.name())
    } else {
        entry.name().to_string()
    }
}
