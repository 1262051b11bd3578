//! Configuration inspection CLI commands.

use clap::{Args, Subcommand};

use booster_core::config::AppConfig;
use booster_core::error::AppError;

use crate::output;

const MASK: &str = "****";

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration with secrets masked
    Show,
}

/// Execute config commands
pub fn execute(args: &ConfigArgs, config: &AppConfig) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => output::print_item(&masked(config)),
    }
    Ok(())
}

/// A copy of the configuration safe to print.
fn masked(config: &AppConfig) -> AppConfig {
    let mut config = config.clone();
    config.database.url = mask_password(&config.database.url);
    config.auth.jwt_secret = MASK.to_string();
    if !config.storage.s3.secret_key.is_empty() {
        config.storage.s3.secret_key = MASK.to_string();
    }
    config
}

/// Mask password in database URL for display
fn mask_password(url: &str) -> String {
    if let Some(at_pos) = url.rfind('@') {
        let scheme_end = url.find("://").map(|i| i + 3).unwrap_or(0);
        if let Some(colon_pos) = url[scheme_end..at_pos].find(':') {
            let colon_pos = scheme_end + colon_pos;
            return format!("{}{MASK}{}", &url[..=colon_pos], &url[at_pos..]);
        }
    }
    url.to_string()
}
