//! User management CLI commands.
//!
//! The first admin account is bootstrapped from here: the HTTP API never
//! grants admin rights.

use std::sync::Arc;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use booster_auth::{PasswordHasher, PasswordValidator, TokenManager};
use booster_core::config::AppConfig;
use booster_core::error::AppError;
use booster_database::repositories::{
    AccessTokenRepository, AuditLogRepository, BrandRepository, UserRepository,
};
use booster_service::user::{RegisterUser, UserWithBrands};
use booster_service::{AuditService, UserService};

use crate::output::{self, OutputFormat};

/// Arguments for user commands
#[derive(Debug, Args)]
pub struct UserArgs {
    /// User subcommand
    #[command(subcommand)]
    pub command: UserCommand,
}

/// User subcommands
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// List all users with their brands
    List,
    /// Create a user account
    Create {
        /// Display name
        #[arg(long)]
        name: String,
        /// Login email
        #[arg(long)]
        email: String,
        /// Password; prompted for when omitted
        #[arg(long)]
        password: Option<String>,
        /// Grant admin rights
        #[arg(long)]
        admin: bool,
    },
    /// Grant admin rights
    Promote {
        /// Email of the account
        email: String,
    },
    /// Withdraw admin rights
    Demote {
        /// Email of the account
        email: String,
    },
}

/// User display row for table output
#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    /// User ID
    id: String,
    /// Display name
    name: String,
    /// Email
    email: String,
    /// Admin flag
    admin: bool,
    /// Brand names
    brands: String,
    /// Created at
    created_at: String,
}

impl From<&UserWithBrands> for UserRow {
    fn from(u: &UserWithBrands) -> Self {
        Self {
            id: u.user.id.to_string(),
            name: u.user.name.clone(),
            email: u.user.email.clone(),
            admin: u.user.is_admin,
            brands: u
                .brands
                .iter()
                .map(|b| b.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            created_at: u.user.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Execute user commands
pub async fn execute(
    args: &UserArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let pool = super::create_db_pool(config).await?;
    let users = build_user_service(config, pool.clone());

    match &args.command {
        UserCommand::List => {
            let all = users.all_with_brands().await?;
            match format {
                OutputFormat::Table => {
                    let rows: Vec<UserRow> = all.iter().map(UserRow::from).collect();
                    output::print_list(&rows, format);
                }
                OutputFormat::Json => output::print_item(&all),
            }
        }
        UserCommand::Create {
            name,
            email,
            password,
            admin,
        } => {
            let password = match password {
                Some(p) => p.clone(),
                None => prompt_password()?,
            };

            let user = users
                .register(RegisterUser {
                    name: name.clone(),
                    email: email.clone(),
                    password,
                    is_admin: *admin,
                })
                .await?;

            output::print_success(&format!("User '{}' created ({})", user.email, user.id));
        }
        UserCommand::Promote { email } => {
            users.set_admin(email, true).await?;
            output::print_success(&format!("User '{email}' is now an admin"));
        }
        UserCommand::Demote { email } => {
            users.set_admin(email, false).await?;
            output::print_success(&format!("User '{email}' is no longer an admin"));
        }
    }

    pool.close().await;
    Ok(())
}

fn build_user_service(config: &AppConfig, pool: sqlx::PgPool) -> UserService {
    let tokens = Arc::new(AccessTokenRepository::new(pool.clone()));
    UserService::new(
        Arc::new(UserRepository::new(pool.clone())),
        Arc::new(BrandRepository::new(pool.clone())),
        Arc::new(PasswordHasher::new()),
        Arc::new(PasswordValidator::new(&config.auth)),
        Arc::new(TokenManager::new(&config.auth, tokens)),
        Arc::new(AuditService::new(Arc::new(AuditLogRepository::new(pool)))),
    )
}

fn prompt_password() -> Result<String, AppError> {
    dialoguer::Password::new()
        .with_prompt("Password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()
        .map_err(|e| AppError::internal(format!("Input error: {e}")))
}
