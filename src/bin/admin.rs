//! CLI administration tool for cinescope.
//!
//! Provides commands for managing API tokens and performing database
//! operations without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Create a new API token for user 1
//! cargo run --bin admin -- token create --user-id 1
//!
//! # List all tokens
//! cargo run --bin admin -- token list
//!
//! # Revoke a token
//! cargo run --bin admin -- token revoke "Mobile App"
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//! - `TOKEN_SIGNING_SECRET` (required for token commands): must match the
//!   server's secret or created tokens will not authenticate
//!
//! # Features
//!
//! - **Token Management**: Create, list, and revoke API tokens
//! - **Database Tools**: Connection checks and info queries
//! - **Interactive Prompts**: Confirmation dialogs for destructive actions
//! - **Colored Output**: Terminal-friendly formatting using `colored` crate

use cinescope::domain::repositories::TokenRepository;
use cinescope::infrastructure::persistence::PgTokenRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing cinescope.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage API tokens
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Token management subcommands.
#[derive(Subcommand)]
enum TokenAction {
    /// Create a new API token
    Create {
        /// User the token authenticates as
        #[arg(short, long)]
        user_id: i64,

        /// Token name (e.g., "Mobile App", "CI")
        #[arg(short, long)]
        name: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all tokens
    List,

    /// Revoke a token
    Revoke {
        /// Token name or ID to revoke
        name_or_id: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Token { action } => handle_token_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches token management commands.
async fn handle_token_action(action: TokenAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgTokenRepository::new(pool.clone()));

    match action {
        TokenAction::Create { user_id, name, yes } => {
            create_token(repo, user_id, name, yes).await?;
        }
        TokenAction::List => {
            list_tokens(repo).await?;
        }
        TokenAction::Revoke { name_or_id } => {
            revoke_token(repo, name_or_id).await?;
        }
    }

    Ok(())
}

/// Creates a new API token with interactive prompts.
///
/// Only the HMAC-SHA256 hash is stored; the raw token is displayed once and
/// cannot be retrieved later. Tokens are 48 alphanumeric characters.
async fn create_token(
    repo: Arc<PgTokenRepository>,
    user_id: i64,
    name: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🔑 Create API Token".bright_blue().bold());
    println!();

    let token_name = match name {
        Some(n) => n,
        None => Input::new()
            .with_prompt("Token name")
            .with_initial_text("Mobile App")
            .interact_text()?,
    };

    let token_value = generate_token();
    println!("{}", "✨ Generated new token".green());

    println!();
    println!("{}", "Token details:".bright_white().bold());
    println!("  User:  {}", user_id.to_string().cyan());
    println!("  Name:  {}", token_name.cyan());
    println!("  Token: {}", token_value.bright_yellow().bold());
    println!();
    println!(
        "{}",
        "⚠️  IMPORTANT: Save this token now! You won't be able to see it again."
            .red()
            .bold()
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this token?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let token_hash = hash_token(&token_value)?;

    repo.create_token(user_id, &token_name, &token_hash)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create token: {}", e))?;

    println!();
    println!("{}", "✅ Token created successfully!".green().bold());
    println!();
    println!("{}", "Add this to your requests:".bright_white());
    println!(
        "  {}: Bearer {}",
        "Authorization".bright_cyan(),
        token_value.bright_yellow()
    );
    println!();
    println!("{}", "Example:".bright_white());
    println!(
        "  curl -H \"Authorization: Bearer {}\" http://localhost:3000/api/movies/favorites",
        token_value.bright_yellow()
    );
    println!();

    Ok(())
}

/// Lists all API tokens with status indicators.
async fn list_tokens(repo: Arc<PgTokenRepository>) -> Result<()> {
    println!("{}", "📋 API Tokens".bright_blue().bold());
    println!();

    let tokens = repo
        .list_tokens()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list tokens: {}", e))?;

    if tokens.is_empty() {
        println!("{}", "  No tokens found".yellow());
        println!();
        println!(
            "  Create one with: {} admin token create --user-id 1",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<3} {:<6} {:<30} {:<20} {:<10}",
        "ID".bright_white().bold(),
        "User".bright_white().bold(),
        "Name".bright_white().bold(),
        "Created".bright_white().bold(),
        "Status".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for token in &tokens {
        let status = if token.revoked_at.is_some() {
            "REVOKED".red()
        } else {
            "ACTIVE".green()
        };

        println!(
            "  {:<3} {:<6} {:<30} {:<20} {}",
            token.id.to_string().bright_black(),
            token.user_id.to_string().bright_black(),
            token.name.cyan(),
            token
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            status
        );
    }

    println!();
    println!(
        "  Total: {}",
        tokens.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Revokes a token by name or ID with confirmation prompt.
///
/// Numeric input is treated as an ID, anything else as an exact name match.
async fn revoke_token(repo: Arc<PgTokenRepository>, name_or_id: String) -> Result<()> {
    println!("{}", "🔒 Revoke API Token".bright_blue().bold());
    println!();

    let token = match name_or_id.parse::<i64>() {
        Ok(id) => repo
            .find_by_id(id)
            .await
            .map_err(|e| anyhow::anyhow!("Database error: {}", e))?,
        Err(_) => repo
            .find_by_name(&name_or_id)
            .await
            .map_err(|e| anyhow::anyhow!("Database error: {}", e))?,
    };

    let token = token.context("Token not found")?;

    if token.revoked_at.is_some() {
        println!("{}", "⚠️  This token is already revoked".yellow());
        return Ok(());
    }

    println!("  Token: {}", token.name.cyan());
    println!("  ID:    {}", token.id.to_string().bright_black());
    println!();

    let confirmed = Confirm::new()
        .with_prompt("Revoke this token?")
        .default(false)
        .interact()?;

    if !confirmed {
        println!("{}", "❌ Cancelled".red());
        return Ok(());
    }

    repo.revoke_token(token.id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to revoke token: {}", e))?;

    println!();
    println!("{}", "✅ Token revoked successfully!".green().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}

/// Generates a cryptographically random token.
///
/// 48 alphanumeric characters, ~286 bits of entropy.
fn generate_token() -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    const TOKEN_LEN: usize = 48;

    let mut rng = rand::rng();

    (0..TOKEN_LEN)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// Hashes a token with HMAC-SHA256 keyed by `TOKEN_SIGNING_SECRET`.
///
/// Must match the server's hashing or the token will not authenticate.
fn hash_token(token: &str) -> Result<String> {
    let secret = std::env::var("TOKEN_SIGNING_SECRET")
        .context("TOKEN_SIGNING_SECRET must be set to create tokens")?;

    let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes())
        .expect("HMAC accepts any key length");
    mac.update(token.as_bytes());

    Ok(hex::encode(mac.finalize().into_bytes()))
}
