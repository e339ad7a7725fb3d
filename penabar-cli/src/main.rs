// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! Peñabar CLI - order drinks and run the bar from the command line.
//!
//! # Examples
//!
//! ```bash
//! # Log in and check your tab
//! penabar login maite secret
//! penabar whoami
//!
//! # Browse the menu and order two beers and a cola
//! penabar menu
//! penabar order 1x2 3
//!
//! # Staff: work the pending queue
//! penabar pending
//! penabar serve 12
//! penabar cancel 13
//!
//! # Admin: manage the catalog and members
//! penabar drinks list
//! penabar drinks add "Caña" 1.80 cervezas
//! penabar users role 4 admin
//! penabar stats
//! ```

mod commands;
mod output;
mod prompt;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use penabar_client::ApiClient;
use penabar_core::User;
use penabar_store::{
    Config, CredentialStore, FileStorage, KeyringStorage, SessionStore, StorageBackend, StoreError,
};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{auth, catalog, menu, order, staff, stats, users};

// ============================================================================
// CLI Definition
// ============================================================================

/// Peñabar CLI - the peña's bar tab from the command line.
#[derive(Parser)]
#[command(name = "penabar")]
#[command(about = "Bar tab client for the peña")]
#[command(long_about = r#"
Peñabar orders drinks against the peña's backend and keeps a per-member tab.

Members log in once; the session is stored securely and restored on every
run. Staff (admin/superadmin) additionally get the pending-order queue,
catalog management, member management and the statistics dashboard.

Examples:
  penabar login maite secret     # Log in (stores the session)
  penabar menu                   # Menu grouped by category
  penabar order 1x2 3            # Two of drink 1, one of drink 3
  penabar whoami                 # Profile and current balance
  penabar pending                # Staff: pending orders
  penabar stats                  # Admin: sales ranking and tabs
"#)]
#[command(version)]
#[command(author = "Peñabar Contributors")]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,

    /// Backend base URL (overrides the config file).
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Output format (text or json).
    #[arg(long, short = 'f', default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Answer yes to confirmation prompts.
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Verbose output (show debug info).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Quiet mode (minimal output).
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Log in and store the session.
    Login(auth::LoginArgs),

    /// Create an account and log in.
    Register(auth::RegisterArgs),

    /// Log out and wipe the stored session.
    Logout,

    /// Show the logged-in profile with a fresh balance.
    #[command(visible_alias = "me")]
    Whoami,

    /// Show the drink menu grouped by category.
    #[command(visible_alias = "m")]
    Menu,

    /// Build a cart and submit it as one order.
    #[command(visible_alias = "o")]
    Order(order::OrderArgs),

    /// List pending orders (staff).
    #[command(visible_alias = "p")]
    Pending,

    /// Mark a pending order as served (staff).
    Serve(staff::ServeArgs),

    /// Cancel a pending order (staff).
    Cancel(staff::CancelArgs),

    /// Manage the drinks catalog (admin).
    Drinks(catalog::DrinksArgs),

    /// Manage members and roles (admin).
    Users(users::UsersArgs),

    /// Sales ranking and member tabs (admin).
    Stats,

    /// Wipe the order history (admin).
    Reset,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable text with colors.
    #[default]
    Text,
    /// JSON output for scripting.
    Json,
}

/// CLI exit codes.
#[repr(i32)]
pub enum ExitCode {
    /// Success.
    Success = 0,
    /// General error.
    Error = 1,
    /// The command needs a login (or the session expired).
    AuthRequired = 2,
}

// ============================================================================
// App Context
// ============================================================================

/// Everything a command needs: the API client, the bootstrapped session
/// store, and the output flags.
pub struct App {
    pub api: Arc<ApiClient>,
    pub session: SessionStore,
    pub format: OutputFormat,
    pub pretty: bool,
    pub no_color: bool,
    pub assume_yes: bool,
}

impl App {
    /// Builds the context from config + CLI flags and restores any stored
    /// session.
    async fn bootstrap(cli: &Cli) -> Result<Self> {
        let config = Config::load()?;

        let base_url = cli.base_url.as_deref().unwrap_or(&config.base_url);
        let api = Arc::new(ApiClient::with_timeout(
            base_url,
            Duration::from_secs(config.timeout_secs),
        )?);

        let storage: Arc<dyn CredentialStore> = match config.storage {
            StorageBackend::Keyring => Arc::new(KeyringStorage::new()),
            StorageBackend::File => Arc::new(FileStorage::new(Config::default_credentials_path())),
        };

        let session = SessionStore::new(api.clone(), storage);
        session.bootstrap().await;

        Ok(Self {
            api,
            session,
            format: cli.format,
            pretty: cli.pretty,
            no_color: cli.no_color,
            assume_yes: cli.yes,
        })
    }

    /// The logged-in user, or a clear error telling the caller to log in.
    pub async fn require_user(&self) -> Result<User> {
        match self.session.current_user().await {
            Some(user) => Ok(user),
            None => Err(anyhow::Error::from(StoreError::NotLoggedIn)
                .context("Run `penabar login <name> <password>` first")),
        }
    }

    /// Like [`App::require_user`], but also requires a staff role.
    pub async fn require_staff(&self) -> Result<User> {
        let user = self.require_user().await?;
        if !user.role.is_staff() {
            anyhow::bail!("This command requires an admin role (you are '{}')", user.role);
        }
        Ok(user)
    }
}

// ============================================================================
// Logging Setup
// ============================================================================

fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return; // No logging in quiet mode
    }

    let filter = if verbose {
        EnvFilter::new("penabar=debug,info")
    } else {
        EnvFilter::new("penabar=warn")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let app = match App::bootstrap(&cli).await {
        Ok(app) => app,
        Err(e) => {
            if !cli.quiet {
                eprintln!("Error: {e}");
            }
            std::process::exit(ExitCode::Error as i32);
        }
    };

    let result = match &cli.command {
        Commands::Login(args) => auth::login(args, &app).await,
        Commands::Register(args) => auth::register(args, &app).await,
        Commands::Logout => auth::logout(&app).await,
        Commands::Whoami => auth::whoami(&app).await,
        Commands::Menu => menu::run(&app).await,
        Commands::Order(args) => order::run(args, &app).await,
        Commands::Pending => staff::pending(&app).await,
        Commands::Serve(args) => staff::serve(args, &app).await,
        Commands::Cancel(args) => staff::cancel(args, &app).await,
        Commands::Drinks(args) => catalog::run(args, &app).await,
        Commands::Users(args) => users::run(args, &app).await,
        Commands::Stats => stats::run(&app).await,
        Commands::Reset => staff::reset(&app).await,
    };

    if let Err(e) = result {
        if !cli.quiet {
            eprintln!("Error: {e}");
        }
        std::process::exit(exit_code_for(&e) as i32);
    }

    Ok(())
}

/// Maps an error to the process exit code.
fn exit_code_for(e: &anyhow::Error) -> ExitCode {
    if let Some(StoreError::NotLoggedIn | StoreError::SessionExpired) = e.downcast_ref() {
        return ExitCode::AuthRequired;
    }
    if let Some(penabar_client::ApiError::Unauthorized) = e.downcast_ref() {
        return ExitCode::AuthRequired;
    }
    ExitCode::Error
}
