//! Auth commands - login, register, logout, whoami.

use anyhow::Result;
use penabar_store::StoreError;
use tracing::{debug, info};

use crate::output::{JsonFormatter, ProfileOutput, TextFormatter};
use crate::{App, OutputFormat};

/// Arguments for the login command.
#[derive(clap::Args)]
pub struct LoginArgs {
    /// Member name.
    pub name: String,
    /// Password.
    pub password: String,
}

/// Arguments for the register command.
#[derive(clap::Args)]
pub struct RegisterArgs {
    /// Member name (must be unused).
    pub name: String,
    /// Password.
    pub password: String,
}

/// Runs the login command.
pub async fn login(args: &LoginArgs, app: &App) -> Result<()> {
    let user = app
        .session
        .login(&args.name, &args.password)
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;

    print_profile(app, &user)?;
    Ok(())
}

/// Runs the register command.
pub async fn register(args: &RegisterArgs, app: &App) -> Result<()> {
    let user = app
        .session
        .register(&args.name, &args.password)
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;

    info!(user = %user.name, "Account created");
    print_profile(app, &user)?;
    Ok(())
}

/// Runs the logout command.
pub async fn logout(app: &App) -> Result<()> {
    if !app.session.is_logged_in().await {
        println!("Not logged in");
        return Ok(());
    }

    app.session.logout().await;
    println!("Logged out");
    Ok(())
}

/// Runs the whoami command: shows the profile with a freshly fetched
/// balance. A refresh failure other than expiry falls back to the cached
/// profile.
pub async fn whoami(app: &App) -> Result<()> {
    let cached = app.require_user().await?;

    let user = match app.session.refresh_profile().await {
        Ok(fresh) => fresh,
        Err(e @ (StoreError::NotLoggedIn | StoreError::SessionExpired)) => {
            return Err(anyhow::Error::from(e));
        }
        Err(e) => {
            debug!(error = %e, "Refresh failed, showing cached balance");
            cached
        }
    };

    print_profile(app, &user)?;
    Ok(())
}

fn print_profile(app: &App, user: &penabar_core::User) -> Result<()> {
    match app.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!app.no_color);
            println!("{}", formatter.format_profile(user));
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(app.pretty);
            println!("{}", formatter.format(&ProfileOutput::from(user))?);
        }
    }
    Ok(())
}
