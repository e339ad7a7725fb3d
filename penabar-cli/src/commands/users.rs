//! Users command - admin member management.

use anyhow::{bail, Context, Result};
use clap::Subcommand;
use penabar_core::{Role, User};
use tracing::info;

use crate::output::{JsonFormatter, ProfileOutput, TextFormatter};
use crate::prompt::confirm;
use crate::{App, OutputFormat};

/// Arguments for the users command.
#[derive(clap::Args)]
pub struct UsersArgs {
    /// Member action.
    #[command(subcommand)]
    pub action: UsersAction,
}

/// Member actions.
#[derive(Subcommand)]
pub enum UsersAction {
    /// List all members with their roles and balances.
    List,

    /// Change a member's role.
    Role {
        /// Member id.
        id: i64,
        /// New role: cliente, admin.
        #[arg(value_parser = parse_role)]
        role: Role,
    },

    /// Delete a member's account.
    Delete {
        /// Member id.
        id: i64,
    },
}

fn parse_role(raw: &str) -> Result<Role, String> {
    match raw.to_lowercase().as_str() {
        "cliente" => Ok(Role::Cliente),
        "admin" => Ok(Role::Admin),
        "superadmin" => Err("the superadmin role cannot be granted from here".to_string()),
        other => Err(format!("unknown role '{other}' (use cliente or admin)")),
    }
}

/// Runs the users command.
pub async fn run(args: &UsersArgs, app: &App) -> Result<()> {
    app.require_staff().await?;

    match &args.action {
        UsersAction::List => list(app).await,
        UsersAction::Role { id, role } => set_role(app, *id, *role).await,
        UsersAction::Delete { id } => delete(app, *id).await,
    }
}

async fn list(app: &App) -> Result<()> {
    let users = app.api.list_users().await?;
    info!(count = users.len(), "Fetched members");

    match app.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!app.no_color);
            println!("{}", formatter.format_users(&users));
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(app.pretty);
            let output: Vec<ProfileOutput> = users.iter().map(ProfileOutput::from).collect();
            println!("{}", formatter.format(&output)?);
        }
    }
    Ok(())
}

async fn set_role(app: &App, id: i64, role: Role) -> Result<()> {
    let target = find_member(app, id).await?;
    // The owner account is untouchable from the client, whatever the
    // backend would say.
    if target.role == Role::Superadmin {
        bail!("'{}' is the superadmin account and cannot be modified", target.name);
    }

    app.api.set_user_role(id, role).await?;
    info!(user = %target.name, role = %role, "Role changed");
    println!("'{}' is now {role}", target.name);
    Ok(())
}

async fn delete(app: &App, id: i64) -> Result<()> {
    let target = find_member(app, id).await?;
    if target.role == Role::Superadmin {
        bail!("'{}' is the superadmin account and cannot be deleted", target.name);
    }

    if !confirm(
        &format!("Delete '{}' and their tab?", target.name),
        app.assume_yes,
    )? {
        println!("Kept '{}'", target.name);
        return Ok(());
    }

    app.api.delete_user(id).await?;
    println!("Deleted '{}'", target.name);
    Ok(())
}

async fn find_member(app: &App, id: i64) -> Result<User> {
    let users = app.api.list_users().await?;
    users
        .into_iter()
        .find(|u| u.id == id)
        .with_context(|| format!("No member with id {id}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parser_accepts_grantable_roles() {
        assert_eq!(parse_role("cliente").unwrap(), Role::Cliente);
        assert_eq!(parse_role("Admin").unwrap(), Role::Admin);
    }

    #[test]
    fn test_role_parser_refuses_superadmin() {
        assert!(parse_role("superadmin").is_err());
    }
}
