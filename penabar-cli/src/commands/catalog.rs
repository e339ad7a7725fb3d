//! Drinks command - admin catalog management.

use anyhow::Result;
use clap::Subcommand;
use penabar_core::DrinkPayload;
use rust_decimal::Decimal;
use tracing::info;

use crate::output::{DrinkOutput, JsonFormatter, TextFormatter};
use crate::{App, OutputFormat};

/// Arguments for the drinks command.
#[derive(clap::Args)]
pub struct DrinksArgs {
    /// Catalog action.
    #[command(subcommand)]
    pub action: DrinksAction,
}

/// Catalog actions.
#[derive(Subcommand)]
pub enum DrinksAction {
    /// List the full catalog, inactive drinks included.
    List,

    /// Add a drink to the catalog.
    Add {
        /// Display name.
        name: String,
        /// Price in euros, e.g. `1.80`.
        price: Decimal,
        /// Category, e.g. `cervezas`.
        category: String,
    },

    /// Change any of a drink's fields.
    Edit {
        /// Drink id.
        id: i64,
        /// New display name.
        #[arg(long)]
        name: Option<String>,
        /// New price in euros.
        #[arg(long)]
        price: Option<Decimal>,
        /// New category.
        #[arg(long)]
        category: Option<String>,
    },

    /// Put a drink back on the menu.
    Enable {
        /// Drink id.
        id: i64,
    },

    /// Take a drink off the menu without deleting it.
    Disable {
        /// Drink id.
        id: i64,
    },
}

/// Runs the drinks command.
pub async fn run(args: &DrinksArgs, app: &App) -> Result<()> {
    app.require_staff().await?;

    match &args.action {
        DrinksAction::List => list(app).await,
        DrinksAction::Add {
            name,
            price,
            category,
        } => {
            let payload = DrinkPayload::new(name.clone(), *price, category.clone());
            app.api.create_drink(&payload).await?;
            info!(name = %name, "Drink created");
            println!("Added '{name}' at {price} € ({category})");
            Ok(())
        }
        DrinksAction::Edit {
            id,
            name,
            price,
            category,
        } => {
            let payload = DrinkPayload {
                name: name.clone(),
                price: *price,
                category: category.clone(),
                active: None,
            };
            app.api.update_drink(*id, &payload).await?;
            println!("Updated drink #{id}");
            Ok(())
        }
        DrinksAction::Enable { id } => set_active(app, *id, true).await,
        DrinksAction::Disable { id } => set_active(app, *id, false).await,
    }
}

async fn list(app: &App) -> Result<()> {
    let drinks = app.api.all_drinks().await?;

    match app.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!app.no_color);
            println!("{}", formatter.format_catalog(&drinks));
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(app.pretty);
            let output: Vec<DrinkOutput> = drinks.iter().map(DrinkOutput::from).collect();
            println!("{}", formatter.format(&output)?);
        }
    }
    Ok(())
}

async fn set_active(app: &App, id: i64, active: bool) -> Result<()> {
    app.api.update_drink(id, &DrinkPayload::set_active(active)).await?;
    if active {
        println!("Drink #{id} is back on the menu");
    } else {
        println!("Drink #{id} is off the menu");
    }
    Ok(())
}
