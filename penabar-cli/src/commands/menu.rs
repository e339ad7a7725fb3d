//! Menu command - the drink menu grouped by category.

use anyhow::Result;
use tracing::info;

use crate::output::{DrinkOutput, JsonFormatter, TextFormatter};
use crate::{App, OutputFormat};

/// Runs the menu command.
pub async fn run(app: &App) -> Result<()> {
    app.require_user().await?;

    let drinks = app.api.list_drinks().await?;
    info!(count = drinks.len(), "Fetched menu");

    match app.format {
        OutputFormat::Text => {
            if drinks.is_empty() {
                println!("The menu is empty");
                return Ok(());
            }
            let formatter = TextFormatter::new(!app.no_color);
            println!("{}", formatter.format_menu(&drinks));
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(app.pretty);
            let output: Vec<DrinkOutput> = drinks.iter().map(DrinkOutput::from).collect();
            println!("{}", formatter.format(&output)?);
        }
    }

    Ok(())
}
