//! Staff commands - the pending-order queue and the history reset.

use anyhow::Result;
use tracing::info;

use crate::output::{JsonFormatter, OrderOutput, TextFormatter};
use crate::prompt::confirm;
use crate::{App, OutputFormat};

/// Arguments for the serve command.
#[derive(clap::Args)]
pub struct ServeArgs {
    /// Pending order id.
    pub id: i64,
}

/// Arguments for the cancel command.
#[derive(clap::Args)]
pub struct CancelArgs {
    /// Pending order id.
    pub id: i64,
}

/// Runs the pending command: lists the queue oldest-first.
pub async fn pending(app: &App) -> Result<()> {
    app.require_staff().await?;

    let orders = app.api.pending_orders().await?;
    info!(count = orders.len(), "Fetched pending orders");

    match app.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!app.no_color);
            println!("{}", formatter.format_pending(&orders));
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(app.pretty);
            let output: Vec<OrderOutput> = orders.iter().map(OrderOutput::from).collect();
            println!("{}", formatter.format(&output)?);
        }
    }

    Ok(())
}

/// Runs the serve command: marks a pending order as delivered, which is
/// when the backend charges it to the member's tab.
pub async fn serve(args: &ServeArgs, app: &App) -> Result<()> {
    app.require_staff().await?;

    app.api.serve_order(args.id).await?;
    println!("Order #{} served", args.id);
    Ok(())
}

/// Runs the cancel command: removes a pending order without charging it.
pub async fn cancel(args: &CancelArgs, app: &App) -> Result<()> {
    app.require_staff().await?;

    if !confirm(
        &format!("Cancel order #{} without charging it?", args.id),
        app.assume_yes,
    )? {
        println!("Kept order #{}", args.id);
        return Ok(());
    }

    app.api.cancel_order(args.id).await?;
    println!("Order #{} cancelled", args.id);
    Ok(())
}

/// Runs the reset command: wipes the served-order history behind the
/// statistics dashboard.
pub async fn reset(app: &App) -> Result<()> {
    app.require_staff().await?;

    if !confirm(
        "Wipe the entire order history? This cannot be undone.",
        app.assume_yes,
    )? {
        println!("History kept");
        return Ok(());
    }

    app.api.reset_orders().await?;
    info!("Order history reset");
    println!("Order history wiped");
    Ok(())
}
