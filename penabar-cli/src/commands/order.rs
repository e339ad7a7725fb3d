//! Order command - build a cart and submit it as one order.

use anyhow::{bail, Context, Result};
use penabar_core::Cart;
use penabar_store::submit_cart;
use tracing::info;

use crate::output::{CartOutput, JsonFormatter, TextFormatter};
use crate::prompt::confirm;
use crate::{App, OutputFormat};

/// Arguments for the order command.
#[derive(clap::Args)]
pub struct OrderArgs {
    /// Lines as `ID` or `IDxQTY`, e.g. `penabar order 1x2 3`.
    #[arg(required = true)]
    pub lines: Vec<String>,
}

/// One parsed `ID[xQTY]` argument.
fn parse_line(raw: &str) -> Result<(i64, u32)> {
    let (id, quantity) = match raw.split_once(['x', 'X']) {
        Some((id, qty)) => (
            id.trim().parse::<i64>(),
            qty.trim()
                .parse::<u32>()
                .with_context(|| format!("Invalid quantity in '{raw}'"))?,
        ),
        None => (raw.trim().parse::<i64>(), 1),
    };
    let id = id.with_context(|| format!("Invalid drink id in '{raw}'"))?;
    if quantity == 0 {
        bail!("Quantity must be at least 1 in '{raw}'");
    }
    Ok((id, quantity))
}

/// Runs the order command.
pub async fn run(args: &OrderArgs, app: &App) -> Result<()> {
    app.require_user().await?;

    let menu = app.api.list_drinks().await?;

    let mut cart = Cart::new();
    for raw in &args.lines {
        let (id, quantity) = parse_line(raw)?;
        let drink = menu
            .iter()
            .find(|d| d.id == id)
            .with_context(|| format!("Drink #{id} is not on the menu"))?;
        for _ in 0..quantity {
            cart.add(drink);
        }
    }

    let formatter = TextFormatter::new(!app.no_color);
    if app.format == OutputFormat::Text {
        println!("{}", formatter.format_cart(&cart));
    }

    if !confirm("Submit this order?", app.assume_yes)? {
        println!("Order discarded");
        return Ok(());
    }

    let summary = CartOutput::from(&cart);
    let confirmation = submit_cart(&mut cart, app.api.as_ref())
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;

    match app.format {
        OutputFormat::Text => match confirmation {
            Some(c) => {
                info!(order_id = ?c.id, "Order submitted");
                match c.message {
                    Some(message) => println!("{message}"),
                    None => println!("Order submitted"),
                }
            }
            None => println!("Nothing to order"),
        },
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(app.pretty);
            let output = SubmittedOrder {
                order_id: confirmation.as_ref().and_then(|c| c.id),
                cart: summary,
            };
            println!("{}", formatter.format(&output)?);
        }
    }

    Ok(())
}

/// JSON output of a submitted order.
#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct SubmittedOrder {
    #[serde(skip_serializing_if = "Option::is_none")]
    order_id: Option<i64>,
    cart: CartOutput,
}

#[cfg(test)]
mod tests {
    use super::parse_line;

    #[test]
    fn test_parse_plain_id() {
        assert_eq!(parse_line("3").unwrap(), (3, 1));
    }

    #[test]
    fn test_parse_id_with_quantity() {
        assert_eq!(parse_line("1x2").unwrap(), (1, 2));
        assert_eq!(parse_line("12X30").unwrap(), (12, 30));
    }

    #[test]
    fn test_parse_rejects_zero_quantity() {
        assert!(parse_line("1x0").is_err());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_line("beer").is_err());
        assert!(parse_line("1xmany").is_err());
    }
}
