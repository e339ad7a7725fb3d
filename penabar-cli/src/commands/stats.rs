//! Stats command - sales ranking and member tabs.

use anyhow::Result;
use tracing::info;

use crate::output::{JsonFormatter, StatisticsOutput, TextFormatter};
use crate::{App, OutputFormat};

/// Runs the stats command.
pub async fn run(app: &App) -> Result<()> {
    app.require_staff().await?;

    let stats = app.api.statistics().await?;
    info!(
        ranking = stats.ranking.len(),
        tabs = stats.tabs.len(),
        "Fetched statistics"
    );

    match app.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!app.no_color);
            println!("{}", formatter.format_statistics(&stats));
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(app.pretty);
            println!("{}", formatter.format(&StatisticsOutput::from(&stats))?);
        }
    }

    Ok(())
}
