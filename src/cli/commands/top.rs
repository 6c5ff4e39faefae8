use crate::cli::commands::{NO_DATA_MSG, build_filter, load_batch};
use crate::cli::parser::{Commands, OutputFormat};
use crate::config::Config;
use crate::core::report::Engine;
use crate::errors::{AppError, AppResult};
use crate::utils::formatting::fmt_ratio;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Top {
        file,
        filters,
        format,
    } = cmd
    {
        let engine = Engine::new(cfg)?;
        let filter = build_filter(filters)?;
        let records = load_batch(file, &engine, &filter)?;

        if records.is_empty() {
            println!("{NO_DATA_MSG}");
            return Ok(());
        }

        let top = engine.top_performers(&records);

        match format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&top)
                    .map_err(|e| AppError::Other(e.to_string()))?;
                println!("{json}");
            }
            OutputFormat::Table => {
                let mut table = Table::new(&[
                    "Shift day",
                    "Top operator",
                    "Avg/session",
                    "Sessions",
                    "Items",
                ]);
                for t in &top {
                    table.add_row(vec![
                        t.shift_day.to_string(),
                        t.operator.clone(),
                        fmt_ratio(Some(t.avg_per_session)),
                        t.session_count.to_string(),
                        t.total_items.to_string(),
                    ]);
                }
                print!("{}", table.render());
            }
        }
    }
    Ok(())
}
