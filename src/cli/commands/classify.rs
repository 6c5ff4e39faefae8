use crate::cli::commands::{NO_DATA_MSG, build_filter, load_batch};
use crate::cli::parser::{Commands, OutputFormat};
use crate::config::Config;
use crate::core::report::Engine;
use crate::errors::{AppError, AppResult};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Classify {
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

        match format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&records)
                    .map_err(|e| AppError::Other(e.to_string()))?;
                println!("{json}");
            }
            OutputFormat::Table => {
                let mut table = Table::new(&[
                    "Operator",
                    "Timestamp",
                    "Shift",
                    "Shift day",
                    "Items",
                    "Faulty",
                    "Rogue",
                ]);
                for rec in &records {
                    table.add_row(vec![
                        rec.operator().to_string(),
                        rec.record.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
                        rec.shift.clone(),
                        rec.shift_day.to_string(),
                        rec.record.items_processed.to_string(),
                        rec.record.faulty.to_string(),
                        rec.record.rogue.to_string(),
                    ]);
                }
                print!("{}", table.render());
            }
        }
    }
    Ok(())
}
