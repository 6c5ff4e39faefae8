use crate::cli::commands::{NO_DATA_MSG, build_filter, load_batch};
use crate::cli::parser::{Commands, OutputFormat};
use crate::config::Config;
use crate::core::report::Engine;
use crate::errors::{AppError, AppResult};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Flags {
        file,
        filters,
        threshold,
        format,
    } = cmd
    {
        let mut cfg = cfg.clone();
        if let Some(t) = threshold {
            cfg.low_utilization_threshold = *t;
        }

        let engine = Engine::new(&cfg)?;
        let filter = build_filter(filters)?;
        let records = load_batch(file, &engine, &filter)?;

        if records.is_empty() {
            println!("{NO_DATA_MSG}");
            return Ok(());
        }

        let flags = engine.low_utilization(&records);
        if flags.is_empty() {
            println!(
                "No operator/day pairs at or below {} session(s).",
                cfg.low_utilization_threshold
            );
            return Ok(());
        }

        match format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&flags)
                    .map_err(|e| AppError::Other(e.to_string()))?;
                println!("{json}");
            }
            OutputFormat::Table => {
                let mut table = Table::new(&["Shift day", "Operator", "Sessions"]);
                for f in &flags {
                    table.add_row(vec![
                        f.shift_day.to_string(),
                        f.operator.clone(),
                        f.session_count.to_string(),
                    ]);
                }
                print!("{}", table.render());
            }
        }
    }
    Ok(())
}
