use crate::cli::commands::{NO_DATA_MSG, build_filter, load_batch};
use crate::cli::parser::{Commands, OutputFormat};
use crate::config::Config;
use crate::core::report::Engine;
use crate::errors::{AppError, AppResult};
use crate::models::aggregate::{AggregateRow, GroupDim, KpiSummary, parse_group_by};
use crate::utils::formatting::{fmt_diff, fmt_percent, fmt_ratio};
use crate::utils::table::Table;
use serde::Serialize;

#[derive(Serialize)]
struct ReportLine {
    #[serde(flatten)]
    row: AggregateRow,
    #[serde(skip_serializing_if = "Option::is_none")]
    kpi: Option<KpiSummary>,
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        file,
        group_by,
        filters,
        target,
        format,
    } = cmd
    {
        let dims = parse_group_by(group_by)?;

        // CLI override of the configured target, validated like the rest.
        let mut cfg = cfg.clone();
        if let Some(t) = target {
            cfg.kpi_target = *t;
        }

        let engine = Engine::new(&cfg)?;
        let filter = build_filter(filters)?;
        let records = load_batch(file, &engine, &filter)?;

        if records.is_empty() {
            println!("{NO_DATA_MSG}");
            return Ok(());
        }

        let lines: Vec<ReportLine> = engine
            .aggregate_with_kpi(&records, &dims)
            .into_iter()
            .map(|(row, kpi)| ReportLine { row, kpi })
            .collect();

        match format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&lines)
                    .map_err(|e| AppError::Other(e.to_string()))?;
                println!("{json}");
            }
            OutputFormat::Table => print_table(&lines, &dims),
        }
    }
    Ok(())
}

fn print_table(lines: &[ReportLine], dims: &[GroupDim]) {
    let mut headers = Vec::new();
    if dims.contains(&GroupDim::Day) {
        headers.push("Shift day");
    }
    if dims.contains(&GroupDim::Shift) {
        headers.push("Shift");
    }
    if dims.contains(&GroupDim::Operator) {
        headers.push("Operator");
    }
    headers.extend([
        "Sessions",
        "Items",
        "Faulty",
        "Rogue",
        "Avg/session",
        "Avg/hour",
        "KPI",
        "Diff",
        "% of target",
    ]);
    let mut table = Table::new(&headers);

    for line in lines {
        let mut cells = Vec::new();
        if let Some(day) = line.row.key.shift_day {
            cells.push(day.to_string());
        }
        if let Some(shift) = &line.row.key.shift {
            cells.push(shift.clone());
        }
        if let Some(op) = &line.row.key.operator {
            cells.push(op.clone());
        }
        cells.extend([
            line.row.session_count.to_string(),
            line.row.total_items.to_string(),
            line.row.total_faulty.to_string(),
            line.row.total_rogue.to_string(),
            fmt_ratio(line.row.avg_per_session),
            fmt_ratio(line.row.avg_per_hour),
        ]);
        match &line.kpi {
            Some(kpi) => cells.extend([
                kpi.status.as_str().to_string(),
                fmt_diff(kpi.diff_from_target),
                fmt_percent(kpi.percent_of_target),
            ]),
            None => cells.extend(["-".to_string(), "-".to_string(), "-".to_string()]),
        }
        table.add_row(cells);
    }

    print!("{}", table.render());
}
