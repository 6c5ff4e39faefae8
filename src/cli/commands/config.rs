use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            let yaml = serde_yaml::to_string(cfg).map_err(|_| AppError::ConfigSave)?;
            println!("{yaml}");
        }
        if *check {
            cfg.validate()?;
            println!("✅ Configuration OK");
        }
        if !*print_config && !*check {
            println!("Nothing to do: use --print or --check");
        }
    }
    Ok(())
}
