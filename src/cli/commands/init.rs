use crate::config::Config;
use crate::errors::AppResult;

pub fn handle() -> AppResult<()> {
    let path = Config::init_all()?;
    println!("✅ Config file: {:?}", path);
    Ok(())
}
