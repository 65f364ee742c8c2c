// File logger setup. The terminal belongs to the UI, so logs only go to a file
// and only when one is requested.

use crate::error::TagselError;
use log::LevelFilter;
use simplelog::{Config, WriteLogger};
use std::fs::File;

pub fn init(path: Option<&str>, level: LevelFilter) -> Result<(), TagselError> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path).map_err(|e| TagselError::Logger(format!("{path}: {e}")))?;
    WriteLogger::init(level, Config::default(), file)
        .map_err(|e| TagselError::Logger(e.to_string()))?;
    log::info!("logging to {path} at {level}");
    Ok(())
}
