use crate::libs::{config::Config, messages::Message};
use crate::{msg_error_anyhow, msg_print};
use anyhow::Result;
use std::fs;

/// Prints the config file path followed by its raw contents.
pub fn cmd() -> Result<()> {
    let path = Config::path()?;
    msg_print!(Message::ConfigPath(path.display().to_string()));

    let contents = fs::read_to_string(&path).map_err(|e| msg_error_anyhow!(Message::ConfigReadFailed(e.to_string())))?;
    println!("{}", contents);

    Ok(())
}
