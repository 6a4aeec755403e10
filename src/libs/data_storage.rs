//! Platform-specific application data directory handling.
//!
//! Resolves the directory where clk keeps its config file, following each
//! operating system's convention for per-user application data:
//!
//! - **Windows**: `%LOCALAPPDATA%\lacodda\clk`
//! - **macOS**: `~/Library/Application Support/lacodda/clk`
//! - **Linux**: `~/.local/share/lacodda/clk`
//!
//! The directory is created on first access.

use anyhow::Result;
use std::env::consts::OS;
use std::env::var;
use std::fs;
use std::path::{Path, PathBuf};

pub const VENDOR_NAME: &str = "lacodda";
pub const APP_NAME: &str = "clk";

#[derive(Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    pub fn new() -> Self {
        let base_path = match OS {
            "windows" => var("LOCALAPPDATA").unwrap_or_else(|_| ".".into()),
            "macos" => var("HOME").unwrap_or_else(|_| ".".into()) + "/Library/Application Support",
            _ => var("HOME").unwrap_or_else(|_| ".".into()) + "/.local/share",
        };
        let base_path = Path::new(&base_path).join(VENDOR_NAME).join(APP_NAME);

        Self { base_path }
    }

    /// Returns the full path for `file_name` inside the data directory,
    /// creating the directory if it does not exist yet.
    pub fn get_path(&self, file_name: &str) -> Result<PathBuf> {
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path)?;
        }
        Ok(self.base_path.join(file_name))
    }
}
