use std::path::Path;

use serde::Deserialize;

use crate::cli::Cli;
use crate::error::{Error, Result};

/// Raw file-level config. Every field is optional; CLI flags win over the
/// file, the file wins over built-in defaults.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub tasks: Option<Vec<String>>,
    pub mark_done: Option<Vec<u32>>,
    pub countdown_from: Option<i64>,
    pub sum_to: Option<i64>,
}

/// Fully resolved demo configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub tasks: Vec<String>,
    pub mark_done: Vec<u32>,
    pub countdown_from: i64,
    pub sum_to: i64,
    pub json: bool,
}

impl Config {
    pub fn load(cli: &Cli) -> Result<Self> {
        let file_config = match cli.config {
            Some(ref path) => {
                let path = Path::new(path);
                if !path.exists() {
                    return Err(Error::ConfigNotFound(path.to_path_buf()));
                }
                let content = std::fs::read_to_string(path)?;
                parse_config(&content)?
            }
            None => ConfigFile::default(),
        };
        Ok(merge(file_config, cli))
    }
}

pub fn parse_config(content: &str) -> Result<ConfigFile> {
    let config: ConfigFile = toml::from_str(content)?;
    Ok(config)
}

fn default_tasks() -> Vec<String> {
    vec![
        "Build logging system for CLI app".to_string(),
        "Implement recursive utility function".to_string(),
        "Prepare project documentation for release".to_string(),
    ]
}

fn merge(file: ConfigFile, cli: &Cli) -> Config {
    Config {
        tasks: file.tasks.unwrap_or_else(default_tasks),
        mark_done: file.mark_done.unwrap_or_else(|| vec![2]),
        countdown_from: cli.countdown_from.or(file.countdown_from).unwrap_or(5),
        sum_to: cli.sum_to.or(file.sum_to).unwrap_or(10),
        json: cli.json,
    }
}
