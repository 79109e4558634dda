//! Output settings shared by all calendar generators

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    #[error("invalid config file")]
    Parse(#[from] serde_json::Error),
}

/// Settings for the generated calendar files, every field may be omitted in a config file
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Value of the PRODID property
    pub prod_id: String,
    /// Domain part of every event UID
    pub namespace: String,
    /// Directory the `.ics` files are written to
    pub output_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            prod_id: "-//yearcal//rust ical generator//EN".to_string(),
            namespace: "yearcal".to_string(),
            output_dir: PathBuf::from("."),
        }
    }
}

impl Settings {
    pub fn from_file(path: &Path) -> Result<Settings, ConfigError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Command line options controlling the output, flattened into each binary's arguments
#[derive(Debug, Clone, Default, clap::Args)]
pub struct OutputArgs {
    /// Directory to write the calendar file to [default: current directory]
    #[arg(long, short = 'o', value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// JSON file with output settings
    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl OutputArgs {
    /// Settings from the config file, if any, with the output directory
    /// given on the command line taking precedence
    pub fn settings(&self) -> Result<Settings, ConfigError> {
        let mut settings = match &self.config {
            Some(path) => Settings::from_file(path)?,
            None => Settings::default(),
        };
        if let Some(dir) = &self.output_dir {
            settings.output_dir = dir.clone();
        }
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config() {
        let settings: Settings = serde_json::from_str(r#"{"namespace": "example.org"}"#).unwrap();
        assert_eq!(settings.namespace, "example.org");
        assert_eq!(settings.prod_id, Settings::default().prod_id);
        assert_eq!(settings.output_dir, PathBuf::from("."));
    }

    #[test]
    fn command_line_overrides_file() {
        let path = std::env::temp_dir().join(format!("yearcal-config-{}.json", std::process::id()));
        fs::write(&path, r#"{"prod_id": "-//test//EN", "output_dir": "/from/file"}"#).unwrap();

        let args = OutputArgs {
            output_dir: Some(PathBuf::from("/from/args")),
            config: Some(path.clone()),
        };
        let settings = args.settings().unwrap();
        assert_eq!(settings.prod_id, "-//test//EN");
        assert_eq!(settings.output_dir, PathBuf::from("/from/args"));

        let args = OutputArgs {
            output_dir: None,
            config: Some(path.clone()),
        };
        assert_eq!(args.settings().unwrap().output_dir, PathBuf::from("/from/file"));
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_or_broken_config() {
        let args = OutputArgs {
            output_dir: None,
            config: Some(PathBuf::from("/nonexistent/yearcal.json")),
        };
        assert!(matches!(args.settings(), Err(ConfigError::Io(_))));

        let result: Result<Settings, _> = serde_json::from_str("{namespace}");
        assert!(result.is_err());
        assert_eq!(OutputArgs::default().settings().unwrap(), Settings::default());
    }
}
