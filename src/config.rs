//! Runtime configuration read from the environment (and `.env`).

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const ENV_LOG_CONFIG: &str = "SUBNET_CALC_LOG_CONFIG";
pub const ENV_FORMAT: &str = "SUBNET_CALC_FORMAT";
pub const ENV_EXPORT_DIR: &str = "SUBNET_CALC_EXPORT_DIR";

const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "Unknown output format '{other}', expected table, csv or json"
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// log4rs YAML file.
    pub log_config: PathBuf,
    /// Output format used when none is given on the command line.
    pub format: OutputFormat,
    /// Where `--export` writes CSV files.
    pub export_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_config: PathBuf::from(DEFAULT_LOG_CONFIG),
            format: OutputFormat::default(),
            export_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Result<Config, Box<dyn Error>> {
        dotenv::dotenv().ok();
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup, unset keys keep their
    /// defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        if let Some(path) = lookup(ENV_LOG_CONFIG) {
            config.log_config = PathBuf::from(path);
        }
        if let Some(format) = lookup(ENV_FORMAT) {
            config.format = format
                .parse()
                .map_err(|e| format!("{ENV_FORMAT}: {e}"))?;
        }
        if let Some(dir) = lookup(ENV_EXPORT_DIR) {
            config.export_dir = PathBuf::from(dir);
        }
        Ok(config)
    }
}

/// Initialise log4rs from `path`, or log warnings to stderr when the file
/// does not exist.
pub fn init_logging(path: &Path) -> Result<(), Box<dyn Error>> {
    if path.exists() {
        log4rs::init_file(path, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {}: {e}", path.display()))?;
        return Ok(());
    }

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d} {l} {t} - {m}{n}")))
        .build();
    let config = log4rs::Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    log4rs::init_config(config)?;
    log::debug!("No {} found, logging warnings to stderr", path.display());
    Ok(())
}
