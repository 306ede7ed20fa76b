use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::fs;

pub mod types;
pub mod validation;

pub use types::{Args, CleanArgs, FileConfig, StoreKind};
use types::{DEFAULT_BIND, DEFAULT_DB_NAME, DEFAULT_PORT};

/// Parse the command line, fold in the optional TOML file and validate.
///
/// # Errors
///
/// Will return `Err` if the config file cannot be read or the merged
/// settings fail validation
pub fn args_checks() -> Result<CleanArgs> {
    CleanArgs::new(Args::parse())
}

fn load_file_config(args: &Args) -> Result<FileConfig> {
    match args.config_toml.as_ref() {
        Some(path) => {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("read config toml {}", path.display()))?;
            toml::from_str::<FileConfig>(&contents)
                .with_context(|| format!("parse config toml {}", path.display()))
        }
        None => Ok(FileConfig::default()),
    }
}

impl CleanArgs {
    /// Merge flags over the config file over defaults.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the config file cannot be read or a merged value
    /// is invalid
    pub fn new(args: Args) -> Result<Self> {
        let file_config = load_file_config(&args)?;

        let courses = match args.courses_json.or(file_config.courses_json) {
            Some(path) => Some(validation::check_courses_json(&path).map_err(|e| anyhow!(e))?),
            None => None,
        };
        let port = validation::check_port(args.port.or(file_config.port).unwrap_or(DEFAULT_PORT))
            .map_err(|e| anyhow!(e))?;

        Ok(CleanArgs {
            courses,
            db_name: args
                .db_name
                .or(file_config.db_name)
                .unwrap_or_else(|| DEFAULT_DB_NAME.to_string()),
            store: args.store.or(file_config.store).unwrap_or_default(),
            bind: args
                .bind
                .or(file_config.bind)
                .unwrap_or_else(|| DEFAULT_BIND.to_string()),
            port,
            verbose: args.verbose || file_config.verbose.unwrap_or(false),
            log_json: args.log_json || file_config.log_json.unwrap_or(false),
        })
    }
}
