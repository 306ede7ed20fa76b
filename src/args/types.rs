use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

use crate::catalog::CourseCatalog;

pub const DEFAULT_DB_NAME: &str = "rusty_round.db";
pub const DEFAULT_BIND: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5201;

/// Backend for saved rounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum StoreKind {
    #[default]
    Sqlite,
    Memory,
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreKind::Sqlite => write!(f, "sqlite"),
            StoreKind::Memory => write!(f, "memory"),
        }
    }
}

#[derive(Parser, Debug, Default)]
#[command(author, version, about = "Score a round of golf hole by hole", long_about = None)]
pub struct Args {
    /// Optional TOML file with the same keys as these flags. Flags win.
    #[arg(long, value_name = "CONFIG_TOML")]
    pub config_toml: Option<PathBuf>,
    /// Course catalog JSON. The built-in catalog is used when omitted.
    #[arg(long, value_name = "COURSES_JSON")]
    pub courses_json: Option<PathBuf>,
    /// For sqlite, the filename (`:memory:` for a throwaway database).
    #[arg(short = 'n', long, value_name = "DATABASE_NAME")]
    pub db_name: Option<String>,
    #[arg(long, value_enum, value_name = "STORE")]
    pub store: Option<StoreKind>,
    #[arg(long, value_name = "ADDRESS")]
    pub bind: Option<String>,
    #[arg(short = 'p', long, value_name = "PORT")]
    pub port: Option<u16>,
    /// Debug-level logging for this crate.
    #[arg(short = 'v', long)]
    pub verbose: bool,
    /// Log as JSON lines instead of the compact format.
    #[arg(long)]
    pub log_json: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub courses_json: Option<PathBuf>,
    pub db_name: Option<String>,
    pub store: Option<StoreKind>,
    pub bind: Option<String>,
    pub port: Option<u16>,
    pub verbose: Option<bool>,
    pub log_json: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    /// Catalog loaded from `courses_json`; `None` means the built-in courses.
    pub courses: Option<CourseCatalog>,
    pub db_name: String,
    pub store: StoreKind,
    pub bind: String,
    pub port: u16,
    pub verbose: bool,
    pub log_json: bool,
}
