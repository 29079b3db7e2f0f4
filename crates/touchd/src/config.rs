//! Command-line and TOML configuration for touchd
//!
//! Precedence for each setting: command line (or its environment variable),
//! then the `--config` file, then the built-in default.
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 5002
//!
//! [params]
//! path = "/data/params"
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use serde::Deserialize;
use touch_core::DEFAULT_PARAMS_ROOT;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5002;

#[derive(Parser, Debug)]
#[command(name = "touchd")]
#[command(version, about = "Touch Control HTTP Server")]
pub struct Args {
    /// Host to listen on (default: 0.0.0.0)
    #[arg(long, env = "TOUCHD_HOST")]
    pub host: Option<String>,

    /// Port to listen on (default: 5002)
    #[arg(short, long, env = "TOUCHD_PORT")]
    pub port: Option<u16>,

    /// Parameter store root directory (default: /data/params)
    #[arg(long, env = "TOUCHD_PARAMS_DIR")]
    pub params_dir: Option<PathBuf>,

    /// Keep parameters in memory instead of on disk (demo/testing)
    #[arg(long)]
    pub memory_store: bool,

    /// Configuration file (TOML)
    #[arg(short = 'f', long)]
    pub config: Option<PathBuf>,
}

/// `[server]` section
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// `[params]` section
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParamsSection {
    pub path: Option<PathBuf>,
}

/// Contents of the optional TOML config file
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub params: ParamsSection,
}

impl FileConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file '{}'", path.display()))
    }

    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Fully resolved runtime settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub params_dir: PathBuf,
    pub memory_store: bool,
}

impl Settings {
    pub fn resolve(args: Args, file: FileConfig) -> Self {
        Self {
            host: args
                .host
                .or(file.server.host)
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: args.port.or(file.server.port).unwrap_or(DEFAULT_PORT),
            params_dir: args
                .params_dir
                .or(file.params.path)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PARAMS_ROOT)),
            memory_store: args.memory_store,
        }
    }

    /// Load the config file named by `--config`, if any, then resolve
    pub fn from_args(args: Args) -> anyhow::Result<Self> {
        let file = match &args.config {
            Some(path) => {
                tracing::info!("Loading config from: {}", path.display());
                FileConfig::load(path)?
            }
            None => FileConfig::default(),
        };
        Ok(Self::resolve(args, file))
    }
}
