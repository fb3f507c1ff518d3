use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;

use crate::http::response::ContentTypeStyle;

/// What a worker does with a request head it cannot parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseErrorPolicy {
    /// Answer with the 400 fallback document.
    #[default]
    BadRequest,
    /// Drop the connection without sending anything.
    Close,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub backlog: u32,
    pub max_connections: usize,
    pub max_request_bytes: usize,
    pub read_timeout_secs: u64,
    pub write_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            backlog: 8,
            max_connections: 64,
            max_request_bytes: 8192,
            read_timeout_secs: 30,
            write_timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StaticFilesConfig {
    /// Directory every target is resolved against.
    pub root: PathBuf,
    pub content_type_style: ContentTypeStyle,
    pub on_parse_error: ParseErrorPolicy,
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("public"),
            content_type_style: ContentTypeStyle::default(),
            on_parse_error: ParseErrorPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticFilesConfig,
}

impl Config {
    /// Builds the configuration from defaults, the YAML file named by
    /// `STATIK_CONFIG` and finally the `STATIK_ROOT` override.
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match std::env::var("STATIK_CONFIG") {
            Ok(path) => {
                let text = std::fs::read_to_string(&path)
                    .with_context(|| format!("reading config file {path}"))?;
                Self::from_yaml_str(&text)
                    .with_context(|| format!("parsing config file {path}"))?
            }
            Err(_) => Self::default(),
        };

        if let Ok(root) = std::env::var("STATIK_ROOT") {
            cfg.static_files.root = PathBuf::from(root);
        }

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_yaml_str(text: &str) -> anyhow::Result<Self> {
        let cfg: Config = serde_yaml::from_str(text)?;
        Ok(cfg)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let server = &self.server;
        if server.backlog == 0 {
            anyhow::bail!("server.backlog must be >= 1");
        }
        if server.max_connections == 0 {
            anyhow::bail!("server.max_connections must be >= 1");
        }
        if server.max_request_bytes == 0 {
            anyhow::bail!("server.max_request_bytes must be >= 1");
        }
        if server.read_timeout_secs == 0 || server.write_timeout_secs == 0 {
            anyhow::bail!("server timeouts must be > 0");
        }
        Ok(())
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.server.read_timeout_secs)
    }

    pub fn write_timeout(&self) -> Duration {
        Duration::from_secs(self.server.write_timeout_secs)
    }
}
