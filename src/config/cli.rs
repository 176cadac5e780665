use crate::config::toml_config::TomlConfig;
use crate::utils::error::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "page-glue")]
#[command(about = "Session logout and display formatting for the movie picker web app")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Path to a TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Application origin, e.g. http://localhost:5000")]
    pub base_url: Option<String>,

    #[arg(long, global = true, env = "PAGE_GLUE_SESSION_COOKIE", hide_env_values = true)]
    pub session_cookie: Option<String>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Press the logout control: POST the logout endpoint and follow the redirect
    Logout {
        #[arg(long, help = "Print the outcome as JSON")]
        json: bool,
    },
    /// Format a date as e.g. "January 5, 2024"
    FormatDate {
        input: String,
        #[arg(long, help = "Treat the input as milliseconds since the Unix epoch")]
        timestamp: bool,
    },
    /// Format a millisecond count as e.g. "1h 30m"
    FormatDuration {
        #[arg(allow_hyphen_values = true)]
        milliseconds: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Json,
}

impl CliConfig {
    /// 設定檔（或預設值）再套上命令列覆寫
    pub fn resolve(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        if let Some(base_url) = &self.base_url {
            config.server.base_url = base_url.clone();
        }
        if let Some(cookie) = &self.session_cookie {
            config.server.session_cookie = Some(cookie.clone());
        }

        Ok(config)
    }
}
