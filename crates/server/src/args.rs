use std::path::PathBuf;

use catfacts_core::config::{ConfigOverrides, LoadOptions, LogFormat};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "catfacts-server",
    about = "Cat facts slash-command service",
    long_about = "Serve random cat facts to Slack-style slash commands from a read-only SQLite facts table.",
    after_help = "Examples:\n  catfacts-server\n  catfacts-server --config catfacts.toml --port 8080"
)]
pub struct ServerArgs {
    #[arg(long, help = "Config file to load; startup fails if it does not exist")]
    pub config: Option<PathBuf>,
    #[arg(long, help = "SQLite URL of the facts database")]
    pub database_url: Option<String>,
    #[arg(long, help = "Address the HTTP listener binds to")]
    pub bind_address: Option<String>,
    #[arg(long, help = "Port the HTTP listener binds to")]
    pub port: Option<u16>,
    #[arg(long, help = "Log level (trace|debug|info|warn|error)")]
    pub log_level: Option<String>,
    #[arg(long, help = "Log format (compact|pretty|json)")]
    pub log_format: Option<LogFormat>,
}

impl ServerArgs {
    /// Flags take precedence over the config file and the environment.
    pub fn into_load_options(self) -> LoadOptions {
        LoadOptions {
            require_file: self.config.is_some(),
            config_path: self.config,
            overrides: ConfigOverrides {
                database_url: self.database_url,
                bind_address: self.bind_address,
                port: self.port,
                log_level: self.log_level,
                log_format: self.log_format,
            },
        }
    }
}
