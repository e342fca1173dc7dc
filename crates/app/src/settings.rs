//! Handles settings for the application.
//!
//! Values are layered: built-in defaults, then the TOML file passed with
//! `--config` (optional), then `BIZTIME__*` environment variables, then
//! command line overrides. See `config/biztime.toml` for an example.
use clap::Parser;
use config::{Config, ConfigError, Environment, File};
use engine::CompanyDeletePolicy;
use serde::Deserialize;

#[derive(Parser, Debug)]
#[command(name = "biztime")]
#[command(about = "Companies and invoices HTTP API")]
pub struct Cli {
    /// Path of the TOML configuration file.
    #[arg(long, env = "BIZTIME_CONFIG", default_value = "config/biztime.toml")]
    pub config: String,

    /// Port to listen on. Overrides `server.port`.
    #[arg(long)]
    pub port: Option<u16>,
}

#[derive(Debug, Deserialize)]
pub struct App {
    pub level: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Database {
    Memory,
    Sqlite(String),
}

#[derive(Debug, Deserialize)]
pub struct Server {
    pub bind: String,
    pub port: u16,
    pub database: Database,
}

#[derive(Debug, Default, Deserialize)]
pub struct EngineSettings {
    #[serde(default)]
    pub company_delete_policy: CompanyDeletePolicy,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub app: App,
    pub server: Server,
    #[serde(default)]
    pub engine: EngineSettings,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let cli = Cli::parse();
        Self::load(&cli)
    }

    fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("app.level", "info")?
            .set_default("server.bind", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("server.database", "memory")?
            .add_source(File::with_name(&cli.config).required(false))
            .add_source(Environment::with_prefix("BIZTIME").separator("__"))
            .set_override_option("server.port", cli.port.map(i64::from))?
            .build()?;

        settings.try_deserialize()
    }
}
