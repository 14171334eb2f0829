//! Application configuration.
//!
//! Priority, lowest first: built-in defaults, YAML file, `RASOI_` environment
//! variables (`RASOI_SERVER__PORT=8080`), command-line flags.

use std::path::{Path, PathBuf};

use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;

/// Default map embed for the restaurant location.
const DEFAULT_MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3769.1234567890123!2d72.12345678901234!3d19.123456789012345!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x0%3A0x0!2zMTnCsDA3JzI0LjQiTiA3MsKwMDcnMjQuNCJF!5e0!3m2!1sen!2sin!4v1234567890123!5m2!1sen!2sin";

/// Config file picked up from the working directory when none is given.
const CWD_CONFIG_FILE: &str = "config.yaml";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Address to bind
    #[arg(long, env = "HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Menu catalogue file (JSON or YAML); the bundled menu is used when absent
    #[arg(long, env = "CATALOGUE_PATH")]
    pub catalogue: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub site: SiteConfig,
    #[serde(default)]
    pub catalogue: CatalogueConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout_secs: u64,
    /// Directory served under `/static`.
    pub static_dir: PathBuf,
}

/// Restaurant identity baked into the page and its outbound links.
#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    pub name: String,
    pub tagline: String,
    /// International number without `+` or spaces, e.g. `919876543210`.
    pub phone_digits: String,
    /// Number as printed on the page.
    pub phone_display: String,
    pub address: String,
    /// Short address for the footer.
    pub address_short: String,
    /// Search text for the directions link.
    pub map_query: String,
    pub map_embed_url: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CatalogueConfig {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    pub idle_timeout_secs: u64,
    pub sweep_interval_secs: u64,
    pub max_sessions: usize,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub format: LogFormat,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let mut builder = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("server.request_timeout_secs", 30)?
            .set_default("server.static_dir", "static")?
            .set_default("site.name", "Rasoi – The Tasty")?
            .set_default("site.tagline", "Authentic Vegetarian Cuisine")?
            .set_default("site.phone_digits", "919876543210")?
            .set_default("site.phone_display", "+91 98765 43210")?
            .set_default("site.address", "123 Restaurant Street, Food City, 123456")?
            .set_default("site.address_short", "123 Restaurant Street, Food City")?
            .set_default("site.map_query", "Rasoi The Tasty")?
            .set_default("site.map_embed_url", DEFAULT_MAP_EMBED_URL)?
            .set_default("session.idle_timeout_secs", 30 * 60)?
            .set_default("session.sweep_interval_secs", 5 * 60)?
            .set_default("session.max_sessions", 10_000)?
            .set_default("logging.format", "pretty")?;

        // Explicit file must exist; the working-directory fallback is optional.
        builder = match &cli.config {
            Some(path) => builder.add_source(File::from(Path::new(path)).required(true)),
            None => builder.add_source(File::from(Path::new(CWD_CONFIG_FILE)).required(false)),
        };

        builder = builder.add_source(
            Environment::with_prefix("RASOI")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        if let Some(host) = cli.host {
            builder = builder.set_override("server.host", host)?;
        }
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }
        if let Some(path) = cli.catalogue {
            builder = builder.set_override("catalogue.path", path.to_string_lossy().into_owned())?;
        }

        let cfg = builder.build()?;
        cfg.try_deserialize()
    }

    /// `host:port` to bind the listener to.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
