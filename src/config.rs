use crate::catalog::SearchFilters;
use clap::{Args, Parser, Subcommand};
use config::{Config, ConfigError, Environment, File, Map};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BackendConfig {
    pub base_url: String,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct WebConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub backend: BackendConfig,
    pub web: WebConfig,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the catalog backend
    #[arg(long, global = true)]
    pub backend_url: Option<String>,

    /// Host to bind to
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Port to bind to
    #[arg(short, long, global = true)]
    pub port: Option<u16>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Serve the search page (default)
    Serve,
    /// Keyword search against the catalog
    Search {
        /// Search text; matched against API names and descriptions
        query: Vec<String>,

        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Ask the agent a natural-language question
    Ask {
        #[arg(required = true)]
        question: Vec<String>,
    },
    /// Ask questions interactively, one per line
    Repl,
    /// Check that the backend is reachable
    Health,
}

#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct FilterArgs {
    /// Only APIs in this category
    #[arg(long)]
    pub category: Option<String>,

    /// Only APIs with this auth type
    #[arg(long)]
    pub auth: Option<String>,

    /// Filter on HTTPS support
    #[arg(long)]
    pub https: Option<bool>,

    /// Filter on CORS support
    #[arg(long)]
    pub cors: Option<bool>,
}

impl From<FilterArgs> for SearchFilters {
    fn from(args: FilterArgs) -> Self {
        SearchFilters {
            category: args.category,
            auth: args.auth,
            https: args.https,
            cors: args.cors,
        }
    }
}

const DEFAULT_LOCATIONS: [&str; 3] = [
    "config.toml",
    "config/config.toml",
    "/etc/api-genie/config.toml",
];

// API_GENIE__BACKEND__BASE_URL and friends; `vars` replaces the process environment
fn environment(vars: Option<Map<String, String>>) -> Environment {
    Environment::with_prefix("API_GENIE")
        .separator("__")
        .try_parsing(true)
        .source(vars)
}

impl AppConfig {
    pub fn new(args: &CliArgs) -> Result<Self, ConfigError> {
        Self::load(args, environment(None))
    }

    fn load(args: &CliArgs, env: Environment) -> Result<Self, ConfigError> {
        let defaults = AppConfig::default();

        // Start with default configuration
        let mut config_builder = Config::builder()
            .set_default("backend.base_url", defaults.backend.base_url)?
            .set_default("web.host", defaults.web.host)?
            .set_default("web.port", defaults.web.port as i64)?;

        // Add configuration from file if specified
        if let Some(config_path) = &args.config {
            config_builder = config_builder.add_source(File::from(config_path.as_path()));
        } else {
            for location in DEFAULT_LOCATIONS {
                if Path::new(location).exists() {
                    config_builder =
                        config_builder.add_source(File::new(location, config::FileFormat::Toml));
                    break;
                }
            }
        }

        config_builder = config_builder.add_source(env);

        let mut config: AppConfig = config_builder.build()?.try_deserialize()?;

        // Override with command line args if provided
        if let Some(backend_url) = &args.backend_url {
            config.backend.base_url = backend_url.clone();
        }
        if let Some(host) = &args.host {
            config.web.host = host.clone();
        }
        if let Some(port) = args.port {
            config.web.port = port;
        }

        Ok(config)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend: BackendConfig {
                base_url: "http://localhost:8000".to_string(),
                timeout_secs: None,
            },
            web: WebConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp_config(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("api-genie-{}-{}.toml", name, std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn vars(pairs: &[(&str, &str)]) -> Environment {
        environment(Some(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        ))
    }

    #[test]
    fn test_defaults_without_file() {
        let path = write_temp_config("empty", "");
        let args = CliArgs::parse_from(["api-genie", "--config", path.to_str().unwrap()]);

        let config = AppConfig::load(&args, vars(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(args.command, None);

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_file_then_cli_overrides() {
        let path = write_temp_config(
            "overrides",
            r#"
[backend]
base_url = "http://catalog.internal:8000"
timeout_secs = 15

[web]
port = 8080
"#,
        );
        let args = CliArgs::parse_from([
            "api-genie",
            "--config",
            path.to_str().unwrap(),
            "--host",
            "0.0.0.0",
            "serve",
        ]);

        let config = AppConfig::load(&args, vars(&[])).unwrap();
        assert_eq!(config.backend.base_url, "http://catalog.internal:8000");
        assert_eq!(config.backend.timeout_secs, Some(15));
        assert_eq!(config.web.host, "0.0.0.0");
        assert_eq!(config.web.port, 8080);
        assert_eq!(args.command, Some(Command::Serve));

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_environment_beats_file_and_cli_beats_environment() {
        let path = write_temp_config(
            "env",
            r#"
[backend]
base_url = "http://from-file:8000"

[web]
port = 8080
"#,
        );
        let env = [
            ("API_GENIE__BACKEND__BASE_URL", "http://from-env:9000"),
            ("API_GENIE__WEB__PORT", "4444"),
            ("OTHER_APP__WEB__PORT", "1"),
        ];

        let args = CliArgs::parse_from(["api-genie", "--config", path.to_str().unwrap()]);
        let config = AppConfig::load(&args, vars(&env)).unwrap();
        assert_eq!(config.backend.base_url, "http://from-env:9000");
        assert_eq!(config.web.port, 4444);
        assert_eq!(config.web.host, "127.0.0.1");

        let args = CliArgs::parse_from([
            "api-genie",
            "--config",
            path.to_str().unwrap(),
            "--backend-url",
            "http://from-cli:7000",
            "--port",
            "5555",
        ]);
        let config = AppConfig::load(&args, vars(&env)).unwrap();
        assert_eq!(config.backend.base_url, "http://from-cli:7000");
        assert_eq!(config.web.port, 5555);

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_search_subcommand_filters() {
        let args = CliArgs::parse_from([
            "api-genie",
            "search",
            "weather",
            "forecast",
            "--https",
            "true",
            "--category",
            "Weather",
            "--backend-url",
            "http://other:9000",
        ]);

        assert_eq!(args.backend_url.as_deref(), Some("http://other:9000"));
        match args.command {
            Some(Command::Search { query, filters }) => {
                assert_eq!(query, vec!["weather", "forecast"]);
                let filters: SearchFilters = filters.into();
                assert_eq!(filters.https, Some(true));
                assert_eq!(filters.category.as_deref(), Some("Weather"));
                assert_eq!(filters.cors, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_ask_requires_a_question() {
        assert!(CliArgs::try_parse_from(["api-genie", "ask"]).is_err());
    }
}
