use core_config::{AppInfo, FromEnv, app_info, env_optional, server::ServerConfig};

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    /// Values loaded into the store at startup, from `SEED_ITEMS`
    pub seed_items: Vec<String>,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            seed_items: seed_items_from_env(),
        })
    }
}

/// Comma-separated list; blank entries are skipped.
fn seed_items_from_env() -> Vec<String> {
    env_optional("SEED_ITEMS")
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_env() {
        temp_env::with_vars_unset(
            ["SEED_ITEMS", "PORT", "HOST", "APP_ENV", "CORS_ALLOWED_ORIGIN"],
            || {
                let config = Config::from_env().unwrap();
                assert!(config.seed_items.is_empty());
                assert_eq!(config.server.port, 8080);
                assert_eq!(config.app.name, "strings_api");
            },
        );
    }

    #[test]
    fn test_seed_items_are_split_and_trimmed() {
        temp_env::with_var("SEED_ITEMS", Some("String1, String2,,String3 "), || {
            assert_eq!(seed_items_from_env(), ["String1", "String2", "String3"]);
        });
    }

    #[test]
    fn test_invalid_port_fails() {
        temp_env::with_var("PORT", Some("not-a-port"), || {
            assert!(Config::from_env().is_err());
        });
    }
}
