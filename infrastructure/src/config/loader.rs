//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use std::path::PathBuf;

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit config path (if provided)
    /// 2. Project root: `./onebox.toml` or `./.onebox.toml`
    /// 3. XDG config: `$XDG_CONFIG_HOME/onebox/config.toml`
    /// 4. Fallback: `~/.config/onebox/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/onebox/config.toml if set,
    /// otherwise falls back to ~/.config/onebox/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("onebox").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        for filename in &["onebox.toml", ".onebox.toml"] {
            let path = PathBuf::from(filename);
            if path.exists() {
                return Some(path);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn load_defaults_has_the_standard_chain() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.repl.exit_command, "exit");
        assert_eq!(
            config.interpreters.order,
            vec!["expression", "currency", "datetime", "unit"]
        );
        assert!(config.rates.preloaded.is_empty());
        assert!(config.logging.transcript_file.is_none());
    }

    #[test]
    fn global_config_path_points_at_onebox() {
        let path = ConfigLoader::global_config_path().unwrap();
        assert!(path.to_string_lossy().contains("onebox"));
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "custom.toml",
                r#"
                    [repl]
                    exit_command = "quit"

                    [rates.preloaded]
                    "GBP/USD" = 1.2658
                "#,
            )?;

            let config = ConfigLoader::load(Some(&PathBuf::from("custom.toml"))).unwrap();
            assert_eq!(config.repl.exit_command, "quit");
            assert_eq!(config.rates.preloaded.get("GBP/USD"), Some(&1.2658));
            // untouched sections keep their defaults
            assert_eq!(config.interpreters.order.len(), 4);
            Ok(())
        });
    }

    #[test]
    fn project_file_is_discovered() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "onebox.toml",
                r#"
                    [interpreters]
                    order = ["expression"]
                "#,
            )?;

            let config = ConfigLoader::load(None).unwrap();
            assert_eq!(config.interpreters.order, vec!["expression"]);
            Ok(())
        });
    }
}
