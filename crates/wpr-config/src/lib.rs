//! Configuration management for wpr.
//!
//! Parses `wpr.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `server.host`
//! - `wordpress.base_url`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
    /// Override page shell directory.
    pub shell_dir: Option<PathBuf>,
    /// Override `WordPress` REST API root URL.
    pub base_url: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "wpr.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Site configuration (paths are relative strings from TOML).
    #[serde(default)]
    site: SiteConfigRaw,
    /// `WordPress` REST API configuration.
    /// When present, `base_url` is required.
    pub wordpress: Option<WordpressConfig>,

    /// Resolved site configuration (set after loading).
    #[serde(skip)]
    pub site_resolved: SiteConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 8080,
        }
    }
}

/// Raw site configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SiteConfigRaw {
    name: Option<String>,
    shell_dir: Option<String>,
    products_category: Option<u32>,
}

/// Resolved site configuration with absolute paths.
#[derive(Debug, Default)]
pub struct SiteConfig {
    /// Site name appended to document titles.
    pub name: String,
    /// Directory containing the static page shells.
    pub shell_dir: PathBuf,
    /// Category id that scopes the products listing. `None` lists every post.
    pub products_category: Option<u32>,
}

/// `WordPress` REST API configuration.
#[derive(Debug, Deserialize)]
pub struct WordpressConfig {
    /// REST API root URL, e.g. `https://example.com/wp-json/wp/v2`.
    pub base_url: String,
}

impl WordpressConfig {
    /// Validate that all required fields are properly set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any field is empty or has invalid format.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.base_url, "wordpress.base_url")?;
        require_http_url(&self.base_url, "wordpress.base_url")?;
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`wordpress.base_url`").
        field: String,
        /// Error message (e.g., "${`WP_BASE_URL`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `wpr.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
        if let Some(shell_dir) = &settings.shell_dir {
            self.site_resolved.shell_dir.clone_from(shell_dir);
        }
        if let Some(base_url) = &settings.base_url {
            match &mut self.wordpress {
                Some(wordpress) => wordpress.base_url.clone_from(base_url),
                None => {
                    self.wordpress = Some(WordpressConfig {
                        base_url: base_url.clone(),
                    });
                }
            }
        }
    }

    /// Get validated `WordPress` configuration.
    ///
    /// Returns the `WordPress` config if the `[wordpress]` section is present
    /// and all fields are valid. Use this instead of accessing the `wordpress`
    /// field directly when the command requires the REST API.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the section is missing or invalid.
    pub fn require_wordpress(&self) -> Result<&WordpressConfig, ConfigError> {
        let wordpress = self.wordpress.as_ref().ok_or_else(|| {
            ConfigError::Validation("[wordpress] section required in config".into())
        })?;
        wordpress.validate()?;
        Ok(wordpress)
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            server: ServerConfig::default(),
            site: SiteConfigRaw::default(),
            wordpress: None,
            site_resolved: SiteConfig {
                name: "Kool Box".to_owned(),
                shell_dir: base.join("site"),
                products_category: None,
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        // Validate configuration after loading and resolution
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Checks that all required fields are properly set and contain valid values.
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_server()?;
        self.validate_site()?;
        Ok(())
    }

    /// Validate server configuration.
    fn validate_server(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.server.host, "server.host")?;

        // Port 0 is technically valid (OS assigns a random port), but it's
        // unlikely to be intentional in a config file
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port cannot be 0".to_owned(),
            ));
        }

        Ok(())
    }

    /// Validate site configuration.
    fn validate_site(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site_resolved.name, "site.name")?;
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        // Server config
        self.server.host = expand::expand_env(&self.server.host, "server.host")?;

        // WordPress config (if present)
        if let Some(ref mut wordpress) = self.wordpress {
            wordpress.base_url = expand::expand_env(&wordpress.base_url, "wordpress.base_url")?;
        }

        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.site_resolved = SiteConfig {
            name: self
                .site
                .name
                .clone()
                .unwrap_or_else(|| "Kool Box".to_owned()),
            shell_dir: config_dir.join(self.site.shell_dir.as_deref().unwrap_or("site")),
            products_category: self.site.products_category,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.site_resolved.name, "Kool Box");
        assert_eq!(config.site_resolved.shell_dir, PathBuf::from("/test/site"));
        assert!(config.site_resolved.products_category.is_none());
        assert!(config.wordpress.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let toml = "";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_parse_server_config() {
        let toml = r#"
[server]
host = "0.0.0.0"
port = 9000
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
    }

    #[test]
    fn test_parse_wordpress_config() {
        let toml = r#"
[wordpress]
base_url = "https://wp.example.com/wp-json/wp/v2"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        let wordpress = config.wordpress.unwrap();
        assert_eq!(wordpress.base_url, "https://wp.example.com/wp-json/wp/v2");
    }

    #[test]
    fn test_parse_site_config() {
        let toml = r#"
[site]
name = "Kool Box"
shell_dir = "shells"
products_category = 7
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(config.site_resolved.name, "Kool Box");
        assert_eq!(
            config.site_resolved.shell_dir,
            PathBuf::from("/project/shells")
        );
        assert_eq!(config.site_resolved.products_category, Some(7));
    }

    #[test]
    fn test_resolve_paths_defaults() {
        let toml = "";
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(config.site_resolved.name, "Kool Box");
        assert_eq!(
            config.site_resolved.shell_dir,
            PathBuf::from("/project/site")
        );
        assert!(config.site_resolved.products_category.is_none());
    }

    #[test]
    fn test_apply_cli_settings_host() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            host: Some("0.0.0.0".to_owned()),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080); // Unchanged
    }

    #[test]
    fn test_apply_cli_settings_port() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            port: Some(9000),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1"); // Unchanged
    }

    #[test]
    fn test_apply_cli_settings_shell_dir() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            shell_dir: Some(PathBuf::from("/custom/site")),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(
            config.site_resolved.shell_dir,
            PathBuf::from("/custom/site")
        );
        assert_eq!(config.site_resolved.name, "Kool Box"); // Unchanged
    }

    #[test]
    fn test_apply_cli_settings_base_url_inserts_section() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            base_url: Some("https://wp.example.com/wp-json/wp/v2".to_owned()),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(
            config.wordpress.as_ref().unwrap().base_url,
            "https://wp.example.com/wp-json/wp/v2"
        );
    }

    #[test]
    fn test_apply_cli_settings_base_url_overrides_existing() {
        let toml = r#"
[wordpress]
base_url = "https://old.example.com/wp-json/wp/v2"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        let overrides = CliSettings {
            base_url: Some("https://new.example.com/wp-json/wp/v2".to_owned()),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(
            config.wordpress.as_ref().unwrap().base_url,
            "https://new.example.com/wp-json/wp/v2"
        );
    }

    #[test]
    fn test_apply_cli_settings_multiple() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            host: Some("0.0.0.0".to_owned()),
            port: Some(3000),
            shell_dir: Some(PathBuf::from("/srv/shells")),
            base_url: None,
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.site_resolved.shell_dir, PathBuf::from("/srv/shells"));
        assert!(config.wordpress.is_none());
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings::default();

        config.apply_cli_settings(&overrides);

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.site_resolved.shell_dir, PathBuf::from("/test/site"));
        assert!(config.wordpress.is_none());
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let result = Config::load(Some(Path::new("/nonexistent/wpr.toml")), None);
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    // Environment variable expansion tests

    #[test]
    fn test_expand_env_vars_server_host() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("WPR_CONFIG_TEST_HOST", "0.0.0.0");
        }

        let toml = r#"
[server]
host = "${WPR_CONFIG_TEST_HOST}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.expand_env_vars().unwrap();

        assert_eq!(config.server.host, "0.0.0.0");

        unsafe {
            std::env::remove_var("WPR_CONFIG_TEST_HOST");
        }
    }

    #[test]
    fn test_expand_env_vars_wordpress_base_url() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("WPR_CONFIG_TEST_URL", "https://wp.example.com/wp-json/wp/v2");
        }

        let toml = r#"
[wordpress]
base_url = "${WPR_CONFIG_TEST_URL}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.expand_env_vars().unwrap();

        assert_eq!(
            config.wordpress.as_ref().unwrap().base_url,
            "https://wp.example.com/wp-json/wp/v2"
        );

        unsafe {
            std::env::remove_var("WPR_CONFIG_TEST_URL");
        }
    }

    #[test]
    fn test_expand_env_vars_missing_required_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("WPR_MISSING_VAR_CONFIG_TEST");
        }

        let toml = r#"
[wordpress]
base_url = "${WPR_MISSING_VAR_CONFIG_TEST}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        let result = config.expand_env_vars();

        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("WPR_MISSING_VAR_CONFIG_TEST"));
        assert!(err.to_string().contains("wordpress.base_url"));
    }

    #[test]
    fn test_expand_env_vars_literal_unchanged() {
        let toml = r#"
[server]
host = "127.0.0.1"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.expand_env_vars().unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
    }

    // Validation tests

    /// Assert that validation fails with expected substrings in the error message.
    fn assert_validation_error(config: &Config, expected_substrings: &[&str]) {
        let result = config.validate();
        assert!(result.is_err(), "Expected validation to fail");
        let err = result.unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(_)),
            "Expected ConfigError::Validation, got {err:?}"
        );
        let msg = err.to_string();
        for s in expected_substrings {
            assert!(
                msg.contains(s),
                "Expected error to contain '{s}', got: {msg}"
            );
        }
    }

    fn assert_validation_error_on_wordpress(
        config: &WordpressConfig,
        expected_substrings: &[&str],
    ) {
        let result = config.validate();
        assert!(result.is_err(), "Expected validation to fail");
        let err = result.unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(_)),
            "Expected ConfigError::Validation, got {err:?}"
        );
        let msg = err.to_string();
        for s in expected_substrings {
            assert!(
                msg.contains(s),
                "Expected error to contain '{s}', got: {msg}"
            );
        }
    }

    /// Create a valid `WordPress` config for testing.
    fn valid_wordpress_config() -> WordpressConfig {
        WordpressConfig {
            base_url: "https://wp.example.com/wp-json/wp/v2".to_owned(),
        }
    }

    #[test]
    fn test_validate_default_config_passes() {
        let config = Config::default_with_base(Path::new("/test"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_server_host_empty() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.server.host = String::new();
        assert_validation_error(&config, &["server.host", "empty"]);
    }

    #[test]
    fn test_validate_server_port_zero() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.server.port = 0;
        assert_validation_error(&config, &["server.port"]);
    }

    #[test]
    fn test_validate_site_name_empty() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.site_resolved.name = String::new();
        assert_validation_error(&config, &["site.name", "empty"]);
    }

    #[test]
    fn test_wordpress_config_validate_valid() {
        let config = valid_wordpress_config();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_wordpress_config_validate_empty_url() {
        let config = WordpressConfig {
            base_url: String::new(),
        };
        assert_validation_error_on_wordpress(&config, &["base_url", "empty"]);
    }

    #[test]
    fn test_wordpress_config_validate_invalid_url() {
        let config = WordpressConfig {
            base_url: "not-a-url".to_owned(),
        };
        assert_validation_error_on_wordpress(&config, &["base_url", "http"]);
    }

    #[test]
    fn test_config_require_wordpress_returns_validated() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.wordpress = Some(valid_wordpress_config());
        assert!(config.require_wordpress().is_ok());
    }

    #[test]
    fn test_config_require_wordpress_missing_section() {
        let config = Config::default_with_base(Path::new("/test"));
        let err = config.require_wordpress().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("[wordpress]"));
    }

    #[test]
    fn test_config_require_wordpress_invalid_config() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.wordpress = Some(WordpressConfig {
            base_url: String::new(),
        });
        let err = config.require_wordpress().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("base_url"));
    }

    #[test]
    fn test_validate_passes_with_wordpress_section_present_but_empty_url() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.wordpress = Some(WordpressConfig {
            base_url: String::new(),
        });
        // validate() does not eagerly check the wordpress section
        assert!(config.validate().is_ok());
    }
}
