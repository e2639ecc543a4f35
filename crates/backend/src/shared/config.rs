use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    /// Каталог HTML-фрагментов страниц
    pub pages_dir: String,
    /// Собранный фронтенд (index.html, wasm, стили)
    pub static_dir: String,
}

fn default_port() -> u16 {
    3000
}

impl ServerConfig {
    pub fn pages_path(&self) -> PathBuf {
        PathBuf::from(&self.pages_dir)
    }

    pub fn static_path(&self) -> PathBuf {
        PathBuf::from(&self.static_dir)
    }

    pub fn index_path(&self) -> PathBuf {
        self.static_path().join("index.html")
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000
pages_dir = "src/pages"
static_dir = "dist"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            }
            tracing::warn!("config.toml not found at: {}", config_path.display());
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    if config.server.pages_dir.trim().is_empty() {
        anyhow::bail!("server.pages_dir must not be empty");
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.pages_dir, "src/pages");
        assert_eq!(config.server.index_path(), PathBuf::from("dist").join("index.html"));
    }

    #[test]
    fn test_port_defaults_when_missing() {
        let config = parse_config("[server]\npages_dir = \"pages\"\nstatic_dir = \"public\"\n").unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.static_dir, "public");
    }

    #[test]
    fn test_empty_pages_dir_rejected() {
        assert!(parse_config("[server]\npages_dir = \" \"\nstatic_dir = \"dist\"\n").is_err());
        assert!(parse_config("[database]\npath = \"x\"\n").is_err());
    }
}
