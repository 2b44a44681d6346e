use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub dataset: DatasetConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatasetConfig {
    /// Directory the dataset file lives in (created on first generation)
    pub dir: String,
    pub filename: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[dataset]
dir = "data"
filename = "ecommerce_with_repeating.csv"
"#;

/// Load configuration from a config.toml file
///
/// Search order:
/// 1. Working directory (the embedding view shell's launch directory)
/// 2. Next to the executable (for deployed shells)
/// 3. Falls back to the embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    let mut candidates: Vec<PathBuf> = vec![PathBuf::from("config.toml")];
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.push(exe_dir.join("config.toml"));
        }
    }

    for config_path in candidates {
        if config_path.exists() {
            tracing::info!("Loading config from: {}", config_path.display());
            let contents = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&contents)?;
            return Ok(config);
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            dir: "data".to_string(),
            filename: "ecommerce_with_repeating.csv".to_string(),
        }
    }
}

impl DatasetConfig {
    /// Candidate dataset locations in priority order: the data directory
    /// first, then the bare filename in the working directory.
    pub fn candidate_paths(&self) -> Vec<PathBuf> {
        vec![
            PathBuf::from(&self.dir).join(&self.filename),
            PathBuf::from(&self.filename),
        ]
    }

    /// Where a freshly generated dataset is written.
    pub fn target_path(&self) -> PathBuf {
        PathBuf::from(&self.dir).join(&self.filename)
    }
}
