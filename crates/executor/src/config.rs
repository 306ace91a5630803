use config::{Config as ConfigLoader, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

use super::error::Error;

#[derive(Debug, Deserialize, Clone)]
pub struct SolverConfig {
    pub parallel_threshold: usize,
    /// Wall-clock budget for one basis computation; no limit when absent.
    pub timeout_ms: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SimulatorConfig {
    pub total_nodes: usize,
    pub total_edges: usize,
    pub max_weight: f64,
    pub self_loops: bool,
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct OutputConfig {
    pub path: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub solver: SolverConfig,
    pub simulator: SimulatorConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Loads configuration from `crates/executor/Config.toml` under the current
/// directory, overlaid with `MCB_<SECTION>__<KEY>` environment variables.
pub fn load_config() -> Result<Config, Error> {
    let base_path = env::current_dir().map_err(|e| {
        Error::ConfigLoadError(format!("Failed to determine current directory: {}", e))
    })?;

    let config_file_path: PathBuf = base_path
        .join("crates")
        .join("executor")
        .join("Config.toml");

    load_config_from(&config_file_path)
}

pub fn load_config_from(config_file_path: &Path) -> Result<Config, Error> {
    if !config_file_path.exists() {
        return Err(Error::ConfigLoadError(format!(
            "Configuration file not found at calculated path: {}",
            config_file_path.display()
        )));
    }

    let s = ConfigLoader::builder()
        .add_source(File::from(config_file_path).required(true))
        .add_source(
            Environment::with_prefix("MCB")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .map_err(|e| Error::ConfigLoadError(e.to_string()))?;

    let app_config: Config = s
        .try_deserialize()
        .map_err(|e| Error::ConfigLoadError(format!("Failed to deserialize config: {}", e)))?;

    Ok(app_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write config");
        file
    }

    #[test]
    fn test_load_config_from_file() {
        let file = write_config(
            r#"
[solver]
parallel_threshold = 8
timeout_ms = 250

[simulator]
total_nodes = 20
total_edges = 40
max_weight = 5.0
self_loops = false
seed = 7

[output]
path = "out.csv"
"#,
        );

        let config = load_config_from(file.path()).expect("Config should load");

        assert_eq!(config.solver.parallel_threshold, 8);
        assert_eq!(config.solver.timeout_ms, Some(250));
        assert_eq!(config.simulator.total_edges, 40);
        assert_eq!(config.simulator.seed, Some(7));
        assert!(!config.simulator.self_loops);
        assert_eq!(config.output.path.as_deref(), Some("out.csv"));
    }

    #[test]
    fn test_optional_fields_default_to_none() {
        let file = write_config(
            r#"
[solver]
parallel_threshold = 64

[simulator]
total_nodes = 3
total_edges = 3
max_weight = 1.0
self_loops = true
"#,
        );

        let config = load_config_from(file.path()).expect("Config should load");

        assert_eq!(config.solver.timeout_ms, None);
        assert_eq!(config.simulator.seed, None);
        assert_eq!(config.output.path, None);
    }

    #[test]
    fn test_missing_file_is_a_config_error() {
        let result = load_config_from(Path::new("does/not/exist/Config.toml"));
        assert!(matches!(result, Err(Error::ConfigLoadError(_))));
    }

    #[test]
    fn test_shipped_config_parses() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("Config.toml");
        let config = load_config_from(&path).expect("Shipped Config.toml should load");

        assert!(config.simulator.total_nodes > 0);
    }
}
