//! Configuration loading for pwguard

mod schema;

pub use schema::{AnalyzerConfig, ConfigError, CrackTimeThreshold};

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = ".pwguardrc.json";

/// Find and load the config file. An explicit path must exist; otherwise the
/// current directory and its parents are searched, falling back to defaults.
pub fn load_config(work_dir: &Path, custom_path: Option<&Path>) -> Result<AnalyzerConfig> {
    let path = if let Some(p) = custom_path {
        let path = if p.is_absolute() {
            p.to_path_buf()
        } else {
            work_dir.join(p)
        };
        if path.exists() {
            Some(path)
        } else {
            anyhow::bail!("Config file not found: {}", path.display());
        }
    } else {
        find_config_in_parents(work_dir)
    };

    match path {
        Some(path) => load_config_file(&path),
        None => Ok(AnalyzerConfig::default()),
    }
}

/// Read, parse and validate a single config file
pub fn load_config_file(config_path: &Path) -> Result<AnalyzerConfig> {
    let content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config: {}", config_path.display()))?;
    let config: AnalyzerConfig = serde_json::from_str(&content)
        .with_context(|| format!("Invalid JSON in config: {}", config_path.display()))?;
    config
        .validate()
        .with_context(|| format!("Invalid config values in {}", config_path.display()))?;
    log::debug!("loaded config from {}", config_path.display());
    Ok(config)
}

/// Search for .pwguardrc.json in directory and its parents
fn find_config_in_parents(mut dir: &Path) -> Option<PathBuf> {
    loop {
        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }
        dir = dir.parent()?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::entropy::crack_time_from_seconds;
    use crate::TimeUnit;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "{}", body).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.guesses_per_second, 1e10);
        assert_eq!(config.mutation_probability, 0.3);
        assert_eq!(config.max_crack_time.value, 365.0);
        assert_eq!(config.max_crack_time.unit, TimeUnit::Days);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: AnalyzerConfig =
            serde_json::from_str(r#"{ "guessesPerSecond": 1000 }"#).unwrap();
        assert_eq!(config.guesses_per_second, 1000.0);
        assert_eq!(config.mutation_probability, 0.3);
        assert_eq!(config.max_crack_time, CrackTimeThreshold::default());
    }

    #[test]
    fn test_load_from_parent_directory() {
        let dir = TempDir::new().unwrap();
        write_config(
            dir.path(),
            CONFIG_FILENAME,
            r#"{
                "mutationProbability": 0.5,
                "maxCrackTime": { "value": 2, "unit": "years" }
            }"#,
        );
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let config = load_config(&nested, None).unwrap();
        assert_eq!(config.mutation_probability, 0.5);
        assert_eq!(
            config.max_crack_time,
            CrackTimeThreshold::new(2.0, TimeUnit::Years)
        );
    }

    #[test]
    fn test_explicit_relative_path() {
        let dir = TempDir::new().unwrap();
        write_config(dir.path(), "strict.json", r#"{ "guessesPerSecond": 1e12 }"#);
        let config = load_config(dir.path(), Some(Path::new("strict.json"))).unwrap();
        assert_eq!(config.guesses_per_second, 1e12);
    }

    #[test]
    fn test_explicit_path_missing() {
        let dir = TempDir::new().unwrap();
        let err = load_config(dir.path(), Some(Path::new("nope.json"))).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_invalid_json_has_context() {
        let dir = TempDir::new().unwrap();
        let path = write_config(dir.path(), "bad.json", "{ not json");
        let err = load_config_file(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid JSON in config"));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(dir.path(), "bad.json", r#"{ "mutationProbability": 1.5 }"#);
        let err = load_config_file(&path).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::InvalidMutationProbability(1.5))
        );
    }

    #[test]
    fn test_validate_guess_rate() {
        let config = AnalyzerConfig::default().with_guesses_per_second(0.0);
        assert_eq!(config.validate(), Err(ConfigError::InvalidGuessRate(0.0)));
        let config = AnalyzerConfig::default().with_guesses_per_second(f64::INFINITY);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_threshold() {
        let config = AnalyzerConfig::default()
            .with_max_crack_time(CrackTimeThreshold::new(-1.0, TimeUnit::Days));
        assert_eq!(config.validate(), Err(ConfigError::InvalidCrackTime(-1.0)));
    }

    #[test]
    fn test_threshold_comparison() {
        let year = CrackTimeThreshold::default();
        assert_eq!(year.in_seconds(), 31_536_000.0);
        assert!(year.is_satisfied_by(&crack_time_from_seconds(31_536_000.0)));
        assert!(!year.is_satisfied_by(&crack_time_from_seconds(31_535_999.0)));
        assert!(CrackTimeThreshold::new(0.0, TimeUnit::Seconds)
            .is_satisfied_by(&crack_time_from_seconds(0.0)));
    }
}
