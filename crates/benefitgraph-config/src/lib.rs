//! Configuration system for benefitgraph.
//!
//! Load evaluator configuration from TOML or YAML files to choose programs,
//! parallelism and the dataset location without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use benefitgraph_config::{EvaluatorConfig, Parallelism};
//!
//! let config = EvaluatorConfig::from_toml_str(r#"
//!     programs = ["HeadStart", "ChildTaxCredit"]
//!     parallelism = { threads = 4 }
//!     random_seed = 7
//!
//!     [dataset]
//!     path = "data/households.jsonl"
//!     shift = 10
//! "#).unwrap();
//!
//! assert_eq!(config.parallelism, Parallelism::Threads(4));
//! assert_eq!(config.dataset.unwrap().shift, 10);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use benefitgraph_config::EvaluatorConfig;
//!
//! let config = EvaluatorConfig::load("benefitgraph.toml").unwrap_or_default();
//! // Runs every registered program with automatic parallelism
//! ```

#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main evaluator configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct EvaluatorConfig {
    /// Programs to run. Empty means every registered program.
    #[serde(default)]
    pub programs: Vec<String>,

    /// Worker threads for batch evaluation.
    #[serde(default)]
    pub parallelism: Parallelism,

    /// Seed for random household generation.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Tracing filter directive, e.g. `"benefitgraph=debug"`.
    #[serde(default)]
    pub log_filter: Option<String>,

    /// Dataset location.
    #[serde(default)]
    pub dataset: Option<DatasetConfig>,
}

impl EvaluatorConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and validates configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, contains invalid TOML, or
    /// fails [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Self::from_toml_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Adds a program to run.
    pub fn with_program(mut self, name: impl Into<String>) -> Self {
        self.programs.push(name.into());
        self
    }

    pub fn with_parallelism(mut self, parallelism: Parallelism) -> Self {
        self.parallelism = parallelism;
        self
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = Some(filter.into());
        self
    }

    /// Sets the dataset path, keeping any configured shift.
    pub fn with_dataset(mut self, path: impl Into<PathBuf>) -> Self {
        self.dataset = Some(DatasetConfig {
            path: path.into(),
            ..self.dataset.unwrap_or_default()
        });
        self
    }

    /// Checks values serde cannot: thread counts, program names and paths.
    ///
    /// Program names are only checked for shape here; whether they are
    /// registered is decided by whoever holds the program registry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.parallelism == Parallelism::Threads(0) {
            return Err(ConfigError::Invalid(
                "parallelism.threads must be at least 1".to_string(),
            ));
        }
        for (i, name) in self.programs.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("programs[{i}] is blank")));
            }
            if self.programs[..i].contains(name) {
                return Err(ConfigError::Invalid(format!(
                    "program {name:?} is listed twice"
                )));
            }
        }
        if let Some(dataset) = &self.dataset {
            if dataset.path.as_os_str().is_empty() {
                return Err(ConfigError::Invalid("dataset.path is empty".to_string()));
            }
        }
        Ok(())
    }

    /// Number of worker threads batch evaluation should use.
    pub fn thread_count(&self) -> Option<usize> {
        self.parallelism.thread_count()
    }
}

/// Batch evaluation parallelism.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Parallelism {
    /// Let the thread pool pick its size.
    #[default]
    Auto,

    /// Evaluate on the calling thread.
    Sequential,

    /// Specific number of threads.
    Threads(usize),
}

impl Parallelism {
    /// Explicit thread count, or `None` for [`Parallelism::Auto`].
    pub fn thread_count(self) -> Option<usize> {
        match self {
            Parallelism::Auto => None,
            Parallelism::Sequential => Some(1),
            Parallelism::Threads(n) => Some(n),
        }
    }
}

/// Location of a JSON-lines household dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct DatasetConfig {
    pub path: PathBuf,

    /// Rotation offset: the first `shift` records are moved to the end.
    #[serde(default)]
    pub shift: usize,
}
