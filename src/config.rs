//! Solver configuration.
//!
//! Load settings from TOML to pick the heuristic and bound the search
//! without code changes. Every field is optional; an empty document yields
//! the default configuration, which searches until a definite answer.
//!
//! # Examples
//!
//! ```
//! use npuzzle_solver::config::SolverConfig;
//! use npuzzle_solver::heuristics::Heuristic;
//! use std::time::Duration;
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     heuristic = "hamming"
//!     max_rounds = 50000
//!     time_limit_secs = 10
//! "#).unwrap();
//!
//! assert_eq!(config.heuristic, Heuristic::Hamming);
//! assert_eq!(config.max_rounds, Some(50_000));
//! assert_eq!(config.time_limit(), Some(Duration::from_secs(10)));
//! ```

use crate::error::Result;
use crate::heuristics::Heuristic;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Settings for a single solve.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct SolverConfig {
    /// Distance estimate used for node priority.
    #[serde(default)]
    pub heuristic: Heuristic,

    /// Stop after this many lockstep rounds.
    #[serde(default)]
    pub max_rounds: Option<u64>,

    /// Stop once this many seconds have elapsed, checked between rounds.
    #[serde(default)]
    pub time_limit_secs: Option<u64>,
}

impl SolverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_max_rounds(mut self, rounds: u64) -> Self {
        self.max_rounds = Some(rounds);
        self
    }

    pub fn with_time_limit_secs(mut self, seconds: u64) -> Self {
        self.time_limit_secs = Some(seconds);
        self
    }

    /// Returns the time limit as a `Duration`, if set.
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit_secs.map(Duration::from_secs)
    }

    /// Returns `true` if neither a round nor a time limit is configured.
    pub fn is_unbounded(&self) -> bool {
        self.max_rounds.is_none() && self.time_limit_secs.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PuzzleError;
    use std::io::Write;

    #[test]
    fn test_empty_toml_is_default() {
        let config = SolverConfig::from_toml_str("").unwrap();
        assert_eq!(config, SolverConfig::default());
        assert_eq!(config.heuristic, Heuristic::Manhattan);
        assert!(config.is_unbounded());
        assert_eq!(config.time_limit(), None);
    }

    #[test]
    fn test_builder_setters() {
        let config = SolverConfig::new()
            .with_heuristic(Heuristic::Hamming)
            .with_max_rounds(10)
            .with_time_limit_secs(3);
        assert_eq!(config.heuristic, Heuristic::Hamming);
        assert_eq!(config.max_rounds, Some(10));
        assert_eq!(config.time_limit(), Some(Duration::from_secs(3)));
        assert!(!config.is_unbounded());
    }

    #[test]
    fn test_rejects_unknown_fields_and_bad_values() {
        let err = SolverConfig::from_toml_str("heuristic = \"linear_conflict\"").unwrap_err();
        assert!(matches!(err, PuzzleError::Config(_)));

        let err = SolverConfig::from_toml_str("max_round = 5").unwrap_err();
        assert!(matches!(err, PuzzleError::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "npuzzle_solver_config_{}.toml",
            std::process::id()
        ));
        {
            let mut file = std::fs::File::create(&path).unwrap();
            writeln!(file, "max_rounds = 42").unwrap();
        }
        let config = SolverConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.max_rounds, Some(42));
        assert_eq!(config.heuristic, Heuristic::Manhattan);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = SolverConfig::load("/nonexistent/npuzzle/solver.toml").unwrap_err();
        assert!(matches!(err, PuzzleError::Io(_)));
    }
}
