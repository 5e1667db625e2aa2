//! Engine configuration that downstream crates can serialize/deserialize.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Run the final validation pass over the root's complete set.
    pub prune_output: bool,

    /// Evaluate the two subtrees of every internal node on the rayon pool.
    /// Results are identical either way.
    pub parallel_subtrees: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            prune_output: true,
            parallel_subtrees: false,
        }
    }
}

impl EngineConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `WCOJ_PRUNE_OUTPUT`: `true`/`false`
    /// - `WCOJ_PARALLEL_SUBTREES`: `true`/`false`
    ///
    /// Unparsable values are ignored; use `try_from_env` to surface them.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var("WCOJ_PRUNE_OUTPUT") {
            if let Some(v) = parse_flag(&s) {
                cfg.prune_output = v;
            }
        }

        if let Ok(s) = std::env::var("WCOJ_PARALLEL_SUBTREES") {
            if let Some(v) = parse_flag(&s) {
                cfg.parallel_subtrees = v;
            }
        }

        cfg
    }

    /// Like `from_env`, but an unparsable value is a configuration error.
    pub fn try_from_env() -> Result<Self> {
        let mut cfg = Self::default();
        if let Some(v) = env_flag("WCOJ_PRUNE_OUTPUT")? {
            cfg.prune_output = v;
        }
        if let Some(v) = env_flag("WCOJ_PARALLEL_SUBTREES")? {
            cfg.parallel_subtrees = v;
        }
        Ok(cfg)
    }

    pub fn with_parallel_subtrees(mut self, on: bool) -> Self {
        self.parallel_subtrees = on;
        self
    }

    pub fn with_prune_output(mut self, on: bool) -> Self {
        self.prune_output = on;
        self
    }
}

fn env_flag(key: &str) -> Result<Option<bool>> {
    match std::env::var(key) {
        Ok(s) => parse_flag(&s)
            .map(Some)
            .ok_or_else(|| Error::Config(format!("{key}: expected a boolean, got '{s}'"))),
        Err(_) => Ok(None),
    }
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_accept_common_spellings() {
        assert_eq!(parse_flag(" TRUE "), Some(true));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: EngineConfig = serde_json::from_str(r#"{"parallel_subtrees": true}"#).unwrap();
        assert!(cfg.prune_output);
        assert!(cfg.parallel_subtrees);
    }
}
