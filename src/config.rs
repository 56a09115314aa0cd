// Tue Jan 13 2026 - Alex

use crate::template::Behavior;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output_suffix: String,
    pub style: OutputStyle,
    pub skip_string_null: bool,
    pub skip_case_normalization: bool,
    pub log_accumulated_size: bool,
    pub string_null_fixup: bool,
    pub parallel: bool,
    pub max_threads: usize,
}

/// Naming and wrapping of the generated class.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputStyle {
    pub namespace: String,
    pub base_class: String,
    pub class_prefix: String,
    pub field_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_suffix: ".cs".to_string(),
            style: OutputStyle::default(),
            skip_string_null: true,
            skip_case_normalization: true,
            log_accumulated_size: false,
            string_null_fixup: false,
            parallel: true,
            max_threads: num_cpus::get(),
        }
    }
}

impl Default for OutputStyle {
    fn default() -> Self {
        Self {
            namespace: "MBINCompiler.Models.Structs".to_string(),
            base_class: "NMSTemplate".to_string(),
            class_prefix: "UnknownTemplate".to_string(),
            field_prefix: "Unknown".to_string(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&text)?;
        config.validate().map_err(|e| anyhow::anyhow!(e))?;
        Ok(config)
    }

    pub fn with_output_suffix(mut self, suffix: String) -> Self {
        self.output_suffix = suffix;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Heuristic defaults before any directive is applied.
    pub fn behavior(&self) -> Behavior {
        let mut behavior = Behavior::empty();
        behavior.set(Behavior::SKIP_STRING_NULL, self.skip_string_null);
        behavior.set(Behavior::SKIP_CASE_NORMALIZATION, self.skip_case_normalization);
        behavior.set(Behavior::LOG_ACCUMULATED_SIZE, self.log_accumulated_size);
        behavior.set(Behavior::STRING_NULL_FIXUP, self.string_null_fixup);
        behavior
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.output_suffix.is_empty() {
            return Err("output_suffix must not be empty".to_string());
        }
        if self.max_threads == 0 {
            return Err("max_threads must be greater than 0".to_string());
        }
        for (name, value) in [
            ("namespace", &self.style.namespace),
            ("base_class", &self.style.base_class),
            ("class_prefix", &self.style.class_prefix),
            ("field_prefix", &self.style.field_prefix),
        ] {
            if !is_identifier_path(value) {
                return Err(format!("{} must be a valid identifier, got {:?}", name, value));
            }
        }
        Ok(())
    }
}

fn is_identifier_path(value: &str) -> bool {
    !value.is_empty()
        && value.split('.').all(|part| {
            let mut chars = part.chars();
            matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.behavior(), Behavior::default());
    }

    #[test]
    fn test_validate_rejects_bad_names() {
        let mut config = Config::default();
        config.style.field_prefix = "9lives".to_string();
        assert!(config.validate().is_err());

        let config = Config::default().with_output_suffix(String::new());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{ "style": { "namespace": "Game.Structs" }, "parallel": false }"#).unwrap();
        assert_eq!(config.style.namespace, "Game.Structs");
        assert_eq!(config.style.base_class, "NMSTemplate");
        assert!(!config.parallel);
        assert_eq!(config.output_suffix, ".cs");
    }
}
