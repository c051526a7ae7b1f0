//! Environment variable loading utilities
//!
//! This module provides common patterns for loading environment variables
//! with type conversion and fallback defaults.

use std::env;
use std::str::FromStr;

/// Load an environment variable with a string default
pub fn load_env_string(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Load an environment variable with type conversion and default
pub fn load_env_parsed<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Load a non-blank environment variable as an `Option<String>`
pub fn load_env_optional(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Builder for loading multiple environment variables with consistent prefix
#[derive(Debug)]
pub struct EnvLoader {
    prefix: String,
}

impl EnvLoader {
    /// Create a new environment loader with the given prefix
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
        }
    }

    /// Full variable name for a suffix, e.g. `REMEMBERIZER_API_TOKEN`
    pub fn key(&self, suffix: &str) -> String {
        format!("{}_{}", self.prefix, suffix)
    }

    /// Load a string value with default
    pub fn load_string(&self, suffix: &str, default: &str) -> String {
        load_env_string(&self.key(suffix), default)
    }

    /// Load a parsed value with default
    pub fn load_parsed<T>(&self, suffix: &str, default: T) -> T
    where
        T: FromStr,
    {
        load_env_parsed(&self.key(suffix), default)
    }

    /// Load an optional, non-blank string value
    pub fn load_optional(&self, suffix: &str) -> Option<String> {
        load_env_optional(&self.key(suffix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_load_env_string() {
        let key = "REMEMBERIZER_TEST_STRING_VAR";

        env::remove_var(key);
        assert_eq!(load_env_string(key, "fallback"), "fallback");

        env::set_var(key, "value");
        assert_eq!(load_env_string(key, "fallback"), "value");

        env::remove_var(key);
    }

    #[test]
    #[serial]
    fn test_load_env_parsed_falls_back_on_garbage() {
        let key = "REMEMBERIZER_TEST_PARSED_VAR";

        env::remove_var(key);
        assert_eq!(load_env_parsed(key, 60u64), 60);

        env::set_var(key, " 15 ");
        assert_eq!(load_env_parsed(key, 60u64), 15);

        env::set_var(key, "soon");
        assert_eq!(load_env_parsed(key, 60u64), 60);

        env::remove_var(key);
    }

    #[test]
    #[serial]
    fn test_load_env_optional_ignores_blank() {
        let key = "REMEMBERIZER_TEST_OPTIONAL_VAR";

        env::remove_var(key);
        assert_eq!(load_env_optional(key), None);

        env::set_var(key, "   ");
        assert_eq!(load_env_optional(key), None);

        env::set_var(key, "abc");
        assert_eq!(load_env_optional(key), Some("abc".to_string()));

        env::remove_var(key);
    }

    #[test]
    #[serial]
    fn test_env_loader_prefixes_keys() {
        let loader = EnvLoader::new("REMEMBERIZER_TEST");
        assert_eq!(loader.key("NUMBER"), "REMEMBERIZER_TEST_NUMBER");

        env::remove_var("REMEMBERIZER_TEST_NUMBER");
        assert_eq!(loader.load_parsed::<u32>("NUMBER", 42), 42);

        env::set_var("REMEMBERIZER_TEST_NUMBER", "7");
        assert_eq!(loader.load_parsed::<u32>("NUMBER", 42), 7);
        assert_eq!(loader.load_optional("NUMBER"), Some("7".to_string()));

        env::remove_var("REMEMBERIZER_TEST_NUMBER");
    }
}
