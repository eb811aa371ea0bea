/// Shell configuration
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ShellConfig {
    #[serde(default = "default_provider")]
    pub provider: ProviderSettings,

    #[serde(default = "default_demo")]
    pub demo: DemoSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderSettings {
    /// Name of the seeded in-memory provider
    #[serde(default = "default_provider_name")]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DemoSettings {
    /// Query the demo issues once the provider connects
    #[serde(default = "default_query")]
    pub query: String,
}

fn default_provider() -> ProviderSettings {
    ProviderSettings {
        name: default_provider_name(),
    }
}

fn default_demo() -> DemoSettings {
    DemoSettings {
        query: default_query(),
    }
}

fn default_provider_name() -> String {
    "local".to_string()
}

fn default_query() -> String {
    "light".to_string()
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            demo: default_demo(),
        }
    }
}

impl ShellConfig {
    /// Load configuration from a JSON file, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                serde_json::from_str(&raw)
                    .with_context(|| format!("parsing config {}", path.display()))
            }
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: ShellConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.provider.name, "local");
        assert_eq!(config.demo.query, "light");
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let config: ShellConfig =
            serde_json::from_str(r#"{"demo": {"query": "moon"}}"#).unwrap();
        assert_eq!(config.demo.query, "moon");
        assert_eq!(config.provider.name, "local");
    }
}
