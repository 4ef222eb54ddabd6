//! Configuration for the agent orchestrator

use serde::{Deserialize, Serialize};

/// Configuration for the agent orchestrator
///
/// Model names follow Ollama tags. The planner shares the researcher
/// model, so only three models are named.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Ollama endpoint all roles talk to
    pub ollama_endpoint: String,

    /// Model for the routing supervisor
    pub supervisor_model: String,

    /// Model for the researcher and planner roles
    pub researcher_model: String,

    /// Model for the Stellarium executor
    pub executor_model: String,

    /// Sampling temperature for the supervisor
    pub supervisor_temperature: f32,

    /// Sampling temperature for the researcher and planner
    pub researcher_temperature: f32,

    /// Sampling temperature for the executor
    pub executor_temperature: f32,

    /// Maximum supervisor rounds before the loop gives up
    pub max_iterations: usize,

    /// Start of the planner's candidate date range (astronomical year)
    pub planner_start_year: i32,

    /// End of the planner's candidate date range
    pub planner_end_year: i32,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            ollama_endpoint: "http://localhost:11434".to_string(),
            supervisor_model: "llama3.1:8b-instruct-q4_K_M".to_string(),
            researcher_model: "qwen2.5:7b-instruct-q4_K_M".to_string(),
            executor_model: "llama3.1:8b-instruct-q4_K_M".to_string(),
            supervisor_temperature: 0.7,
            researcher_temperature: 0.3,
            executor_temperature: 0.1,
            max_iterations: 10,
            planner_start_year: -100,
            planner_end_year: 2030,
        }
    }
}

impl AgentConfig {
    /// Quick preset: few iterations, for smoke tests against small models
    pub fn quick() -> Self {
        Self {
            max_iterations: 3,
            ..Self::default()
        }
    }

    /// Thorough preset: more supervisor rounds and a wider date range
    pub fn thorough() -> Self {
        Self {
            max_iterations: 25,
            planner_start_year: -2000,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_iterations == 0 {
            return Err("max_iterations must be greater than 0".to_string());
        }
        for (name, temp) in [
            ("supervisor_temperature", self.supervisor_temperature),
            ("researcher_temperature", self.researcher_temperature),
            ("executor_temperature", self.executor_temperature),
        ] {
            if !(0.0..=2.0).contains(&temp) {
                return Err(format!("{} must be between 0.0 and 2.0", name));
            }
        }
        if self.planner_start_year >= self.planner_end_year {
            return Err("planner_start_year must precede planner_end_year".to_string());
        }
        if self.ollama_endpoint.is_empty() {
            return Err("ollama_endpoint must not be empty".to_string());
        }
        Ok(())
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to a TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AgentConfig::default().validate().is_ok());
    }

    #[test]
    fn test_presets_are_valid() {
        assert!(AgentConfig::quick().validate().is_ok());
        assert!(AgentConfig::thorough().validate().is_ok());
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let mut config = AgentConfig::default();
        config.max_iterations = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_out_of_range_temperature_rejected() {
        let mut config = AgentConfig::default();
        config.executor_temperature = 2.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_inverted_year_range_rejected() {
        let mut config = AgentConfig::default();
        config.planner_start_year = 2031;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = AgentConfig::default();
        let toml_str = config.to_toml().unwrap();
        let parsed = AgentConfig::from_toml(&toml_str).unwrap();

        assert_eq!(config.supervisor_model, parsed.supervisor_model);
        assert_eq!(config.max_iterations, parsed.max_iterations);
        assert_eq!(config.planner_start_year, parsed.planner_start_year);
    }
}
