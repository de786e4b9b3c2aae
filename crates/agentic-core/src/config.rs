use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io;
use std::path::Path;

pub const DEFAULT_AGENT_NAME: &str = "hello_world";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_GLOBAL_INSTRUCTION: &str =
    "You are a simple conversational bot for hello world agent.";
pub const DEFAULT_INSTRUCTION: &str =
    "Keep the conversation short, limit of 100 words max in response.";
pub const DEFAULT_TOOLS: [&str; 3] = ["get_current_time", "calculate_sum", "say_hello"];
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub agent: AgentSettings,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Declarative description of the agent. Tools are referenced by the name
/// they register under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentSettings {
    pub name: String,
    pub model: String,
    pub global_instruction: String,
    pub instruction: String,
    pub tools: Vec<String>,
}

impl Default for AgentSettings {
    fn default() -> Self {
        Self {
            name: DEFAULT_AGENT_NAME.to_string(),
            model: DEFAULT_MODEL.to_string(),
            global_instruction: DEFAULT_GLOBAL_INSTRUCTION.to_string(),
            instruction: DEFAULT_INSTRUCTION.to_string(),
            tools: DEFAULT_TOOLS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl AgentSettings {
    pub fn with_env_overrides(&self) -> Self {
        let model = env::var("AGENT_MODEL").unwrap_or_else(|_| self.model.clone());
        Self {
            model,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
        }
    }
}

impl ServerConfig {
    pub fn with_env_overrides(&self) -> Self {
        let bind_address =
            env::var("SERVER_BIND_ADDRESS").unwrap_or_else(|_| self.bind_address.clone());
        Self { bind_address }
    }
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Like [`Config::load`], but a missing file yields `None`. A file that
    /// exists and fails to parse is still an error.
    pub fn load_optional(path: &Path) -> anyhow::Result<Option<Self>> {
        match Self::load(path) {
            Ok(config) => Ok(Some(config)),
            Err(e)
                if e.downcast_ref::<io::Error>()
                    .is_some_and(|err| err.kind() == io::ErrorKind::NotFound) =>
            {
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    pub fn load_optional_from_env() -> anyhow::Result<Option<Self>> {
        let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| Self::default_config_path());
        Self::load_optional(Path::new(&config_path))
    }

    pub fn default_config_path() -> String {
        "./config.toml".to_string()
    }

    pub fn with_env_overrides(&self) -> Self {
        Self {
            agent: self.agent.with_env_overrides(),
            server: self.server.with_env_overrides(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn should_deserialize_config_from_toml() {
        let toml_content = r#"
[agent]
name = "greeter"
model = "gemini-2.5-pro"
global_instruction = "Be nice."
instruction = "Be brief."
tools = ["say_hello"]

[server]
bind_address = "127.0.0.1:8080"
"#;

        let config: Config = toml::from_str(toml_content).unwrap();

        assert_eq!(config.agent.name, "greeter");
        assert_eq!(config.agent.model, "gemini-2.5-pro");
        assert_eq!(config.agent.global_instruction, "Be nice.");
        assert_eq!(config.agent.instruction, "Be brief.");
        assert_eq!(config.agent.tools, vec!["say_hello"]);
        assert_eq!(config.server.bind_address, "127.0.0.1:8080");
    }

    #[test]
    fn should_fill_missing_fields_with_defaults() {
        let config: Config = toml::from_str("[agent]\nmodel = \"other-model\"\n").unwrap();

        assert_eq!(config.agent.name, "hello_world");
        assert_eq!(config.agent.model, "other-model");
        assert_eq!(config.agent.instruction, DEFAULT_INSTRUCTION);
        assert_eq!(config.agent.tools.len(), 3);
        assert_eq!(config.server, ServerConfig::default());
    }

    #[test]
    fn should_default_to_the_hello_world_agent() {
        let config: Config = toml::from_str("").unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.agent.model, "gemini-2.0-flash");
        assert_eq!(
            config.agent.tools,
            vec!["get_current_time", "calculate_sum", "say_hello"]
        );
    }

    #[test]
    fn should_load_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[agent]\nname = \"from_file\"\n")
            .unwrap();

        let config = Config::load(temp_file.path()).unwrap();

        assert_eq!(config.agent.name, "from_file");
    }

    #[test]
    fn should_load_config_from_env_path_and_apply_overrides() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[agent]\nmodel = \"file-model\"\n")
            .unwrap();

        env::set_var("CONFIG_PATH", temp_file.path());
        env::set_var("AGENT_MODEL", "env-model");

        let config = Config::load_optional_from_env().unwrap().unwrap();
        let overridden = config.with_env_overrides();

        env::remove_var("CONFIG_PATH");
        env::remove_var("AGENT_MODEL");

        assert_eq!(config.agent.model, "file-model");
        assert_eq!(overridden.agent.model, "env-model");
        assert_eq!(overridden.agent.name, config.agent.name);
    }

    #[test]
    fn should_use_default_config_path() {
        assert_eq!(Config::default_config_path(), "./config.toml");
    }

    #[test]
    fn should_return_error_for_missing_file() {
        let result = Config::load(Path::new("/non/existent/path.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn should_return_error_for_invalid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"invalid toml content [[[").unwrap();

        let result = Config::load(temp_file.path());
        assert!(result.is_err());
    }

    #[test]
    fn should_treat_missing_file_as_absent_config() {
        let loaded = Config::load_optional(Path::new("/non/existent/path.toml")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn should_load_existing_file_as_optional_config() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[server]\nbind_address = \"127.0.0.1:9\"\n").unwrap();

        let loaded = Config::load_optional(temp_file.path()).unwrap().unwrap();

        assert_eq!(loaded.server.bind_address, "127.0.0.1:9");
    }

    #[test]
    fn should_fail_optional_load_for_broken_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[agent]\ntools = \"say_hello\"\n").unwrap();

        assert!(Config::load_optional(temp_file.path()).is_err());

        let mut syntax_error = NamedTempFile::new().unwrap();
        syntax_error.write_all(b"[[[").unwrap();

        assert!(Config::load_optional(syntax_error.path()).is_err());
    }

    #[test]
    fn should_return_error_for_wrongly_typed_field() {
        let result: Result<Config, _> = toml::from_str("[agent]\ntools = \"say_hello\"\n");
        assert!(result.is_err());
    }
}
