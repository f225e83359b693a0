use crate::error::{to_env_var, ConfigError};
use config::{Config, Environment};
use serde::Deserialize;
use shiptalk::errors::StartupError;
use shiptalk::providers::configs::{
    OpenAiProviderConfig, DEFAULT_OPENAI_HOST, DEFAULT_OPENAI_MODEL, DEFAULT_TIMEOUT_SECS,
};
use shiptalk::reference::ReferenceLibrary;
use std::env;
use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerSettings {
    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

#[derive(Debug, Deserialize)]
pub struct ProviderSettings {
    #[serde(default = "default_openai_host")]
    pub host: String,
    pub api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default)]
    pub temperature: Option<f32>,
    #[serde(default)]
    pub max_tokens: Option<i32>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ProviderSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn into_config(self) -> OpenAiProviderConfig {
        OpenAiProviderConfig {
            timeout: self.timeout(),
            host: self.host,
            api_key: self.api_key,
            model: self.model,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ReferenceSettings {
    /// Directory of reference JSON files replacing the bundled set
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

impl ReferenceSettings {
    pub fn load(&self) -> Result<ReferenceLibrary, StartupError> {
        match &self.data_dir {
            Some(dir) => ReferenceLibrary::from_dir(dir),
            None => ReferenceLibrary::bundled(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    pub provider: ProviderSettings,
    #[serde(default)]
    pub reference: ReferenceSettings,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::load_and_validate()
    }

    fn load_and_validate() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("server.host", default_host())?
            .set_default("server.port", default_port())?
            .set_default("provider.host", default_openai_host())?
            .set_default("provider.model", default_model())?
            .set_default("provider.timeout_secs", default_timeout_secs())?;

        // The conventional OpenAI variable works as a fallback credential
        if let Ok(api_key) = env::var("OPENAI_API_KEY") {
            builder = builder.set_default("provider.api_key", api_key)?;
        }

        let config = builder
            .add_source(
                Environment::with_prefix("SHIPTALK")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        match config.get_string("provider.api_key") {
            Ok(key) if !key.trim().is_empty() => {}
            Ok(_) | Err(config::ConfigError::NotFound(_)) => {
                return Err(ConfigError::MissingEnvVar {
                    env_var: to_env_var("provider.api_key"),
                })
            }
            Err(err) => return Err(ConfigError::Other(err)),
        }

        let result: Result<Self, config::ConfigError> = config.try_deserialize();
        match result {
            Ok(settings) => Ok(settings),
            Err(err) => {
                tracing::debug!("Configuration error: {:?}", &err);
                if let config::ConfigError::NotFound(field) = &err {
                    Err(ConfigError::MissingEnvVar {
                        env_var: to_env_var(field),
                    })
                } else {
                    Err(ConfigError::Other(err))
                }
            }
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_model() -> String {
    DEFAULT_OPENAI_MODEL.to_string()
}

fn default_openai_host() -> String {
    DEFAULT_OPENAI_HOST.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clean_env() {
        for (key, _) in env::vars() {
            if key.starts_with("SHIPTALK_") {
                env::remove_var(&key);
            }
        }
        env::remove_var("OPENAI_API_KEY");
    }

    #[test]
    #[serial]
    fn test_default_settings() {
        clean_env();
        env::set_var("SHIPTALK_PROVIDER__API_KEY", "test-key");

        let settings = Settings::new().unwrap();
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.server.port, 3000);
        assert_eq!(settings.provider.host, "https://api.openai.com");
        assert_eq!(settings.provider.model, "gpt-4o-mini");
        assert_eq!(settings.provider.temperature, None);
        assert_eq!(settings.provider.timeout(), Duration::from_secs(120));
        assert!(settings.reference.data_dir.is_none());

        clean_env();
    }

    #[test]
    #[serial]
    fn test_openai_api_key_fallback() {
        clean_env();
        env::set_var("OPENAI_API_KEY", "sk-fallback");

        let settings = Settings::new().unwrap();
        assert_eq!(settings.provider.api_key, "sk-fallback");

        env::set_var("SHIPTALK_PROVIDER__API_KEY", "sk-explicit");
        let settings = Settings::new().unwrap();
        assert_eq!(settings.provider.api_key, "sk-explicit");

        clean_env();
    }

    #[test]
    #[serial]
    fn test_missing_api_key() {
        clean_env();

        let err = Settings::new().unwrap_err();
        assert!(
            matches!(err, ConfigError::MissingEnvVar { ref env_var } if env_var == "SHIPTALK_PROVIDER__API_KEY")
        );

        clean_env();
    }

    #[test]
    #[serial]
    fn test_environment_override() {
        clean_env();
        env::set_var("SHIPTALK_SERVER__PORT", "8080");
        env::set_var("SHIPTALK_PROVIDER__API_KEY", "test-key");
        env::set_var("SHIPTALK_PROVIDER__HOST", "https://custom.openai.com");
        env::set_var("SHIPTALK_PROVIDER__MODEL", "gpt-4o");
        env::set_var("SHIPTALK_PROVIDER__TEMPERATURE", "0.2");
        env::set_var("SHIPTALK_PROVIDER__MAX_TOKENS", "4000");
        env::set_var("SHIPTALK_PROVIDER__TIMEOUT_SECS", "30");
        env::set_var("SHIPTALK_REFERENCE__DATA_DIR", "/srv/shiptalk/data");

        let settings = Settings::new().unwrap();
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.reference.data_dir, Some(PathBuf::from("/srv/shiptalk/data")));

        let config = settings.provider.into_config();
        assert_eq!(config.host, "https://custom.openai.com");
        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.temperature, Some(0.2));
        assert_eq!(config.max_tokens, Some(4000));
        assert_eq!(config.timeout, Duration::from_secs(30));

        clean_env();
    }

    #[test]
    fn test_socket_addr_conversion() {
        let server_settings = ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 3000,
        };
        assert_eq!(server_settings.socket_addr().unwrap().to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn test_reference_data_dir_override() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(temp_dir.path().join("climate.json"), r#"{"zones": []}"#).unwrap();

        let settings = ReferenceSettings {
            data_dir: Some(temp_dir.path().to_path_buf()),
        };
        assert_eq!(settings.load().unwrap().names(), vec!["climate.json"]);
        assert!(ReferenceSettings::default().load().unwrap().get("compliance.json").is_some());
    }
}
