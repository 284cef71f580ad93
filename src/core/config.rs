use std::{env, path::PathBuf};

use thiserror::Error;

use crate::storage::is_valid_slot_key;

const DEFAULT_DATA_KEY: &str = "students_lms_data_v1";
const DEFAULT_SESSION_KEY: &str = "students_lms_currentUserId";
const DEFAULT_DATA_DIR: &str = ".lms-data";

#[derive(Debug, Clone)]
pub struct Settings {
    runtime: RuntimeSettings,
    storage: StorageSettings,
    telemetry: TelemetrySettings,
}

#[derive(Debug, Clone)]
pub struct RuntimeSettings {
    pub environment: Environment,
    pub strict_config: bool,
}

#[derive(Debug, Clone)]
pub struct StorageSettings {
    pub backend: StorageBackend,
    pub data_dir: PathBuf,
    pub data_key: String,
    pub session_key: String,
}

#[derive(Debug, Clone)]
pub struct TelemetrySettings {
    pub log_level: String,
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
    Staging,
    Test,
}

impl Environment {
    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
            Environment::Staging => "staging",
            Environment::Test => "test",
        }
    }

    fn is_production(self) -> bool {
        matches!(self, Environment::Production)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    File,
    Memory,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: String },
    #[error("data and session slots must use different keys (both are {0:?})")]
    SharedSlotKey(String),
    #[error("in-memory storage is not allowed with strict configuration")]
    EphemeralStorage,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            parse_environment(env_optional("LMS_ENV").or_else(|| env_optional("ENVIRONMENT")));
        let strict_config =
            env_optional("LMS_STRICT_CONFIG").map(|value| parse_bool(&value)).unwrap_or(false)
                || environment.is_production();

        let backend = parse_backend(env_or_default("LMS_STORAGE_BACKEND", "file"))?;
        let data_dir = PathBuf::from(env_or_default("LMS_DATA_DIR", DEFAULT_DATA_DIR));
        let data_key = env_or_default("LMS_DATA_KEY", DEFAULT_DATA_KEY);
        let session_key = env_or_default("LMS_SESSION_KEY", DEFAULT_SESSION_KEY);

        let log_level = env_or_default("LMS_LOG_LEVEL", "info");
        let json = env_optional("LMS_LOG_JSON").map(|value| parse_bool(&value)).unwrap_or(false);

        let settings = Self {
            runtime: RuntimeSettings { environment, strict_config },
            storage: StorageSettings { backend, data_dir, data_key, session_key },
            telemetry: TelemetrySettings { log_level, json },
        };

        settings.validate()?;

        Ok(settings)
    }

    /// Ephemeral settings with default slot keys, independent of the environment.
    pub fn in_memory() -> Self {
        Self {
            runtime: RuntimeSettings { environment: Environment::Test, strict_config: false },
            storage: StorageSettings {
                backend: StorageBackend::Memory,
                data_dir: PathBuf::from(DEFAULT_DATA_DIR),
                data_key: DEFAULT_DATA_KEY.to_string(),
                session_key: DEFAULT_SESSION_KEY.to_string(),
            },
            telemetry: TelemetrySettings { log_level: "info".to_string(), json: false },
        }
    }

    pub fn runtime(&self) -> &RuntimeSettings {
        &self.runtime
    }

    pub fn storage(&self) -> &StorageSettings {
        &self.storage
    }

    pub fn telemetry(&self) -> &TelemetrySettings {
        &self.telemetry
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (field, key) in
            [("LMS_DATA_KEY", &self.storage.data_key), ("LMS_SESSION_KEY", &self.storage.session_key)]
        {
            if !is_valid_slot_key(key) {
                return Err(ConfigError::InvalidValue { field, value: key.clone() });
            }
        }

        if self.storage.data_key == self.storage.session_key {
            return Err(ConfigError::SharedSlotKey(self.storage.data_key.clone()));
        }

        if !(self.runtime.strict_config || self.runtime.environment.is_production()) {
            return Ok(());
        }

        if self.storage.backend == StorageBackend::Memory {
            return Err(ConfigError::EphemeralStorage);
        }

        Ok(())
    }
}

fn env_optional(key: &str) -> Option<String> {
    env::var(key).ok().map(|value| value.trim().to_string()).filter(|value| !value.is_empty())
}

fn env_or_default(key: &str, default: &str) -> String {
    env_optional(key).unwrap_or_else(|| default.to_string())
}

fn parse_bool(value: &str) -> bool {
    matches!(value, "1" | "true" | "TRUE" | "yes" | "YES" | "on" | "ON")
}

fn parse_environment(value: Option<String>) -> Environment {
    match value.as_deref().map(|val| val.to_lowercase()) {
        Some(ref val) if val == "production" || val == "prod" => Environment::Production,
        Some(ref val) if val == "staging" => Environment::Staging,
        Some(ref val) if val == "test" || val == "testing" => Environment::Test,
        _ => Environment::Development,
    }
}

fn parse_backend(value: String) -> Result<StorageBackend, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "file" | "fs" => Ok(StorageBackend::File),
        "memory" | "mem" => Ok(StorageBackend::Memory),
        _ => Err(ConfigError::InvalidValue { field: "LMS_STORAGE_BACKEND", value }),
    }
}
