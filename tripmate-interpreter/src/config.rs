use std::env;

const INCLUDE_SETTLED_VAR: &str = "TRIPMATE_INCLUDE_SETTLED";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be `true` or `false` (found '{value}')")]
    InvalidFlag { name: &'static str, value: String },
    #[error("{name} is not valid unicode")]
    NotUnicode { name: &'static str },
}

/// Runtime configuration read from `.env` and the process environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppConfig {
    /// Settle records already marked as settled as well.
    pub include_settled: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let include_settled = match env::var(INCLUDE_SETTLED_VAR) {
            Ok(value) => parse_flag(INCLUDE_SETTLED_VAR, &value)?,
            Err(env::VarError::NotPresent) => false,
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::NotUnicode {
                    name: INCLUDE_SETTLED_VAR,
                });
            }
        };

        Ok(Self { include_settled })
    }
}

fn parse_flag(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            name,
            value: value.to_string(),
        }),
    }
}
