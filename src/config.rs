//! Process-wide settings, resolved once at startup and handed to whoever needs them.

use std::{env, path::PathBuf, time::Duration};

use crate::cli::{
    Args, Model, DEFAULT_BASE_URL, DEFAULT_DRAFTS_DIR, DEFAULT_LLM, DEFAULT_LOGS_DIR, TEMPERATURE,
};
use crate::errors::OmneuroError;

/// Environment variable holding the API credential.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Not `Debug`, so the key never ends up in a log line.
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub model: Model,
    pub base_url: String,
    /// `None` waits for the service indefinitely.
    pub timeout: Option<Duration>,
    pub temperature: f32,
    pub drafts_dir: PathBuf,
    pub logs_dir: PathBuf,
}

impl Config {
    /// Build the configuration from parsed arguments and the environment.
    ///
    /// A `.env` file in the working directory is loaded first, without
    /// overriding variables that are already set. A missing or blank
    /// `OPENAI_API_KEY` is fatal.
    pub fn from_args(args: &Args) -> Result<Self, OmneuroError> {
        dotenvy::dotenv().ok();
        let api_key = env::var(API_KEY_VAR).unwrap_or_default();
        Self::new(api_key, args)
    }

    fn new(api_key: String, args: &Args) -> Result<Self, OmneuroError> {
        let api_key = api_key.trim().to_string();
        if api_key.is_empty() {
            return Err(OmneuroError::MissingApiKey);
        }
        Ok(Config {
            api_key,
            model: args.model,
            base_url: args.base_url.trim_end_matches('/').to_string(),
            timeout: args.timeout_secs.map(Duration::from_secs),
            temperature: TEMPERATURE,
            drafts_dir: args.drafts_dir.clone(),
            logs_dir: args.logs_dir.clone(),
        })
    }

    /// Configuration with the default model and directories and the given key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Config {
            api_key: api_key.into(),
            model: DEFAULT_LLM,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            temperature: TEMPERATURE,
            drafts_dir: PathBuf::from(DEFAULT_DRAFTS_DIR),
            logs_dir: PathBuf::from(DEFAULT_LOGS_DIR),
        }
    }
}
