use std::{
    fmt::{self, Display},
    path::PathBuf,
    str::FromStr,
};

use clap::Parser;

/// The default model to use for completions.
pub const DEFAULT_LLM: Model = Model::Gpt4o;
/// The default OpenAI-compatible API root.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
/// Sampling temperature sent with every completion request.
pub const TEMPERATURE: f32 = 0.2;
/// Root directory for saved drafts; each mode writes into its own subdirectory.
pub const DEFAULT_DRAFTS_DIR: &str = "drafts";
/// Directory holding the application log.
pub const DEFAULT_LOGS_DIR: &str = "logs";
/// Words that leave a mode and return to the menu.
pub const MODE_SENTINELS: [&str; 3] = ["back", "exit", "quit"];
/// Words that quit the program from the menu.
pub const MENU_SENTINELS: [&str; 2] = ["exit", "quit"];

/// Various models supported by Omneuro
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Model {
    Gpt4o,
    Gpt4oMini,
    Gpt41,
    O3Mini,
}

impl Model {
    pub fn all_models() -> Vec<String> {
        [Model::Gpt4o, Model::Gpt4oMini, Model::Gpt41, Model::O3Mini]
            .iter()
            .map(|m| m.to_string())
            .collect()
    }
}

impl FromStr for Model {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gpt-4o" | "gpt4o" => Ok(Model::Gpt4o),
            "gpt-4o-mini" | "gpt4o-mini" => Ok(Model::Gpt4oMini),
            "gpt-4.1" | "gpt4.1" => Ok(Model::Gpt41),
            "o3-mini" | "o3mini" => Ok(Model::O3Mini),
            _ => Err(format!(
                "{}. Choose from: {}.",
                s,
                Model::all_models().join(", ")
            )),
        }
    }
}

impl Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Model::Gpt4o => write!(f, "gpt-4o"),
            Model::Gpt4oMini => write!(f, "gpt-4o-mini"),
            Model::Gpt41 => write!(f, "gpt-4.1"),
            Model::O3Mini => write!(f, "o3-mini"),
        }
    }
}

/// Returns true when `input` is one of `sentinels`, ignoring case and surrounding whitespace.
pub fn is_sentinel(input: &str, sentinels: &[&str]) -> bool {
    let input = input.trim();
    sentinels.iter().any(|s| input.eq_ignore_ascii_case(s))
}

/// CLI for `omneuro`
///
/// Every option has an environment variable fallback, so the usual invocation
/// is just `omneuro`.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Model used for completions
    #[arg(short, long, env = "OMNEURO_MODEL", default_value_t = DEFAULT_LLM)]
    pub model: Model,
    /// Root of the OpenAI-compatible API
    #[arg(long, env = "OPENAI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
    /// Directory drafts are saved under
    #[arg(long, env = "OMNEURO_DRAFTS_DIR", default_value = DEFAULT_DRAFTS_DIR)]
    pub drafts_dir: PathBuf,
    /// Directory the log file is written to
    #[arg(long, env = "OMNEURO_LOGS_DIR", default_value = DEFAULT_LOGS_DIR)]
    pub logs_dir: PathBuf,
    /// Seconds to wait for a completion before giving up [default: wait forever]
    #[arg(long, env = "OMNEURO_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,
}
