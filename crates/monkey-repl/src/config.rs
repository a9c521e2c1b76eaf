//! Read-loop settings.

use std::path::PathBuf;
use std::str::FromStr;

/// Environment variable overriding the prompt.
pub const PROMPT_ENV: &str = "MONKEY_PROMPT";
/// Environment variable naming the line-editor history file.
pub const HISTORY_ENV: &str = "MONKEY_HISTORY";

/// How tokens are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `{Type:let Literal:let}` rows.
    #[default]
    Text,
    /// One JSON object per token.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{other}' (expected text or json)")),
        }
    }
}

/// Settings for a read-loop session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplConfig {
    pub prompt: String,
    pub format: OutputFormat,
    /// Where the interactive line editor keeps its history, if anywhere.
    pub history: Option<PathBuf>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: crate::PROMPT.to_string(),
            format: OutputFormat::default(),
            history: None,
        }
    }
}

impl ReplConfig {
    /// Defaults, overridden by `MONKEY_PROMPT` and `MONKEY_HISTORY`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`ReplConfig::from_env`] but reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(prompt) = lookup(PROMPT_ENV) {
            config.prompt = prompt;
        }
        config.history = lookup(HISTORY_ENV)
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);
        config
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}
