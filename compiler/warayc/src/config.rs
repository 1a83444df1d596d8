//! Run configuration read from the process environment.

use waray_eval::{EvalMode, Lang, UnknownLang, UnknownMode};

/// Environment variable selecting the evaluation mode.
pub const MODE_VAR: &str = "WARAY_MODE";
/// Environment variable selecting the diagnostic language.
pub const LANG_VAR: &str = "WARAY_LANG";

/// Error building a [`RunConfig`].
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid WARAY_MODE: {0}")]
    Mode(#[from] UnknownMode),
    #[error("invalid WARAY_LANG: {0}")]
    Lang(#[from] UnknownLang),
}

/// How to run a program.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RunConfig {
    pub mode: EvalMode,
    pub lang: Lang,
}

impl RunConfig {
    /// Read `WARAY_MODE` and `WARAY_LANG`; unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`RunConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = RunConfig::default();
        if let Some(mode) = lookup(MODE_VAR) {
            config.mode = mode.parse()?;
        }
        if let Some(lang) = lookup(LANG_VAR) {
            config.lang = lang.parse()?;
        }
        Ok(config)
    }
}
