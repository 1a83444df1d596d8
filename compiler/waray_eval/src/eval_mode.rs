//! Evaluation modes for the Waray interpreter.
//!
//! The mode is a policy enum queried through methods, so call sites never
//! match on variants directly.

use std::fmt;
use std::str::FromStr;

/// Evaluation mode selected by the host.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum EvalMode {
    /// Run the program directly.
    #[default]
    Interpret,
    /// Emit source for another language. No emitter exists yet; programs
    /// run as in `Interpret`.
    Transpile,
}

/// Error parsing an [`EvalMode`] name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown mode `{0}` (expected `interpret` or `transpile`)")]
pub struct UnknownMode(pub String);

impl EvalMode {
    /// Maximum number of nested function calls before a run fails.
    #[inline]
    pub fn max_call_depth(self) -> usize {
        match self {
            Self::Interpret | Self::Transpile => 10_000,
        }
    }

    /// Whether this mode is meant to produce source text instead of output.
    #[inline]
    pub fn emits_source(self) -> bool {
        matches!(self, Self::Transpile)
    }
}

impl FromStr for EvalMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "interpret" => Ok(Self::Interpret),
            "transpile" => Ok(Self::Transpile),
            _ => Err(UnknownMode(s.to_string())),
        }
    }
}

impl fmt::Display for EvalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Interpret => "interpret",
            Self::Transpile => "transpile",
        })
    }
}

#[cfg(test)]
mod tests;
