//! Escape character handling for LIKE patterns

use crate::{logging::log_debug, Error, Result};

/// Escape configuration of a LIKE pattern
///
/// An escape character turns the following `%`, `_` or escape character
/// into a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EscapeSpec {
    /// No escape character; `%` and `_` are always wildcards
    #[default]
    Disabled,
    /// The given character escapes the one that follows it
    Char(char),
}

impl EscapeSpec {
    /// Build an escape spec from the string given in an `ESCAPE` clause.
    ///
    /// An empty string disables escaping. Anything longer than one character
    /// is rejected with [`Error::InvalidEscape`].
    pub fn parse(escape: &str) -> Result<Self> {
        let mut chars = escape.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Ok(EscapeSpec::Disabled),
            (Some(c), None) => Ok(EscapeSpec::Char(c)),
            (Some(_), Some(_)) => {
                log_debug(&format!("Rejecting escape string '{}'", escape));
                Err(Error::InvalidEscape(escape.to_string()))
            }
        }
    }

    /// The escape character, if escaping is enabled
    pub fn as_char(&self) -> Option<char> {
        match self {
            EscapeSpec::Disabled => None,
            EscapeSpec::Char(c) => Some(*c),
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, EscapeSpec::Char(_))
    }
}

impl From<char> for EscapeSpec {
    fn from(c: char) -> Self {
        EscapeSpec::Char(c)
    }
}

impl core::str::FromStr for EscapeSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        EscapeSpec::parse(s)
    }
}

impl core::fmt::Display for EscapeSpec {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            EscapeSpec::Disabled => write!(f, "<none>"),
            EscapeSpec::Char(c) => write!(f, "{}", c),
        }
    }
}
