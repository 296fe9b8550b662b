//! LIKE pattern compilation
//!
//! A pattern is scanned once, left to right, and turned into a list of
//! [`Token`]s. The token list is implicitly anchored at both ends: a value
//! matches only when the whole value is consumed by the whole token list.

use crate::{escape::EscapeSpec, logging::log_debug, matcher, Result};

/// Characters that carry meaning in the rendered pattern text and are
/// therefore written with a leading backslash when they occur literally.
const RESERVED: [char; 5] = ['\\', '^', '$', '.', '*'];

/// One element of a compiled LIKE pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// Exactly this character
    Literal(char),
    /// Any single character (`_`)
    AnyChar,
    /// Any run of zero or more characters (`%`)
    AnySequence,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Normal,
    Escaped,
}

/// A compiled, immutable LIKE pattern
///
/// Compiling is cheap but not free; callers evaluating the same pattern
/// against many values should compile once and reuse the result. The type
/// is `Send + Sync` and can be shared between threads without locking.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LikePattern {
    source: String,
    escape: EscapeSpec,
    tokens: Vec<Token>,
}

impl LikePattern {
    /// Compile `pattern` with escaping disabled
    pub fn new(pattern: &str) -> Self {
        Self::compile(pattern, EscapeSpec::Disabled)
    }

    /// Compile `pattern` using the escape string of an `ESCAPE` clause.
    ///
    /// Fails with [`crate::Error::InvalidEscape`] when `escape` has more than
    /// one character.
    pub fn with_escape(pattern: &str, escape: &str) -> Result<Self> {
        let escape = EscapeSpec::parse(escape)?;
        Ok(Self::compile(pattern, escape))
    }

    /// Compile `pattern` with an already validated escape spec
    pub fn compile(pattern: &str, escape: EscapeSpec) -> Self {
        let tokens = tokenize(pattern, escape);
        let compiled = LikePattern {
            source: pattern.to_string(),
            escape,
            tokens,
        };
        log_debug(&format!(
            "Compiled LIKE pattern '{}' (escape {}) as {}",
            compiled.source, compiled.escape, compiled
        ));
        compiled
    }

    /// The pattern text this was compiled from
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn escape(&self) -> EscapeSpec {
        self.escape
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Test `value` against this pattern. Malformed UTF-8 is tolerated.
    pub fn matches(&self, value: &[u8]) -> bool {
        matcher::matches(self, value)
    }

    pub fn matches_str(&self, value: &str) -> bool {
        matcher::matches(self, value.as_bytes())
    }
}

/// Renders the anchored pattern text, e.g. `a%b_` becomes `^a.*b.$`.
impl core::fmt::Display for LikePattern {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "^")?;
        for token in &self.tokens {
            match token {
                Token::AnySequence => write!(f, ".*")?,
                Token::AnyChar => write!(f, ".")?,
                Token::Literal(c) if RESERVED.contains(c) => write!(f, "\\{}", c)?,
                Token::Literal(c) => write!(f, "{}", c)?,
            }
        }
        write!(f, "$")
    }
}

/// Single pass over the pattern with an escape flag.
///
/// A dangling escape character at the end of the pattern is dropped.
fn tokenize(pattern: &str, escape: EscapeSpec) -> Vec<Token> {
    let escape_char = escape.as_char();
    let mut tokens = Vec::with_capacity(pattern.len());
    let mut state = ScanState::Normal;

    for c in pattern.chars() {
        if state == ScanState::Normal && Some(c) == escape_char {
            state = ScanState::Escaped;
            continue;
        }
        let token = match (c, state) {
            ('%', ScanState::Normal) => Token::AnySequence,
            ('_', ScanState::Normal) => Token::AnyChar,
            (c, _) => Token::Literal(c),
        };
        tokens.push(token);
        state = ScanState::Normal;
    }

    tokens
}

/// Compile a pattern with escaping disabled
pub fn like_pattern(pattern: &str) -> LikePattern {
    LikePattern::new(pattern)
}

/// Compile a pattern with the escape string of an `ESCAPE` clause
pub fn like_pattern_with_escape(pattern: &str, escape: &str) -> Result<LikePattern> {
    LikePattern::with_escape(pattern, escape)
}

/// SQL `value LIKE pattern` over raw bytes
pub fn like(value: &[u8], pattern: &LikePattern) -> bool {
    pattern.matches(value)
}
