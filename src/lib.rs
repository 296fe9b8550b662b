//! SQL LIKE - pattern compiler and matcher for SQL `LIKE` predicates
//!
//! Patterns use `%` for any run of characters and `_` for exactly one
//! character, with an optional escape character that makes the following
//! wildcard (or itself) literal. A compiled [`LikePattern`] is anchored at
//! both ends and matches raw bytes; values that are not valid UTF-8 are
//! repaired before matching instead of being rejected.
//!
//! # Example
//!
//! ```
//! use sql_like::{Error, LikePattern};
//!
//! fn main() -> Result<(), Error> {
//!     let pattern = LikePattern::with_escape("100\\%%", "\\")?;
//!     assert!(pattern.matches(b"100% sure"));
//!     assert!(!pattern.matches(b"1000 sure"));
//!
//!     assert!(LikePattern::with_escape("x", "$$").is_err());
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod escape;
pub mod logging;
pub mod matcher;
pub mod pattern;
pub mod query;
pub mod value;

pub use error::{Error, Result};
pub use escape::EscapeSpec;
pub use logging::{Logger, LogLevel, init_default_logger, set_log_level, log_error, log_warn, log_info, log_debug, log_trace};
pub use pattern::{LikePattern, Token, like, like_pattern, like_pattern_with_escape};
pub use query::{LikePredicate, Row};
pub use value::Value;
