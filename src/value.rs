//! SQL values and LIKE evaluation over them

use crate::pattern::LikePattern;
use std::borrow::Cow;

/// A SQL value as seen by a LIKE predicate
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// NULL value
    Null,
    /// Integer value
    Integer(i64),
    /// Floating point value
    Real(f64),
    /// Text value
    Text(String),
    /// BLOB value; may hold bytes that are not valid UTF-8
    Blob(Vec<u8>),
}

impl Value {
    /// Returns true if this value is NULL
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The bytes a LIKE pattern is matched against.
    ///
    /// Numbers are matched on their decimal rendering; NULL has no bytes.
    pub fn like_bytes(&self) -> Option<Cow<'_, [u8]>> {
        match self {
            Value::Null => None,
            Value::Integer(i) => Some(Cow::Owned(i.to_string().into_bytes())),
            Value::Real(r) => Some(Cow::Owned(real_to_text(*r).into_bytes())),
            Value::Text(s) => Some(Cow::Borrowed(s.as_bytes())),
            Value::Blob(b) => Some(Cow::Borrowed(b.as_slice())),
        }
    }

    /// Three-valued `self LIKE pattern`: `None` when the value is NULL
    pub fn like(&self, pattern: &LikePattern) -> Option<bool> {
        self.like_bytes().map(|bytes| pattern.matches(&bytes))
    }
}

/// Render a real the way SQLite converts REAL to TEXT: 15 significant
/// digits, a fractional part always present, exponent form when the decimal
/// exponent is below -4 or at least 15.
pub fn real_to_text(r: f64) -> String {
    if r.is_nan() {
        return "NaN".to_string();
    }
    if r.is_infinite() {
        return if r > 0.0 { "Inf".to_string() } else { "-Inf".to_string() };
    }

    let scientific = format!("{:.14e}", r);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };
    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };
    let digits: String = mantissa.chars().filter(|c| c.is_ascii_digit()).collect();
    let digits = digits.trim_end_matches('0');
    let digits = if digits.is_empty() { "0" } else { digits };

    if !(-4..15).contains(&exponent) {
        let fraction = if digits.len() > 1 { &digits[1..] } else { "0" };
        let exponent_sign = if exponent < 0 { '-' } else { '+' };
        return format!(
            "{}{}.{}e{}{:02}",
            sign,
            &digits[..1],
            fraction,
            exponent_sign,
            exponent.unsigned_abs()
        );
    }

    if exponent < 0 {
        let zeros = "0".repeat((-exponent - 1) as usize);
        return format!("{}0.{}{}", sign, zeros, digits);
    }

    let integer_len = exponent as usize + 1;
    if digits.len() > integer_len {
        format!("{}{}.{}", sign, &digits[..integer_len], &digits[integer_len..])
    } else {
        let padding = "0".repeat(integer_len - digits.len());
        format!("{}{}{}.0", sign, digits, padding)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::Blob(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(r: f64) -> Self {
        Value::Real(r)
    }
}

impl core::fmt::Display for Value {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Real(r) => write!(f, "{}", r),
            Value::Text(s) => write!(f, "{}", s),
            Value::Blob(b) => write!(f, "BLOB({} bytes)", b.len()),
        }
    }
}
