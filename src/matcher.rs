//! Matching compiled LIKE patterns against raw values
//!
//! ASCII input is matched byte by byte. Anything else is decoded as UTF-8
//! with malformed sequences replaced by U+FFFD first, so `_` always consumes
//! one whole character and the matcher never sees ill-formed input.

use crate::{
    logging::log_trace,
    pattern::{LikePattern, Token},
};
use std::borrow::Cow;

/// A unit of input the token walk advances over
trait Unit: Copy {
    fn is(self, c: char) -> bool;
}

impl Unit for u8 {
    fn is(self, c: char) -> bool {
        c.is_ascii() && self == c as u8
    }
}

impl Unit for char {
    fn is(self, c: char) -> bool {
        self == c
    }
}

/// Returns true iff the whole of `value` matches the whole of `pattern`
pub fn matches(pattern: &LikePattern, value: &[u8]) -> bool {
    if value.is_ascii() {
        return walk(pattern.tokens(), value.iter().copied());
    }
    let repaired = String::from_utf8_lossy(value);
    if matches!(repaired, Cow::Owned(_)) {
        log_trace(&format!(
            "Replaced malformed UTF-8 in {}-byte value before matching",
            value.len()
        ));
    }
    walk(pattern.tokens(), repaired.chars())
}

/// Anchored wildcard walk.
///
/// Keeps one resume point: the token after the most recent `%` together with
/// the input position it was last tried at. On a mismatch the `%` absorbs one
/// more unit and the walk restarts from there. Earlier `%` tokens never need
/// revisiting, which bounds the work at tokens × input.
fn walk<T, I>(tokens: &[Token], mut input: I) -> bool
where
    T: Unit,
    I: Iterator<Item = T> + Clone,
{
    let mut position = 0;
    let mut resume: Option<(usize, I)> = None;

    loop {
        let advanced = match tokens.get(position) {
            Some(Token::AnySequence) => {
                position += 1;
                resume = Some((position, input.clone()));
                continue;
            }
            Some(Token::AnyChar) => input.next().is_some(),
            Some(Token::Literal(c)) => matches!(input.next(), Some(unit) if unit.is(*c)),
            None if input.clone().next().is_none() => return true,
            None => false,
        };

        if advanced {
            position += 1;
            continue;
        }

        match resume.as_mut() {
            Some((resume_position, resume_input)) => {
                if resume_input.next().is_none() {
                    return false;
                }
                position = *resume_position;
                input = resume_input.clone();
            }
            None => return false,
        }
    }
}
