//! LIKE predicates parsed from SQL text and evaluated against rows

use crate::{
    escape::EscapeSpec,
    logging::log_debug,
    pattern::LikePattern,
    Error, Result, Value,
};
use sqlparser::ast::{Expr, UnaryOperator, Value as SqlValue, ValueWithSpan};
use sqlparser::dialect::SQLiteDialect;
use sqlparser::parser::Parser;
use sqlparser::tokenizer::Token;
use std::collections::HashMap;

/// A row of named values
pub type Row = HashMap<String, Value>;

/// `column [NOT] LIKE 'pattern' [ESCAPE 'c']` with the pattern compiled once
#[derive(Debug, Clone, PartialEq)]
pub struct LikePredicate {
    /// Column the pattern is applied to
    pub column: String,
    pub pattern: LikePattern,
    pub negated: bool,
}

impl LikePredicate {
    pub fn new(column: &str, pattern: LikePattern, negated: bool) -> Self {
        LikePredicate {
            column: column.to_string(),
            pattern,
            negated,
        }
    }

    /// Parse a single LIKE predicate such as `name LIKE 'a%' ESCAPE '\'`
    pub fn parse(sql: &str) -> Result<Self> {
        let dialect = SQLiteDialect {};
        let mut parser = Parser::new(&dialect)
            .try_with_sql(sql)
            .map_err(|e| Error::SqlParse(e.to_string()))?;
        let expr = parser
            .parse_expr()
            .map_err(|e| Error::SqlParse(e.to_string()))?;

        let trailing = parser.peek_token();
        if trailing.token != Token::EOF {
            return Err(Error::QueryError(format!(
                "Unexpected input after predicate: {}",
                trailing.token
            )));
        }

        let predicate = Self::from_expr(&expr, false)?;
        log_debug(&format!("Parsed LIKE predicate: {}", predicate));
        Ok(predicate)
    }

    fn from_expr(expr: &Expr, negated: bool) -> Result<Self> {
        match expr {
            Expr::Nested(inner) => Self::from_expr(inner, negated),
            Expr::UnaryOp {
                op: UnaryOperator::Not,
                expr: inner,
            } => Self::from_expr(inner, !negated),
            Expr::Like {
                negated: like_negated,
                expr: target,
                pattern,
                escape_char,
                ..
            } => {
                let column = column_name(target)?;
                let pattern_text = match pattern.as_ref() {
                    Expr::Value(ValueWithSpan {
                        value: SqlValue::SingleQuotedString(text),
                        ..
                    }) => text.clone(),
                    other => {
                        return Err(Error::QueryError(format!(
                            "LIKE pattern must be a string literal, got: {}",
                            other
                        )))
                    }
                };
                let escape = match escape_char {
                    Some(escape) => {
                        let rendered = escape.to_string();
                        let text = string_literal(&rendered).ok_or_else(|| {
                            Error::QueryError(format!("ESCAPE must be a string literal, got: {}", rendered))
                        })?;
                        EscapeSpec::parse(&text)?
                    }
                    None => EscapeSpec::Disabled,
                };
                Ok(LikePredicate {
                    column,
                    pattern: LikePattern::compile(&pattern_text, escape),
                    negated: negated != *like_negated,
                })
            }
            Expr::ILike { .. } => Err(Error::QueryError("ILIKE is not supported".to_string())),
            other => Err(Error::QueryError(format!("Expected a LIKE predicate, got: {}", other))),
        }
    }

    /// Evaluate against a row. `None` means unknown: the column is missing or NULL.
    pub fn evaluate(&self, row: &Row) -> Option<bool> {
        let value = row.get(&self.column)?;
        value.like(&self.pattern).map(|matched| matched != self.negated)
    }

    /// Keep the rows for which the predicate is true
    pub fn filter(&self, rows: Vec<Row>) -> Vec<Row> {
        rows.into_iter()
            .filter(|row| self.evaluate(row) == Some(true))
            .collect()
    }
}

impl core::fmt::Display for LikePredicate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.column)?;
        if self.negated {
            write!(f, " NOT")?;
        }
        write!(f, " LIKE '{}'", self.pattern.source().replace('\'', "''"))?;
        if let Some(c) = self.pattern.escape().as_char() {
            let escape = c.to_string().replace('\'', "''");
            write!(f, " ESCAPE '{}'", escape)?;
        }
        Ok(())
    }
}

fn column_name(expr: &Expr) -> Result<String> {
    match expr {
        Expr::Identifier(ident) => Ok(ident.value.clone()),
        Expr::CompoundIdentifier(parts) => parts
            .last()
            .map(|ident| ident.value.clone())
            .ok_or_else(|| Error::QueryError("Empty column name".to_string())),
        Expr::Nested(inner) => column_name(inner),
        other => Err(Error::QueryError(format!("LIKE target must be a column, got: {}", other))),
    }
}

/// Unquote the rendering of an `ESCAPE` operand; `None` unless it is a
/// single-quoted string
fn string_literal(rendered: &str) -> Option<String> {
    let inner = rendered
        .strip_prefix('\'')
        .and_then(|rest| rest.strip_suffix('\''))?;
    Some(inner.replace("''", "'"))
}
