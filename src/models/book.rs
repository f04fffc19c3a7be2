//! Book model

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Book record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// Unique identifier, assigned at creation and never reused
    pub id: i64,
    pub title: String,
    pub author: String,
}

/// Create book request
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateBook {
    pub title: Option<String>,
    pub author: Option<String>,
}

/// Update book request
///
/// Empty strings count as "not provided" and leave the stored value untouched.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateBook {
    pub title: Option<String>,
    pub author: Option<String>,
}

impl CreateBook {
    /// Returns `(title, author)` when both are present and non-empty
    pub fn required_fields(&self) -> Option<(&str, &str)> {
        match (non_empty(&self.title), non_empty(&self.author)) {
            (Some(title), Some(author)) => Some((title, author)),
            _ => None,
        }
    }
}

impl UpdateBook {
    pub fn title(&self) -> Option<&str> {
        non_empty(&self.title)
    }

    pub fn author(&self) -> Option<&str> {
        non_empty(&self.author)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Book identifier taken from a request path.
///
/// Parsing is lenient: leading whitespace and an optional sign are accepted, then the
/// leading run of decimal digits is used and anything after it is ignored ("12abc" is 12).
/// A `0x`/`0X` prefix switches to hexadecimal digits ("0x1f" is 31).
/// Without leading digits the id is `NaN` and matches no book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookId {
    Number(i64),
    /// Digit run too large for `i64`, kept as written
    Overflow(String),
    NaN,
}

impl BookId {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim_start();
        let (negative, rest) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        let (radix, prefix, rest) = match rest.get(..2) {
            Some("0x") | Some("0X") => (16, &rest[..2], &rest[2..]),
            _ => (10, "", rest),
        };

        let digits_end = rest
            .find(|c: char| !c.is_digit(radix))
            .unwrap_or(rest.len());
        let digits = &rest[..digits_end];
        if digits.is_empty() {
            return BookId::NaN;
        }

        let sign = if negative { "-" } else { "" };
        match i64::from_str_radix(&format!("{}{}", sign, digits), radix) {
            Ok(n) => BookId::Number(n),
            Err(_) => BookId::Overflow(format!("{}{}{}", sign, prefix, digits)),
        }
    }

    /// Numeric value usable for a store lookup
    pub fn value(&self) -> Option<i64> {
        match self {
            BookId::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<i64> for BookId {
    fn from(id: i64) -> Self {
        BookId::Number(id)
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookId::Number(n) => write!(f, "{}", n),
            BookId::Overflow(digits) => f.write_str(digits),
            BookId::NaN => f.write_str("NaN"),
        }
    }
}
