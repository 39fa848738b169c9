use std::borrow::Cow;
use std::fmt;

// ==================================================================================
//  Configuration
// ==================================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    /// Accept input that holds no properties (empty, blank or comments only).
    pub allow_empty: bool,
    /// Fail on a re-declared key instead of overwriting its value.
    pub reject_duplicate_keys: bool,
}

impl ParseOptions {
    #[inline]
    pub fn strict() -> Self {
        Self {
            allow_empty: false,
            reject_duplicate_keys: true,
        }
    }

    #[inline]
    pub fn lenient() -> Self {
        Self {
            allow_empty: true,
            reject_duplicate_keys: false,
        }
    }
}

// ==================================================================================
//  Separator
// ==================================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    Equals,           // =
    Colon,            // :
    Whitespace(char), // any char::is_whitespace
}

impl Separator {
    #[inline]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '=' => Some(Separator::Equals),
            ':' => Some(Separator::Colon),
            c if c.is_whitespace() => Some(Separator::Whitespace(c)),
            _ => None,
        }
    }

    #[inline]
    pub fn as_char(&self) -> char {
        match self {
            Separator::Equals => '=',
            Separator::Colon => ':',
            Separator::Whitespace(c) => *c,
        }
    }

    #[inline]
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Separator::Whitespace(_))
    }

    /// Width of the separator in bytes.
    #[inline]
    pub fn len_utf8(&self) -> usize {
        self.as_char().len_utf8()
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[inline]
pub(crate) fn is_separator(c: char) -> bool {
    Separator::from_char(c).is_some()
}

// ==================================================================================
//  Data Models
// ==================================================================================

/// A single declaration after comment stripping and continuation joining.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLine<'a> {
    pub text: Cow<'a, str>,
    /// 1-based number of the first physical line.
    pub line_number: usize,
}

impl<'a> LogicalLine<'a> {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Property {
    pub(crate) key: String,
    pub(crate) value: String,
}

impl Property {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }
}
