use thiserror::Error;

/// A logical line contains no unescaped `=`, `:` or whitespace character.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no separator detected for property: {line}")]
pub struct NoSeparatorFound {
    pub line: String,
}

impl NoSeparatorFound {
    pub fn new(line: impl Into<String>) -> Self {
        Self { line: line.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid property at line {line_number}: {line}")]
    InvalidProperty {
        line: String,
        line_number: usize,
        #[source]
        source: Option<NoSeparatorFound>,
    },
    #[error("invalid properties: input contains no properties")]
    EmptyInput,
    #[error("duplicate key {key:?} at line {line_number}")]
    DuplicateKey { key: String, line_number: usize },
    #[error("Invalid UTF-8 at byte {offset}")]
    InvalidUtf8 { offset: usize },
    #[error("IO Error: {0}")]
    Io(String),
}

impl Error {
    /// Line of the input the error refers to, 0 when it has no location.
    pub fn line_number(&self) -> usize {
        match self {
            Error::InvalidProperty { line_number, .. } => *line_number,
            Error::DuplicateKey { line_number, .. } => *line_number,
            Error::EmptyInput | Error::InvalidUtf8 { .. } | Error::Io(_) => 0,
        }
    }

    /// True for every failure that means "this text is not a valid properties document".
    pub fn is_invalid_property(&self) -> bool {
        matches!(self, Error::InvalidProperty { .. } | Error::EmptyInput)
    }

    pub fn no_separator(&self) -> Option<&NoSeparatorFound> {
        match self {
            Error::InvalidProperty { source, .. } => source.as_ref(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
