use std::fs;
use std::io::Read;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::{ParseOptions, Properties};

#[derive(Debug)]
enum Source<'a> {
    Str(&'a str),
    Bytes(&'a [u8]),
}

/// Builder for parsing properties from borrowed input.
pub struct PropfileBuilder<'a> {
    source: Source<'a>,
    options: ParseOptions,
}

impl<'a> PropfileBuilder<'a> {
    pub fn new(source_str: &'a str) -> Self {
        Self {
            source: Source::Str(source_str),
            options: ParseOptions::default(),
        }
    }

    pub fn from_bytes(bytes: &'a [u8]) -> Self {
        Self {
            source: Source::Bytes(bytes),
            options: ParseOptions::default(),
        }
    }

    /// Accept documents without any property
    pub fn allow_empty(mut self) -> Self {
        self.options.allow_empty = true;
        self
    }

    /// Fail on re-declared keys
    pub fn reject_duplicate_keys(mut self) -> Self {
        self.options.reject_duplicate_keys = true;
        self
    }

    pub fn options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    pub fn parse(self) -> Result<Properties> {
        let input = match self.source {
            Source::Str(s) => s,
            Source::Bytes(b) => std::str::from_utf8(b).map_err(|e| Error::InvalidUtf8 {
                offset: e.valid_up_to(),
            })?,
        };
        crate::parse_with_options(input, self.options)
    }
}

/// Builder for parsing properties from owned sources (files, readers)
pub struct OwnedPropfileBuilder {
    path: Option<PathBuf>,
    reader: Option<Box<dyn Read>>,
    options: ParseOptions,
}

impl OwnedPropfileBuilder {
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            reader: None,
            options: ParseOptions::default(),
        }
    }

    pub fn from_reader(reader: impl Read + 'static) -> Self {
        Self {
            path: None,
            reader: Some(Box::new(reader)),
            options: ParseOptions::default(),
        }
    }

    /// Accept documents without any property
    pub fn allow_empty(mut self) -> Self {
        self.options.allow_empty = true;
        self
    }

    /// Fail on re-declared keys
    pub fn reject_duplicate_keys(mut self) -> Self {
        self.options.reject_duplicate_keys = true;
        self
    }

    pub fn options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    pub fn parse(self) -> Result<Properties> {
        let content = if let Some(path) = self.path {
            log::debug!("reading properties from {}", path.display());
            fs::read_to_string(&path)
                .map_err(|e| Error::Io(format!("Failed to read file {}: {}", path.display(), e)))?
        } else if let Some(mut reader) = self.reader {
            let mut s = String::new();
            reader
                .read_to_string(&mut s)
                .map_err(|e| Error::Io(format!("Failed to read from reader: {}", e)))?;
            s
        } else {
            return Err(Error::Io("No source provided".into()));
        };

        crate::parse_with_options(&content, self.options)
    }
}

/// Main entry point for configuring and running a parse
pub struct Propfile;

impl Propfile {
    /// Create a builder from a string slice
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(input: &str) -> PropfileBuilder<'_> {
        PropfileBuilder::new(input)
    }

    /// Create a builder from bytes, validated as UTF-8
    pub fn from_bytes(input: &[u8]) -> PropfileBuilder<'_> {
        PropfileBuilder::from_bytes(input)
    }

    /// Create a builder from file path
    pub fn from_file(path: impl Into<PathBuf>) -> OwnedPropfileBuilder {
        OwnedPropfileBuilder::from_file(path)
    }

    /// Create builder from reader
    pub fn from_reader(reader: impl Read + 'static) -> OwnedPropfileBuilder {
        OwnedPropfileBuilder::from_reader(reader)
    }
}
