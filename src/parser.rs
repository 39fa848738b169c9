use crate::error::{Error, Result};
use crate::escape::unescape_property;
use crate::lines::LineAssembler;
use crate::properties::Properties;
use crate::separator::get_separator;
use crate::types::{LogicalLine, ParseOptions, Property, Separator};

pub struct Parser<'a> {
    lines: LineAssembler<'a>,
    options: ParseOptions,
}

impl<'a> Parser<'a> {
    #[inline(always)]
    pub fn new(input: &'a str) -> Self {
        Self::with_options(input, ParseOptions::default())
    }

    #[inline(always)]
    pub fn with_options(input: &'a str, options: ParseOptions) -> Self {
        Self {
            lines: LineAssembler::new(input),
            options,
        }
    }

    /// Parses the whole document. The first malformed line aborts the parse.
    pub fn parse(self) -> Result<Properties> {
        let Parser { lines, options } = self;
        let mut properties = Properties::new();

        for line in lines {
            let property = parse_line(&line)?;

            if properties.contains_key(property.key()) {
                if options.reject_duplicate_keys {
                    return Err(Error::DuplicateKey {
                        key: property.key,
                        line_number: line.line_number,
                    });
                }
                log::warn!(
                    "line {}: key {:?} redeclared, overwriting previous value",
                    line.line_number,
                    property.key()
                );
            }
            properties.insert(property.key, property.value);
        }

        if properties.is_empty() && !options.allow_empty {
            return Err(Error::EmptyInput);
        }

        log::debug!("parsed {} properties", properties.len());
        Ok(properties)
    }

    /// Streams properties in document order, duplicates included.
    pub fn iter(self) -> PropertyIterator<'a> {
        PropertyIterator { lines: self.lines }
    }
}

/// Splits one logical line into an unescaped key/value pair.
pub fn parse_line(line: &LogicalLine<'_>) -> Result<Property> {
    let text = line.as_str();
    let (separator, idx) = get_separator(text).map_err(|e| Error::InvalidProperty {
        line: text.to_string(),
        line_number: line.line_number,
        source: Some(e),
    })?;

    if idx == 0 {
        return Err(Error::InvalidProperty {
            line: text.to_string(),
            line_number: line.line_number,
            source: None,
        });
    }

    let raw_key = &text[..idx];
    let raw_value = value_after(&text[idx + separator.len_utf8()..], separator);

    Ok(Property::new(
        unescape_property(raw_key),
        unescape_property(raw_value),
    ))
}

/// Drops the whitespace following the separator. A whitespace separator may
/// be followed by one `=` or `:`, as in `key = value`.
#[inline]
fn value_after(rest: &str, separator: Separator) -> &str {
    let rest = rest.trim_start();
    if separator.is_whitespace() {
        if let Some(stripped) = rest.strip_prefix(['=', ':']) {
            return stripped.trim_start();
        }
    }
    rest
}

pub struct PropertyIterator<'a> {
    lines: LineAssembler<'a>,
}

impl<'a> Iterator for PropertyIterator<'a> {
    type Item = Result<Property>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines.next().map(|line| parse_line(&line))
    }
}
