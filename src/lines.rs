use std::borrow::Cow;
use std::iter::Enumerate;
use std::str::Lines;

use crate::types::LogicalLine;

/// Turns raw text into logical lines.
///
/// Comment lines (`#` or `!` as first non-whitespace character) and blank
/// lines are dropped. A line ending in an unescaped backslash is joined with
/// the following physical line; the continuation's leading whitespace
/// collapses into at most one space. Lines that need no joining are borrowed
/// from the input.
pub struct LineAssembler<'a> {
    lines: Enumerate<Lines<'a>>,
}

impl<'a> LineAssembler<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            lines: input.lines().enumerate(),
        }
    }

    fn join_continuation(&mut self, first: &str) -> String {
        let mut text = String::with_capacity(first.len() * 2);
        text.push_str(strip_backslash(first));

        for (_, raw) in self.lines.by_ref() {
            let line = raw.trim_start();
            let had_indent = line.len() != raw.len();
            let needs_space = !text.is_empty() && !text.ends_with(char::is_whitespace);
            if had_indent && !line.is_empty() && needs_space {
                text.push(' ');
            }
            if ends_with_continuation(line) {
                text.push_str(strip_backslash(line));
            } else {
                text.push_str(line);
                break;
            }
        }
        text
    }
}

impl<'a> Iterator for LineAssembler<'a> {
    type Item = LogicalLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (idx, raw) = self.lines.next()?;
            let line = raw.trim_start();

            if line.is_empty() || is_comment(line) {
                continue;
            }

            let text = if ends_with_continuation(line) {
                let joined = self.join_continuation(line);
                if joined.is_empty() {
                    continue;
                }
                Cow::Owned(joined)
            } else {
                Cow::Borrowed(line)
            };

            log::trace!("logical line {}: {:?}", idx + 1, text);
            return Some(LogicalLine {
                text,
                line_number: idx + 1,
            });
        }
    }
}

#[inline]
fn is_comment(line: &str) -> bool {
    line.starts_with(['#', '!'])
}

/// An odd run of trailing backslashes marks a continuation; an even run is
/// a sequence of escaped backslashes.
#[inline]
fn ends_with_continuation(line: &str) -> bool {
    let trailing = line.bytes().rev().take_while(|&b| b == b'\\').count();
    trailing % 2 == 1
}

#[inline]
fn strip_backslash(line: &str) -> &str {
    &line[..line.len() - 1]
}
