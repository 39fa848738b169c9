use crate::error::NoSeparatorFound;
use crate::types::Separator;

/// Finds the first unescaped `=`, `:` or whitespace character of a logical line.
///
/// A character preceded by an odd run of backslashes is escaped and never
/// counts as a separator. The returned index is a byte offset into `line`.
pub fn get_separator(line: &str) -> Result<(Separator, usize), NoSeparatorFound> {
    let mut escaped = false;

    for (idx, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        if c == '\\' {
            escaped = true;
            continue;
        }
        if let Some(sep) = Separator::from_char(c) {
            return Ok((sep, idx));
        }
    }

    Err(NoSeparatorFound::new(line))
}
