use crate::types::is_separator;

/// Backslash-prefixes every unescaped separator character.
///
/// Already escaped sequences pass through untouched, so escaping on-disk text
/// a second time does not double the backslashes.
pub fn escape_separators(s: &str) -> String {
    escape_chars(s, false)
}

/// Removes the backslash in front of escaped separators.
///
/// Any other backslash sequence is kept verbatim.
pub fn unescape_separators(s: &str) -> String {
    unescape_chars(s, false)
}

/// Escapes a value for output.
///
/// Like [`escape_separators`], except that `\n` and `\r` are written as the
/// letter escapes so the value stays on one physical line.
pub fn escape_value(s: &str) -> String {
    escape_chars(s, true)
}

/// Escapes a key for output. A leading `#` or `!` is escaped as well, so the
/// line is not read back as a comment.
pub fn escape_key(s: &str) -> String {
    let escaped = escape_chars(s, true);
    if escaped.starts_with(['#', '!']) {
        format!("\\{}", escaped)
    } else {
        escaped
    }
}

/// Inverse of [`escape_key`] and [`escape_value`]: separators, `\#`, `\!`,
/// and the `\n`/`\r` letter escapes.
pub fn unescape_property(s: &str) -> String {
    unescape_chars(s, true)
}

fn escape_chars(s: &str, line_breaks: bool) -> String {
    let mut out = String::with_capacity(s.len() + s.len() / 8);
    let mut escaped = false;

    for c in s.chars() {
        if escaped {
            out.push(c);
            escaped = false;
        } else if c == '\\' {
            out.push(c);
            escaped = true;
        } else if line_breaks && c == '\n' {
            out.push_str("\\n");
        } else if line_breaks && c == '\r' {
            out.push_str("\\r");
        } else {
            if is_separator(c) {
                out.push('\\');
            }
            out.push(c);
        }
    }
    out
}

fn unescape_chars(s: &str, full: bool) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some(next) if is_separator(next) => out.push(next),
            Some(next @ ('#' | '!')) if full => out.push(next),
            Some('n') if full => out.push('\n'),
            Some('r') if full => out.push('\r'),
            Some(next) => {
                out.push('\\');
                out.push(next);
            }
            None => out.push('\\'),
        }
    }
    out
}
