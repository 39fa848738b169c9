use pretty_assertions::assert_eq;
use propfile::{get_separator, NoSeparatorFound, Separator};

#[test]
fn test_equals_separator() {
    let (sep, idx) = get_separator("test.key=test.value").unwrap();
    assert_eq!(sep, Separator::Equals);
    assert_eq!(sep.as_char(), '=');
    assert_eq!(idx, 8);
}

#[test]
fn test_colon_separator() {
    let (sep, idx) = get_separator("test.key:test.value").unwrap();
    assert_eq!(sep, Separator::Colon);
    assert_eq!(idx, 8);
}

#[test]
fn test_space_separator() {
    let (sep, idx) = get_separator("test.key test.value").unwrap();
    assert_eq!(sep, Separator::Whitespace(' '));
    assert_eq!(sep.to_string(), " ");
    assert_eq!(idx, 8);
}

#[test]
fn test_tab_separator() {
    let (sep, idx) = get_separator("key\tvalue").unwrap();
    assert_eq!(sep, Separator::Whitespace('\t'));
    assert!(sep.is_whitespace());
    assert_eq!(idx, 3);
}

#[test]
fn test_first_separator_wins() {
    let (sep, idx) = get_separator("a:b=c d").unwrap();
    assert_eq!(sep, Separator::Colon);
    assert_eq!(idx, 1);

    let (sep, idx) = get_separator("ab c=d").unwrap();
    assert_eq!(sep, Separator::Whitespace(' '));
    assert_eq!(idx, 2);
}

#[test]
fn test_escaped_separators_are_skipped() {
    let (sep, idx) = get_separator(r"a\=b\:c\ d=value").unwrap();
    assert_eq!(sep, Separator::Equals);
    assert_eq!(idx, 10);
}

#[test]
fn test_escaped_backslash_does_not_escape_separator() {
    // `\\` is a literal backslash, so the `=` after it is live.
    let (sep, idx) = get_separator(r"a\\=b").unwrap();
    assert_eq!(sep, Separator::Equals);
    assert_eq!(idx, 3);
}

#[test]
fn test_odd_backslash_run_escapes() {
    let (sep, idx) = get_separator(r"a\\\=b:c").unwrap();
    assert_eq!(sep, Separator::Colon);
    assert_eq!(idx, 6);
}

#[test]
fn test_index_is_byte_offset() {
    let line = "schlüssel=wert";
    let (sep, idx) = get_separator(line).unwrap();
    assert_eq!(sep, Separator::Equals);
    assert_eq!(idx, 10);
    assert_eq!(&line[..idx], "schlüssel");
}

#[test]
fn test_no_separator() {
    let prop = "test.key,test.value";
    let err = get_separator(prop).unwrap_err();
    assert_eq!(err, NoSeparatorFound::new(prop));
    assert_eq!(err.to_string(), format!("no separator detected for property: {}", prop));
}

#[test]
fn test_no_separator_plain_word() {
    let err = get_separator("no-separator-here").unwrap_err();
    assert_eq!(err.line, "no-separator-here");
    assert_eq!(err.to_string(), "no separator detected for property: no-separator-here");
}

#[test]
fn test_empty_string() {
    let err = get_separator("").unwrap_err();
    assert_eq!(err.line, "");
    assert_eq!(err.to_string(), "no separator detected for property: ");
}

#[test]
fn test_only_escaped_separators() {
    let err = get_separator(r"a\=b\:c\ d").unwrap_err();
    assert_eq!(err.line, r"a\=b\:c\ d");
}
