mod common;
use common::assert_pair;
use propfile::{escape_separators, get_separator, unescape_separators};

// Every separator form, with and without padding
macro_rules! tests_for_separators {
    ($($name:ident => $sep:expr),*) => {
        paste::paste! {
            $(
                #[test]
                fn [<test_separator_ $name>]() {
                    let input = format!("key{}value", $sep);
                    assert_pair(&input, "key", "value");
                }

                #[test]
                fn [<test_separator_padded_ $name>]() {
                    let input = format!("key {} value", $sep);
                    assert_pair(&input, "key", "value");
                }

                #[test]
                fn [<test_separator_index_ $name>]() {
                    let input = format!("some.key{}value", $sep);
                    let (sep, idx) = get_separator(&input).unwrap();
                    assert_eq!(sep.to_string(), $sep);
                    assert_eq!(idx, 8);
                }
            )*
        }
    }
}

tests_for_separators!(
    equals => "=",
    colon => ":",
    space => " ",
    tab => "\t"
);

// Escaped separator characters inside keys
macro_rules! tests_for_escaped_key_chars {
    ($($name:ident => $ch:literal),*) => {
        paste::paste! {
            $(
                #[test]
                fn [<test_escaped_key_char_ $name>]() {
                    let key = format!("a{}b", $ch);
                    let input = format!("{}=v", escape_separators(&key));
                    assert_pair(&input, &key, "v");
                    assert_eq!(unescape_separators(&escape_separators(&key)), key);
                }
            )*
        }
    }
}

tests_for_escaped_key_chars!(
    equals => '=',
    colon => ':',
    space => ' ',
    tab => '\t',
    formfeed => '\u{0c}'
);

// Both comment markers, at any indent
macro_rules! tests_for_comment_markers {
    ($($name:ident => $marker:literal),*) => {
        paste::paste! {
            $(
                #[test]
                fn [<test_comment_ $name>]() {
                    for indent in ["", " ", "\t", "    "] {
                        let input = format!("{}{} ignored=yes\nkey=value", indent, $marker);
                        let props = propfile::parse(&input).unwrap();
                        assert_eq!(props.keys().collect::<Vec<_>>(), ["key"]);
                    }
                }
            )*
        }
    }
}

tests_for_comment_markers!(hash => '#', bang => '!');
