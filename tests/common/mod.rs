#![allow(dead_code)]

use propfile::{parse, Error, Properties};

pub fn parse_ok(input: &str) -> Properties {
    parse(input).unwrap_or_else(|e| panic!("Failed to parse {:?}: {}", input, e))
}

pub fn assert_pair(input: &str, expected_key: &str, expected_value: &str) {
    let props = parse_ok(input);
    let prop = props
        .get(expected_key)
        .unwrap_or_else(|| panic!("Key {:?} missing, got keys {:?}", expected_key, props.keys().collect::<Vec<_>>()));
    assert_eq!(prop.key(), expected_key, "Key mismatch");
    assert_eq!(prop.value(), expected_value, "Value mismatch");
}

pub fn assert_keys(input: &str, expected: &[&str]) {
    let props = parse_ok(input);
    let keys: Vec<&str> = props.keys().collect();
    assert_eq!(keys, expected, "Keys mismatch for input {:?}", input);
}

pub fn assert_invalid(input: &str) -> Error {
    match parse(input) {
        Ok(props) => panic!("Expected error for input: {:?} but got {:?}", input, props),
        Err(e) => {
            assert!(e.is_invalid_property(), "Expected invalid property error, got {:?}", e);
            e
        }
    }
}
