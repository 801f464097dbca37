use super::*;

#[test]
fn normalize_splits_and_trims() {
    let set = normalize("Jokowi, Prabowo, Banjarmasin").expect("should accept three keywords");
    assert_eq!(set.as_slice(), ["Jokowi", "Prabowo", "Banjarmasin"]);
}

#[test]
fn normalize_single_keyword() {
    let set = normalize("  lagu viral  ").unwrap();
    assert_eq!(set.as_slice(), ["lagu viral"]);
    assert_eq!(set.len(), 1);
}

#[test]
fn normalize_accepts_exactly_five() {
    let set = normalize("a,b,c,d,e").unwrap();
    assert_eq!(set.len(), MAX_KEYWORDS);
}

#[test]
fn normalize_rejects_six() {
    let err = normalize("a,b,c,d,e,f").unwrap_err();
    assert_eq!(err, ValidationError::TooManyKeywords { count: 6, max: 5 });
}

#[test]
fn normalize_counts_empty_tokens_toward_limit() {
    let err = normalize("a,,,,,b").unwrap_err();
    assert!(matches!(err, ValidationError::TooManyKeywords { count: 6, .. }));
}

#[test]
fn normalize_rejects_empty_string() {
    assert_eq!(normalize("").unwrap_err(), ValidationError::EmptyInput);
}

#[test]
fn normalize_rejects_whitespace_only() {
    assert_eq!(normalize("   ").unwrap_err(), ValidationError::EmptyInput);
    assert_eq!(normalize("\t\n").unwrap_err(), ValidationError::EmptyInput);
}

#[test]
fn normalize_keeps_interior_empty_tokens() {
    let set = normalize("a,,b").unwrap();
    assert_eq!(set.as_slice(), ["a", "", "b"]);
    assert!(set.has_blank());
}

#[test]
fn normalize_lone_comma_is_two_blank_tokens() {
    let set = normalize(",").unwrap();
    assert_eq!(set.as_slice(), ["", ""]);
}

#[test]
fn normalize_preserves_order_and_duplicates() {
    let set = normalize("b, a, b").unwrap();
    assert_eq!(set.as_slice(), ["b", "a", "b"]);
    assert!(!set.has_blank());
}

#[test]
fn display_joins_with_comma_space() {
    let set = normalize("x ,y").unwrap();
    assert_eq!(set.to_string(), "x, y");
}

#[test]
fn serializes_as_plain_array() {
    let set = normalize("x, y").unwrap();
    let json = serde_json::to_value(&set).unwrap();
    assert_eq!(json, serde_json::json!(["x", "y"]));
}

#[test]
fn validation_messages_are_user_readable() {
    let too_many = normalize("1,2,3,4,5,6").unwrap_err().to_string();
    assert!(too_many.contains("at most 5"), "got: {too_many}");
    assert_eq!(
        ValidationError::EmptyInput.to_string(),
        "keyword input must not be empty"
    );
}
