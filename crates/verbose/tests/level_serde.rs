//! Integration tests for `Level` serialization.
//!
//! Only built with the `serde` feature; levels travel as their lower-case
//! names so configuration files read naturally.

#![cfg(feature = "serde")]

use verbose::Level;

#[test]
fn levels_serialize_as_lowercase_names() {
    assert_eq!(serde_json::to_string(&Level::None).unwrap(), "\"none\"");
    assert_eq!(serde_json::to_string(&Level::Verbose).unwrap(), "\"verbose\"");
    assert_eq!(serde_json::to_string(&Level::Debug).unwrap(), "\"debug\"");
    assert_eq!(serde_json::to_string(&Level::Trace).unwrap(), "\"trace\"");
}

#[test]
fn levels_deserialize_from_names() {
    let level: Level = serde_json::from_str("\"debug\"").unwrap();
    assert_eq!(level, Level::Debug);

    let levels: Vec<Level> = serde_json::from_str(r#"["trace", "none"]"#).unwrap();
    assert_eq!(levels, [Level::Trace, Level::None]);
}

#[test]
fn unknown_names_are_rejected() {
    assert!(serde_json::from_str::<Level>("\"loud\"").is_err());
    assert!(serde_json::from_str::<Level>("2").is_err());
}
