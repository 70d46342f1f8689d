use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        RaceError::invalid_domain("x")
            .to_string()
            .contains("invalid domain:")
    );
    assert!(
        RaceError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        RaceError::Serde("x".to_owned())
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn duplicate_key_names_key_and_frame() {
    let msg = RaceError::duplicate_key("USA", "frame 3").to_string();
    assert!(msg.contains("\"USA\""));
    assert!(msg.contains("frame 3"));
}

#[test]
fn serde_json_errors_convert() {
    let bad = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = RaceError::from(bad);
    assert!(matches!(err, RaceError::Serde(_)));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = RaceError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
