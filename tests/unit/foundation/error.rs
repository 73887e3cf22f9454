use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ProtovizError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        ProtovizError::sequencer("x")
            .to_string()
            .contains("sequencer error:")
    );
    assert!(ProtovizError::render("x").to_string().contains("render error:"));
    assert!(ProtovizError::export("x").to_string().contains("export error:"));
    assert!(
        ProtovizError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn unknown_protocol_names_the_id() {
    let err = ProtovizError::unknown_protocol("not-a-protocol");
    assert_eq!(err.to_string(), "unknown protocol 'not-a-protocol'");
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ProtovizError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn serde_json_errors_convert() {
    let err: ProtovizError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, ProtovizError::Serde(_)));
}
