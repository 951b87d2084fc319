use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        TextplateError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        TextplateError::decode("x")
            .to_string()
            .contains("decode error:")
    );
    assert!(
        TextplateError::encode("x")
            .to_string()
            .contains("encode error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = TextplateError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
