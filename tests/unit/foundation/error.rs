use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        BagelError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(BagelError::render("x").to_string().contains("render error:"));
    assert!(
        BagelError::surface_unavailable("x")
            .to_string()
            .contains("surface unavailable:")
    );
    assert!(
        BagelError::export_unavailable("x")
            .to_string()
            .contains("export unavailable:")
    );
    assert!(BagelError::encode("x").to_string().contains("encode error:"));
    assert!(
        BagelError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = BagelError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
