use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        BackgroundError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        BackgroundError::encode("x")
            .to_string()
            .contains("encode error:")
    );
}

#[test]
fn write_error_names_path_and_keeps_source() {
    let err = BackgroundError::write("out/bg.png", std::io::Error::other("disk full"));
    let msg = err.to_string();
    assert!(msg.contains("out/bg.png"));
    assert!(msg.contains("disk full"));
    assert!(std::error::Error::source(&err).is_some());
}
