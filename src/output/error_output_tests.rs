use super::*;

fn render(use_colors: bool, detail: Option<&str>, suggestion: Option<&str>) -> String {
    let mut buf = Vec::new();
    ErrorOutput::with_colors(use_colors).write_error(
        &mut buf,
        "FileRead",
        "deployment/Dockerfile",
        detail,
        suggestion,
    );
    String::from_utf8(buf).unwrap()
}

#[test]
fn error_without_colors_basic() {
    assert_eq!(render(false, None, None), "✖ FileRead: deployment/Dockerfile\n");
}

#[test]
fn error_without_colors_with_detail_and_suggestion() {
    let result = render(false, Some("file not found"), Some("pass --root"));
    assert_eq!(
        result,
        "✖ FileRead: deployment/Dockerfile\n  × file not found\n  help: pass --root\n"
    );
}

#[test]
fn error_with_colors_uses_ansi() {
    let result = render(true, Some("file not found"), None);
    assert!(result.contains(ansi::RED));
    assert!(result.contains(ansi::DIM));
    assert!(result.contains("file not found"));
}

#[test]
fn explicit_never_mode_disables_colors() {
    let mut buf = Vec::new();
    ErrorOutput::new(ColorMode::Never).write_error(&mut buf, "Config", "bad", None, None);
    assert_eq!(String::from_utf8(buf).unwrap(), "✖ Config: bad\n");
}
