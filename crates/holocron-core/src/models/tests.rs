use super::*;

#[test]
fn user_debug_redacts_password() {
    let user = User {
        id: 1,
        email: "luke@rebellion.org".to_string(),
        password: "use-the-force".to_string(),
        is_active: true,
    };
    let rendered = format!("{user:?}");
    assert!(rendered.contains("luke@rebellion.org"));
    assert!(rendered.contains("<redacted>"));
    assert!(!rendered.contains("use-the-force"));
}
