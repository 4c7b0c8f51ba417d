use webdom::{DefaultTheme, Theme, ThemeBuilder};

#[test]
fn test_default_theme_variables() {
    let theme = DefaultTheme::new();
    assert_eq!(theme.resolve("primary-color-1"), Some("#4e7494"));
    assert_eq!(theme.resolve("table-row-border"), Some("#e0e0e0"));
    assert_eq!(theme.resolve("font-size"), Some("16px"));
    assert_eq!(theme.resolve("missing"), None);
}

#[test]
fn test_overriding_base_moves_derived_variables() {
    let theme = ThemeBuilder::new().set("primary-color-1", "#112233").build();
    assert_eq!(theme.resolve("button-color"), Some("#112233"));
    assert_eq!(theme.resolve("table-header-row-border"), Some("#112233"));
    assert_eq!(theme.resolve("line-chart-default-line-color"), Some("#112233"));
    // Unrelated derived variable keeps its base.
    assert_eq!(theme.resolve("table-row-border"), Some("#e0e0e0"));
}

#[test]
fn test_explicit_derived_override_wins() {
    let theme = DefaultTheme::builder()
        .set("primary-color-1", "#112233")
        .set("button-color", "#abcdef")
        .build();
    assert_eq!(theme.resolve("button-color"), Some("#abcdef"));
    assert_eq!(theme.resolve("card-border-color"), Some("#112233"));
}

#[test]
fn test_merge_json_overrides() {
    let theme = ThemeBuilder::new()
        .merge_json(r#"{"error-color": "red", "font-size": "14px"}"#)
        .unwrap()
        .build();
    assert_eq!(theme.resolve("input-error-color"), Some("red"));
    assert_eq!(theme.resolve("font-size"), Some("14px"));
}

#[test]
fn test_merge_json_rejects_invalid_input() {
    let err = ThemeBuilder::new().merge_json("[1, 2]").unwrap_err();
    assert!(err.to_string().contains("invalid theme json"));
}
