//! Predicates for `#[serde(skip_serializing_if = "...")]`.

/// Skip an optional flag unless it's explicitly `true`. An explicit `false` is
/// omitted just like an absent value.
pub fn not_true(x: &Option<bool>) -> bool {
    !matches!(x, Some(true))
}

#[test]
fn test_not_true() {
    #[derive(serde::Serialize)]
    struct T {
        #[serde(skip_serializing_if = "not_true")]
        val: Option<bool>,
    }

    assert_eq!(
        serde_json::to_string(&T { val: Some(true) }).unwrap(),
        r#"{"val":true}"#,
    );

    assert_eq!(serde_json::to_string(&T { val: Some(false) }).unwrap(), "{}");
    assert_eq!(serde_json::to_string(&T { val: None }).unwrap(), "{}");
}
