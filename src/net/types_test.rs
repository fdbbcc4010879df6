use super::*;

// =============================================================
// LoginStatus wire shape
// =============================================================

#[test]
fn login_status_parses_logged_in_shape() {
    let status: LoginStatus =
        serde_json::from_str(r#"{"isLoggedIn":true,"redirectUrl":"https://x"}"#).expect("parse");
    assert!(status.is_logged_in);
    assert_eq!(status.redirect_url, "https://x");
}

#[test]
fn login_status_parses_logged_out_shape() {
    let status: LoginStatus =
        serde_json::from_str(r#"{"isLoggedIn":false,"redirectUrl":"https://y"}"#).expect("parse");
    assert!(!status.is_logged_in);
    assert_eq!(status.redirect_url, "https://y");
}

#[test]
fn login_status_rejects_missing_redirect_url() {
    let result = serde_json::from_str::<LoginStatus>(r#"{"isLoggedIn":true}"#);
    assert!(result.is_err());
}

#[test]
fn login_status_rejects_non_boolean_flag() {
    let result =
        serde_json::from_str::<LoginStatus>(r#"{"isLoggedIn":"yes","redirectUrl":"/"}"#);
    assert!(result.is_err());
}

// =============================================================
// Comment payload
// =============================================================

#[test]
fn comment_payload_is_a_plain_string_array() {
    let comments: Vec<String> = serde_json::from_str(r#"["hello","world"]"#).expect("parse");
    assert_eq!(comments, ["hello", "world"]);
}
