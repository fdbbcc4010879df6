use super::*;

fn status(is_logged_in: bool, url: &str) -> LoginStatus {
    LoginStatus {
        is_logged_in,
        redirect_url: url.to_owned(),
    }
}

// =============================================================
// Session plan truth table
// =============================================================

#[test]
fn logged_in_reveals_form_and_logout_controls() {
    let plan = SessionPlan::from_status(&status(true, "https://x"));
    assert!(plan.show_comment_form);
    assert!(plan.show_logout);
    assert!(!plan.show_login);
    assert_eq!(plan.action_href, "https://x");
}

#[test]
fn logged_out_reveals_login_controls_only() {
    let plan = SessionPlan::from_status(&status(false, "https://y"));
    assert!(!plan.show_comment_form);
    assert!(!plan.show_logout);
    assert!(plan.show_login);
    assert_eq!(plan.action_href, "https://y");
}

// =============================================================
// Comment styling
// =============================================================

#[test]
fn comment_item_class_matches_page_styling() {
    assert_eq!(COMMENT_ITEM_CLASS, "list-group-item");
}
