//! Pure render decisions derived from fetched data.

#[cfg(test)]
#[path = "plan_test.rs"]
mod plan_test;

use crate::net::types::LoginStatus;

/// Presentational class applied to every rendered comment item.
pub const COMMENT_ITEM_CLASS: &str = "list-group-item";

/// Which session controls to reveal, and the redirect target for the one
/// action the visitor can take next.
///
/// Controls not named visible stay in the markup's default hidden state;
/// there is no explicit hide step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionPlan {
    pub show_comment_form: bool,
    pub show_login: bool,
    pub show_logout: bool,
    /// Login URL when logged out, logout URL when logged in.
    pub action_href: String,
}

impl SessionPlan {
    /// Map a fetched login status to the set of controls to reveal.
    pub fn from_status(status: &LoginStatus) -> Self {
        Self {
            show_comment_form: status.is_logged_in,
            show_login: !status.is_logged_in,
            show_logout: status.is_logged_in,
            action_href: status.redirect_url.clone(),
        }
    }
}
