//! Element bindings over the static page markup.
//!
//! `PageView` resolves every element the controller touches once per render
//! pass and is passed into the render functions, instead of each function
//! looking elements up by id mid-render. Markup drift surfaces as a typed
//! error naming the missing id.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use crate::view::plan::{COMMENT_ITEM_CLASS, SessionPlan};

/// Greeting display container.
pub const LANGUAGE_CONTAINER: &str = "language-container";
/// Comment list container.
pub const COMMENT_LIST: &str = "content-container";
/// Comment submission form, hidden until the visitor is logged in.
pub const COMMENT_FORM: &str = "comment-form";
/// Navbar login control, visibility only.
pub const LOGIN_BUTTON: &str = "login-btn";
/// Modal login control; carries the login redirect href.
pub const LOGIN_MODAL_BUTTON: &str = "login-modal-btn";
/// Navbar logout control, visibility only.
pub const LOGOUT_BUTTON: &str = "logout-btn";
/// Modal logout control; carries the logout redirect href.
pub const LOGOUT_MODAL_BUTTON: &str = "logout-modal-btn";

/// A DOM operation the controller could not complete.
#[derive(Debug, Error)]
pub enum ViewError {
    #[error("no document in this environment")]
    NoDocument,
    #[error("element #{0} not found in page markup")]
    MissingElement(&'static str),
    #[error("element #{0} is not an HTML element")]
    NotHtml(&'static str),
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

/// Handles to every page element the controller renders into.
pub struct PageView {
    document: Document,
    language: Element,
    comment_list: Element,
    comment_form: HtmlElement,
    login_button: HtmlElement,
    login_modal_button: HtmlElement,
    logout_button: HtmlElement,
    logout_modal_button: HtmlElement,
}

impl PageView {
    /// Resolve all element handles from the live document.
    pub fn bind() -> Result<Self, ViewError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(ViewError::NoDocument)?;
        Ok(Self {
            language: element(&document, LANGUAGE_CONTAINER)?,
            comment_list: element(&document, COMMENT_LIST)?,
            comment_form: html_element(&document, COMMENT_FORM)?,
            login_button: html_element(&document, LOGIN_BUTTON)?,
            login_modal_button: html_element(&document, LOGIN_MODAL_BUTTON)?,
            logout_button: html_element(&document, LOGOUT_BUTTON)?,
            logout_modal_button: html_element(&document, LOGOUT_MODAL_BUTTON)?,
            document,
        })
    }

    /// Write the greeting as the language container's text content.
    pub fn render_greeting(&self, greeting: &str) {
        self.language.set_text_content(Some(greeting));
    }

    /// Reveal the controls named by `plan` and set the action href on the
    /// matching modal control. Controls the plan leaves hidden are not
    /// touched.
    pub fn render_session(&self, plan: &SessionPlan) -> Result<(), ViewError> {
        if plan.show_comment_form {
            show(&self.comment_form)?;
        }
        if plan.show_logout {
            show(&self.logout_button)?;
            set_href(&self.logout_modal_button, &plan.action_href)?;
            show(&self.logout_modal_button)?;
        }
        if plan.show_login {
            show(&self.login_button)?;
            set_href(&self.login_modal_button, &plan.action_href)?;
            show(&self.login_modal_button)?;
        }
        Ok(())
    }

    /// Replace the comment container's children with one `<li>` per comment,
    /// in the given order. Stale children are cleared first, so the list
    /// always reflects exactly the latest fetch.
    pub fn render_comments(&self, comments: &[String]) -> Result<(), ViewError> {
        self.comment_list.set_inner_html("");
        for comment in comments {
            let item = self.document.create_element("li").map_err(dom_err)?;
            item.set_class_name(COMMENT_ITEM_CLASS);
            item.set_text_content(Some(comment));
            self.comment_list.append_child(&item).map_err(dom_err)?;
        }
        Ok(())
    }
}

fn element(document: &Document, id: &'static str) -> Result<Element, ViewError> {
    document
        .get_element_by_id(id)
        .ok_or(ViewError::MissingElement(id))
}

fn html_element(document: &Document, id: &'static str) -> Result<HtmlElement, ViewError> {
    element(document, id)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| ViewError::NotHtml(id))
}

fn show(el: &HtmlElement) -> Result<(), ViewError> {
    el.style()
        .set_property("display", "block")
        .map_err(dom_err)
}

fn set_href(el: &HtmlElement, href: &str) -> Result<(), ViewError> {
    el.set_attribute("href", href).map_err(dom_err)
}

fn dom_err(value: JsValue) -> ViewError {
    ViewError::Dom(format!("{value:?}"))
}
