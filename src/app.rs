//! Entry points exported to the host page.
//!
//! The static markup calls `load_page` on load and `show_random_greeting`
//! from the greeting control. Both return immediately; network-backed
//! rendering completes whenever each response arrives.

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::greeting;
use crate::net::api;
use crate::view::bindings::PageView;
use crate::view::plan::SessionPlan;

/// One-time module setup: panic reporting and console logging.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
}

/// Render the page: session controls and the comment list, as two
/// independent tasks with no ordering between them. Each task mutates a
/// disjoint set of elements.
#[wasm_bindgen]
pub fn load_page(max_comments: u32) {
    spawn_local(render_session());
    spawn_local(render_comments(max_comments));
}

/// Write one randomly chosen greeting into the language container.
#[wasm_bindgen]
pub fn show_random_greeting() {
    match PageView::bind() {
        Ok(view) => view.render_greeting(greeting::random()),
        Err(err) => log::warn!("greeting render skipped: {err}"),
    }
}

/// Fetch the login status and reveal the matching controls. On any failure
/// the markup's default all-hidden state stands.
async fn render_session() {
    let status = match api::fetch_login_status().await {
        Ok(status) => status,
        Err(err) => {
            log::warn!("login status unavailable: {err}");
            return;
        }
    };
    let plan = SessionPlan::from_status(&status);
    if let Err(err) = PageView::bind().and_then(|view| view.render_session(&plan)) {
        log::warn!("session render failed: {err}");
    }
}

/// Fetch at most `max_comments` comments and replace the list container's
/// contents. On failure the container keeps whatever it already shows.
async fn render_comments(max_comments: u32) {
    let comments = match api::fetch_comments(max_comments).await {
        Ok(comments) => comments,
        Err(err) => {
            log::warn!("comments unavailable: {err}");
            return;
        }
    };
    log::debug!("rendering {} comments", comments.len());
    if let Err(err) = PageView::bind().and_then(|view| view.render_comments(&comments)) {
        log::warn!("comment render failed: {err}");
    }
}
