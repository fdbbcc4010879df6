//! # portfolio-client
//!
//! WASM page controller for the portfolio site's static pages. It enhances
//! the server-rendered markup with three independent render passes: showing
//! login-dependent controls, rendering the stored comment list, and writing
//! a randomly chosen greeting.
//!
//! Pure decision logic (wire shapes, render plans, greeting selection) is
//! target-independent and unit tested natively; DOM and network code lives
//! behind `cfg(target_arch = "wasm32")`.

#[cfg(target_arch = "wasm32")]
pub mod app;
pub mod greeting;
pub mod net;
pub mod view;
