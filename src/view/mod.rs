//! View layer: pure render decisions and their DOM application.
//!
//! DESIGN
//! ======
//! Each render pass is split in two: a plan (`plan`) computed from fetched
//! data with no DOM dependency, and a binding (`bindings`) that resolves the
//! page's element handles once and applies a plan to them. The split keeps
//! the render decisions testable natively.

#[cfg(target_arch = "wasm32")]
pub mod bindings;
pub mod plan;
