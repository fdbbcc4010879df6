//! Random greeting selection.

#[cfg(test)]
#[path = "greeting_test.rs"]
mod greeting_test;

/// Fixed greeting pool, one language name per entry.
pub const GREETINGS: [&str; 3] = ["Español", "English", "Deutsch"];

/// Map a uniform roll in `[0, 1)` to a pool entry.
///
/// The saturating float cast keeps out-of-range and NaN rolls inside the
/// pool, so any random source yields a valid greeting.
pub fn pick(roll: f64) -> &'static str {
    let index = (roll * GREETINGS.len() as f64) as usize;
    GREETINGS[index.min(GREETINGS.len() - 1)]
}

/// Pick a greeting using the browser's uniform random source.
#[cfg(target_arch = "wasm32")]
pub fn random() -> &'static str {
    pick(js_sys::Math::random())
}
