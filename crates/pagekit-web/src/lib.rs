//! pagekit Browser Runtime
//!
//! Client-side enhancements for statically generated blogs, compiled to
//! WebAssembly. Load the module and every widget whose markup is present on
//! the page attaches itself: theme toggle, search overlay, mobile navigation,
//! back-to-top, reading progress, smooth anchors, lazy images, language
//! switcher and the copy/external-link decorations.
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { searchPosts, toggleTheme } from './pagekit_web.js';
//!
//! await init();
//!
//! const outcome = searchPosts('rust');
//! console.log(outcome.state, outcome.records);
//!
//! toggleTheme();
//! ```

pub mod bootstrap;
pub mod context;
pub mod dom;
pub mod listener;
pub mod storage;
pub mod widgets;

use pagekit_core::SearchOutcome;
use wasm_bindgen::prelude::*;

/// Install the console logger. Config-driven levels are applied at start.
fn init_logging() {
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("console logger already installed");
    }
}

/// Initialize the WASM module and boot the page.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    init_logging();

    if let Err(err) = bootstrap::boot() {
        log::warn!("pagekit not started: {err}");
    }
}

/// Get the version of the runtime.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Run `text` against the page's search index.
///
/// Returns `{ state: "idle" }` when search is not attached.
#[wasm_bindgen(js_name = searchPosts)]
pub fn search_posts(text: &str) -> Result<JsValue, JsError> {
    let outcome = bootstrap::with_page(|page| page.search().map(|search| search.lookup(text)))
        .flatten()
        .unwrap_or(SearchOutcome::Idle);
    serde_wasm_bindgen::to_value(&outcome).map_err(|e| JsError::new(&e.to_string()))
}

/// Flip the theme; returns the new theme, or `undefined` without a theme widget.
#[wasm_bindgen(js_name = toggleTheme)]
pub fn toggle_theme() -> Option<String> {
    bootstrap::with_page(|page| page.theme().map(|theme| theme.toggle().to_string())).flatten()
}

/// Forget the stored theme and follow the system color scheme.
#[wasm_bindgen(js_name = resetTheme)]
pub fn reset_theme() -> Option<String> {
    bootstrap::with_page(|page| page.theme().map(|theme| theme.reset().to_string())).flatten()
}

/// Detach every widget.
#[wasm_bindgen]
pub fn dispose() {
    bootstrap::dispose();
}

/// Re-attach every widget against the current markup.
#[wasm_bindgen]
pub fn reinitialize() {
    bootstrap::reinitialize();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_version() {
        let version = get_version();
        assert!(!version.is_empty());
        assert!(version.starts_with("0."));
    }
}
