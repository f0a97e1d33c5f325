//! One binding per widget. Each `attach` returns `MissingElement` when its
//! markup is absent and releases everything it registered when dropped.

pub mod anchors;
pub mod back_to_top;
pub mod decorations;
pub mod language;
pub mod lazy_images;
pub mod mobile_nav;
pub mod perf;
pub mod progress;
pub mod search;
pub mod service_worker;
pub mod theme;

pub use anchors::AnchorScrollWidget;
pub use back_to_top::BackToTopWidget;
pub use decorations::DecorationsWidget;
pub use language::LanguageWidget;
pub use lazy_images::LazyImagesWidget;
pub use mobile_nav::MobileNavWidget;
pub use progress::ReadingProgressWidget;
pub use search::SearchWidget;
pub use theme::ThemeWidget;

use pagekit_core::Result;

use crate::{context::PageContext, listener::once};

/// Run `callback` after the window `load` event, or now if it already fired.
pub fn on_load<F>(ctx: &PageContext, callback: F) -> Result<()>
where
    F: FnOnce() + 'static,
{
    if ctx.document.ready_state() == "complete" {
        callback();
        Ok(())
    } else {
        once(&ctx.window, "load", callback)
    }
}
