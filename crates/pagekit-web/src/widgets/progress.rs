//! Reading progress bar binding.

use leptos::prelude::*;
use pagekit_core::{Result, scroll::reading_progress};
use pagekit_ui::{MountedView, ReadingProgressBar};
use web_sys::Document;

use crate::{context::PageContext, listener::Listener};

/// Current progress through `document`, 0 to 100.
pub fn measure(document: &Document) -> f64 {
    let Some(root) = document.document_element() else {
        return 0.0;
    };
    let body_top = document.body().map_or(0, |body| body.scroll_top());
    let scrolled = if body_top != 0 { body_top } else { root.scroll_top() };
    reading_progress(
        f64::from(scrolled),
        f64::from(root.scroll_height()),
        f64::from(root.client_height()),
    )
}

/// Bar appended to the body while a post is on the page.
pub struct ReadingProgressWidget {
    _bar: MountedView,
    _listeners: Vec<Listener>,
}

impl ReadingProgressWidget {
    pub fn attach(ctx: &PageContext) -> Result<Self> {
        ctx.require(&ctx.config.selectors.post_content)?;

        let percent = RwSignal::new(measure(&ctx.document));
        let bar = MountedView::mount(ctx.body.clone(), move || {
            view! { <ReadingProgressBar percent=percent /> }
        });

        let document = ctx.document.clone();
        let on_scroll = Listener::passive(&ctx.window, "scroll", move |_| {
            percent.set(measure(&document));
        })?;
        let document = ctx.document.clone();
        let on_resize = Listener::passive(&ctx.window, "resize", move |_| {
            percent.set(measure(&document));
        })?;

        Ok(Self {
            _bar: bar,
            _listeners: vec![on_scroll, on_resize],
        })
    }
}
