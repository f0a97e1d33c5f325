//! Back-to-top button binding.

use pagekit_core::{Result, scroll::BackToTop};
use web_sys::{ScrollBehavior, ScrollToOptions, Window};

use crate::{context::PageContext, dom::DomSurface, listener::Listener};

/// Smoothly scroll `window` to `top`.
pub fn smooth_scroll_to(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

pub struct BackToTopWidget {
    _listeners: Vec<Listener>,
}

impl BackToTopWidget {
    pub fn attach(ctx: &PageContext) -> Result<Self> {
        let button = ctx.require(&ctx.config.selectors.back_to_top)?;
        let back_to_top = BackToTop::new(
            DomSurface::new(button.clone()),
            ctx.config.navigation.back_to_top_threshold,
        );
        back_to_top.on_scroll(ctx.scroll_y());

        let window = ctx.window.clone();
        let on_scroll = Listener::passive(&ctx.window, "scroll", move |_| {
            back_to_top.on_scroll(window.scroll_y().unwrap_or(0.0));
        })?;

        let window = ctx.window.clone();
        let on_click = Listener::new(&button, "click", move |_| smooth_scroll_to(&window, 0.0))?;

        Ok(Self {
            _listeners: vec![on_scroll, on_click],
        })
    }
}
