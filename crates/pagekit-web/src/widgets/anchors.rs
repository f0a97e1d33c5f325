//! Smooth scrolling for same-page links.

use pagekit_core::{
    Result,
    scroll::{anchor_destination, anchor_id},
};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

use crate::{context::PageContext, listener::Listener, widgets::back_to_top::smooth_scroll_to};

const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

pub struct AnchorScrollWidget {
    _listener: Listener,
}

impl AnchorScrollWidget {
    pub fn attach(ctx: &PageContext) -> Result<Self> {
        let window = ctx.window.clone();
        let document = ctx.document.clone();
        let header_offset = ctx.config.navigation.header_offset;

        let listener = Listener::new(&ctx.document, "click", move |event: Event| {
            let Some(link) = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .and_then(|target| target.closest(ANCHOR_SELECTOR).ok().flatten())
            else {
                return;
            };
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(target) = anchor_id(&href).and_then(|id| document.get_element_by_id(id)) else {
                return;
            };

            event.prevent_default();
            let top = anchor_destination(
                target.get_bounding_client_rect().top(),
                window.scroll_y().unwrap_or(0.0),
                header_offset,
            );
            smooth_scroll_to(&window, top);
        })?;

        Ok(Self {
            _listener: listener,
        })
    }
}
