//! Handles every widget receives at attach time.

use pagekit_core::{Result, ScrollLock, SiteConfig, UiError};
use web_sys::{Document, Element, HtmlElement, Window};

use crate::dom::{DomSurface, elements, js_error};

/// The page a widget attaches to.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub window: Window,
    pub document: Document,
    pub body: HtmlElement,
    pub config: SiteConfig,
    scroll: ScrollLock<DomSurface>,
}

impl PageContext {
    pub fn new(config: SiteConfig) -> Result<Self> {
        let window = web_sys::window().ok_or_else(|| UiError::unsupported("window"))?;
        let document = window
            .document()
            .ok_or_else(|| UiError::unsupported("document"))?;
        let body = document.body().ok_or_else(|| UiError::missing("body"))?;
        let scroll = ScrollLock::new(DomSurface::from(body.clone()));
        Ok(Self {
            window,
            document,
            body,
            config,
            scroll,
        })
    }

    /// First element matching `selector`, if any.
    pub fn find(&self, selector: &str) -> Option<Element> {
        match self.document.query_selector(selector) {
            Ok(found) => found,
            Err(err) => {
                log::warn!("invalid selector {selector:?}: {}", js_error("querySelector", err));
                None
            }
        }
    }

    /// First element matching `selector`, or a missing-element error.
    pub fn require(&self, selector: &str) -> Result<Element> {
        self.find(selector).ok_or_else(|| UiError::missing(selector))
    }

    /// All elements matching `selector`.
    pub fn find_all(&self, selector: &str) -> Vec<Element> {
        match self.document.query_selector_all(selector) {
            Ok(list) => elements(&list),
            Err(err) => {
                log::warn!("invalid selector {selector:?}: {}", js_error("querySelectorAll", err));
                Vec::new()
            }
        }
    }

    /// The page's body scroll lock. Every clone shares one holder count.
    pub fn scroll_lock(&self) -> ScrollLock<DomSurface> {
        self.scroll.clone()
    }

    /// Current vertical scroll offset.
    pub fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }
}
