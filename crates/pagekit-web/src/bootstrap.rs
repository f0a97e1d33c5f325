//! Page bootstrap: attaches every widget once the document has been parsed.

use std::cell::{Cell, RefCell};

use pagekit_core::{Result, SiteConfig, UiError, config::CONFIG_ELEMENT_ID};
use web_sys::Document;

use crate::{
    context::PageContext,
    listener::once,
    widgets::{
        AnchorScrollWidget, BackToTopWidget, DecorationsWidget, LanguageWidget, LazyImagesWidget,
        MobileNavWidget, ReadingProgressWidget, SearchWidget, ThemeWidget, perf, service_worker,
    },
};

/// Every widget attached to the current page.
pub struct Page {
    theme: Option<ThemeWidget>,
    search: Option<SearchWidget>,
    mobile_nav: Option<MobileNavWidget>,
    back_to_top: Option<BackToTopWidget>,
    progress: Option<ReadingProgressWidget>,
    anchors: Option<AnchorScrollWidget>,
    lazy_images: Option<LazyImagesWidget>,
    language: Option<LanguageWidget>,
    decorations: Option<DecorationsWidget>,
}

fn attached<W>(name: &'static str, result: Result<W>) -> Option<W> {
    match result {
        Ok(widget) => {
            log::debug!("{name} attached");
            Some(widget)
        }
        Err(UiError::MissingElement { selector }) => {
            log::debug!("{name} skipped, no {selector} on this page");
            None
        }
        Err(err @ UiError::Unsupported { .. }) => {
            log::info!("{name} disabled: {err}");
            None
        }
        Err(err) => {
            log::warn!("{name} failed to attach: {err}");
            None
        }
    }
}

impl Page {
    /// Attach each widget. A widget whose markup is missing is skipped.
    pub fn attach(ctx: &PageContext) -> Self {
        Self {
            theme: attached("theme toggle", ThemeWidget::attach(ctx)),
            search: attached("search", SearchWidget::attach(ctx)),
            mobile_nav: attached("mobile navigation", MobileNavWidget::attach(ctx)),
            back_to_top: attached("back to top", BackToTopWidget::attach(ctx)),
            progress: attached("reading progress", ReadingProgressWidget::attach(ctx)),
            anchors: attached("anchor scrolling", AnchorScrollWidget::attach(ctx)),
            lazy_images: attached("lazy images", LazyImagesWidget::attach(ctx)),
            language: attached("language switcher", LanguageWidget::attach(ctx)),
            decorations: attached("decorations", DecorationsWidget::attach(ctx)),
        }
    }

    pub fn theme(&self) -> Option<&ThemeWidget> {
        self.theme.as_ref()
    }

    pub fn search(&self) -> Option<&SearchWidget> {
        self.search.as_ref()
    }

    /// Names of the widgets that attached.
    pub fn attached(&self) -> Vec<&'static str> {
        [
            ("theme", self.theme.is_some()),
            ("search", self.search.is_some()),
            ("mobile_nav", self.mobile_nav.is_some()),
            ("back_to_top", self.back_to_top.is_some()),
            ("progress", self.progress.is_some()),
            ("anchors", self.anchors.is_some()),
            ("lazy_images", self.lazy_images.is_some()),
            ("language", self.language.is_some()),
            ("decorations", self.decorations.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, present)| present.then_some(name))
        .collect()
    }
}

thread_local! {
    static BOOTED: Cell<bool> = const { Cell::new(false) };
    static CONTEXT: RefCell<Option<PageContext>> = const { RefCell::new(None) };
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

/// Read the page configuration from its `<script>` element.
///
/// A missing or empty element yields the defaults.
pub fn load_config(document: &Document) -> Result<SiteConfig> {
    let text = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content());
    match text {
        Some(json) if !json.trim().is_empty() => SiteConfig::from_json(&json),
        _ => Ok(SiteConfig::default()),
    }
}

/// Start pagekit once per page load. Later calls are ignored.
///
/// While the document is still parsing, the body and the config element may
/// not exist yet, so both are read from the `DOMContentLoaded` callback.
pub fn boot() -> Result<()> {
    if BOOTED.with(|booted| booted.replace(true)) {
        log::debug!("pagekit already booted");
        return Ok(());
    }

    let window = web_sys::window().ok_or_else(|| UiError::unsupported("window"))?;
    let document = window
        .document()
        .ok_or_else(|| UiError::unsupported("document"))?;
    if document.ready_state() == "loading" {
        let parsed = document.clone();
        once(&document, "DOMContentLoaded", move || configure_and_start(&parsed))
    } else {
        configure_and_start(&document);
        Ok(())
    }
}

fn configure_and_start(document: &Document) {
    let config = match load_config(document) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("invalid page configuration, using defaults: {err}");
            SiteConfig::default()
        }
    };
    set_log_level(&config.logging.level);

    match PageContext::new(config) {
        Ok(ctx) => start(ctx),
        Err(err) => log::warn!("pagekit not started: {err}"),
    }
}

fn set_log_level(level: &str) {
    let level: log::Level = level.parse().unwrap_or(log::Level::Info);
    log::set_max_level(level.to_level_filter());
}

fn start(ctx: PageContext) {
    let page = Page::attach(&ctx);
    log::info!("pagekit ready: {}", page.attached().join(", "));

    if ctx.config.performance.enabled {
        if let Err(err) = perf::schedule_report(&ctx) {
            log::debug!("{err}");
        }
    }
    if ctx.config.service_worker.enabled {
        if let Err(err) = service_worker::schedule_registration(&ctx) {
            log::debug!("{err}");
        }
    }

    PAGE.with(|slot| slot.replace(Some(page)));
    CONTEXT.with(|slot| slot.replace(Some(ctx)));
}

/// Run `f` against the attached page, if there is one.
pub fn with_page<T>(f: impl FnOnce(&Page) -> T) -> Option<T> {
    PAGE.with(|slot| slot.borrow().as_ref().map(f))
}

/// Detach every widget, removing their listeners, observers and timers.
pub fn dispose() {
    let page = PAGE.with(|slot| slot.borrow_mut().take());
    if page.is_some() {
        drop(page);
        log::debug!("pagekit disposed");
    }
}

/// Detach and re-attach every widget, e.g. after content was replaced.
pub fn reinitialize() {
    dispose();
    let Some(ctx) = CONTEXT.with(|slot| slot.borrow().clone()) else {
        log::debug!("pagekit not started yet, nothing to reinitialize");
        return;
    };
    let page = Page::attach(&ctx);
    log::info!("pagekit reinitialized: {}", page.attached().join(", "));
    PAGE.with(|slot| slot.replace(Some(page)));
}
