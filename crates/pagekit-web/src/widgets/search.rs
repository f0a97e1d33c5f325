//! Search overlay binding.

use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use gloo_net::http::Request;
use leptos::prelude::*;
use pagekit_core::{
    Result, SearchIndex, SearchOutcome, SearchRecord, SearchSession, Ticket, UiError,
    config::{SearchConfig, Selectors},
    search::{Shortcut, shortcut},
};
use pagekit_ui::{MountedView, SearchResults};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, EventTarget, HtmlAnchorElement, HtmlElement, HtmlInputElement, KeyboardEvent, Window,
};

use crate::{
    context::PageContext,
    dom::{DomSurface, select_all_in, select_in},
    listener::{Listener, Timeout, after},
};

/// Build records from the rendered post cards.
///
/// Cards missing a title link or excerpt still produce a record with those
/// fields empty.
pub fn collect_records(ctx: &PageContext) -> Vec<SearchRecord> {
    let selectors = &ctx.config.selectors;
    let records: Vec<SearchRecord> = ctx
        .find_all(&selectors.post_card)
        .iter()
        .map(|card| record_from_card(card, selectors))
        .collect();
    log::debug!("indexed {} post cards", records.len());
    records
}

fn record_from_card(card: &Element, selectors: &Selectors) -> SearchRecord {
    let title_link = select_in(card, &selectors.post_title_link);
    let title = title_link
        .as_ref()
        .and_then(|link| link.text_content())
        .unwrap_or_default();
    let url = title_link
        .as_ref()
        .and_then(|link| link.dyn_ref::<HtmlAnchorElement>().map(|a| a.href()))
        .unwrap_or_default();
    let excerpt = select_in(card, &selectors.post_excerpt)
        .and_then(|excerpt| excerpt.text_content())
        .unwrap_or_default();
    let tags = select_all_in(card, &selectors.post_tag)
        .iter()
        .filter_map(|tag| tag.text_content())
        .collect();

    SearchRecord::new(
        title,
        url,
        excerpt,
        tags,
        &card.text_content().unwrap_or_default(),
    )
}

/// Fetch a JSON index of records.
pub async fn fetch_index(url: &str, config: &SearchConfig) -> Result<SearchIndex> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| UiError::index_fetch(format!("Network error: {e}")))?;

    if !response.ok() {
        return Err(UiError::index_fetch(format!(
            "Failed to load index: HTTP {}",
            response.status()
        )));
    }

    let json = response
        .text()
        .await
        .map_err(|e| UiError::index_fetch(format!("Failed to read response: {e}")))?;

    SearchIndex::from_json(&json, config)
}

struct SearchState {
    session: SearchSession<DomSurface>,
    pending: Option<Timeout>,
}

/// Operations shared by the widget's handlers.
#[derive(Clone)]
struct SearchController {
    state: Rc<RefCell<SearchState>>,
    input: Option<HtmlInputElement>,
    outcome: RwSignal<SearchOutcome>,
    window: Window,
    focus_delay_ms: u32,
}

impl SearchController {
    fn open(&self) {
        self.state.borrow_mut().session.open();
        self.outcome.set(SearchOutcome::Idle);
        if let Some(input) = self.input.clone() {
            let focused = after(&self.window, self.focus_delay_ms, move || {
                let _ = input.focus();
            });
            if let Err(err) = focused {
                log::debug!("search input not focused: {err}");
            }
        }
    }

    fn close(&self) {
        {
            let mut state = self.state.borrow_mut();
            state.pending = None;
            state.session.close();
        }
        if let Some(input) = &self.input {
            input.set_value("");
        }
        self.outcome.set(SearchOutcome::Idle);
    }

    fn toggle(&self) {
        if self.state.borrow().session.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    fn is_open(&self) -> bool {
        self.state.borrow().session.is_open()
    }

    fn on_input(&self, value: String) {
        let (ticket, wait_ms) = {
            let mut state = self.state.borrow_mut();
            (state.session.input(value), state.session.debounce_ms())
        };

        let state = Rc::downgrade(&self.state);
        let outcome = self.outcome;
        match Timeout::new(&self.window, wait_ms, move || fire(&state, outcome, ticket)) {
            Ok(timeout) => self.state.borrow_mut().pending = Some(timeout),
            Err(err) => log::warn!("search debounce timer: {err}"),
        }
    }
}

fn fire(state: &Weak<RefCell<SearchState>>, outcome: RwSignal<SearchOutcome>, ticket: Ticket) {
    let Some(state) = state.upgrade() else {
        return;
    };
    let result = state.borrow_mut().session.fire(ticket).cloned();
    if let Some(result) = result {
        outcome.set(result);
    }
}

fn is_target(target: Option<EventTarget>, element: &Element) -> bool {
    let element: &JsValue = element.as_ref();
    target.is_some_and(|target| {
        let target: &JsValue = target.as_ref();
        target == element
    })
}

/// The search overlay with its toggle, input, close button and results.
pub struct SearchWidget {
    controller: SearchController,
    _results: Option<MountedView>,
    _listeners: Vec<Listener>,
}

impl SearchWidget {
    pub fn attach(ctx: &PageContext) -> Result<Self> {
        let selectors = &ctx.config.selectors;
        let config = &ctx.config.search;
        let toggle = ctx.require(&selectors.search_toggle)?;
        let overlay = ctx.require(&selectors.search_overlay)?;
        let input = ctx
            .find(&selectors.search_input)
            .and_then(|input| input.dyn_into::<HtmlInputElement>().ok());

        let index = SearchIndex::new(collect_records(ctx), config);
        let state = Rc::new(RefCell::new(SearchState {
            session: SearchSession::new(
                index,
                DomSurface::new(overlay.clone()),
                ctx.scroll_lock(),
                config,
            ),
            pending: None,
        }));

        let outcome = RwSignal::new(SearchOutcome::Idle);
        let results = ctx
            .find(&selectors.search_results)
            .and_then(|container| container.dyn_into::<HtmlElement>().ok())
            .map(|container| {
                MountedView::mount(container, move || view! { <SearchResults outcome=outcome /> })
            });

        let controller = SearchController {
            state,
            input: input.clone(),
            outcome,
            window: ctx.window.clone(),
            focus_delay_ms: config.focus_delay_ms,
        };

        let mut listeners = Vec::new();

        let c = controller.clone();
        listeners.push(Listener::new(&toggle, "click", move |_| c.toggle())?);

        if let Some(close) = ctx.find(&selectors.search_close) {
            let c = controller.clone();
            listeners.push(Listener::new(&close, "click", move |_| c.close())?);
        }

        let c = controller.clone();
        let backdrop = overlay.clone();
        listeners.push(Listener::new(&overlay, "click", move |event| {
            if is_target(event.target(), &backdrop) {
                c.close();
            }
        })?);

        if let Some(input) = input {
            let c = controller.clone();
            let field = input.clone();
            listeners.push(Listener::new(&input, "input", move |_| c.on_input(field.value()))?);
        }

        let c = controller.clone();
        listeners.push(Listener::new(&ctx.document, "keydown", move |event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let command = event.ctrl_key() || event.meta_key();
            match shortcut(&event.key(), command, c.is_open()) {
                Some(Shortcut::Close) => c.close(),
                Some(Shortcut::Toggle) => {
                    event.prevent_default();
                    c.toggle();
                }
                None => {}
            }
        })?);

        if let Some(url) = config.index_url.clone() {
            let state = Rc::downgrade(&controller.state);
            let config = config.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_index(&url, &config).await {
                    Ok(index) => {
                        if let Some(state) = state.upgrade() {
                            log::info!("search index loaded from {url}: {} records", index.len());
                            state.borrow_mut().session.replace_index(index);
                        }
                    }
                    Err(err) => log::warn!("keeping page search index: {err}"),
                }
            });
        }

        Ok(Self {
            controller,
            _results: results,
            _listeners: listeners,
        })
    }

    /// Run `text` against the current index without touching the overlay.
    pub fn lookup(&self, text: &str) -> SearchOutcome {
        self.controller.state.borrow().session.index().lookup(text)
    }
}

impl Drop for SearchWidget {
    fn drop(&mut self) {
        let mut state = self.controller.state.borrow_mut();
        state.pending = None;
        if state.session.is_open() {
            state.session.close();
        }
    }
}
