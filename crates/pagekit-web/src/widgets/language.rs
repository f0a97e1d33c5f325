//! Language switcher binding.

use std::{cell::RefCell, rc::Rc};

use leptos::prelude::*;
use pagekit_core::{
    Result,
    language::{LanguageSwitch, SwitchDecision, is_switch_target},
};
use pagekit_ui::{MountedView, SwitchLoader};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, PageTransitionEvent, Window};

use crate::{
    context::PageContext,
    dom::select_all_in,
    listener::{Listener, after},
};

#[derive(Default)]
struct SwitchState {
    switch: LanguageSwitch,
    loader: Option<MountedView>,
}

pub struct LanguageWidget {
    _state: Rc<RefCell<SwitchState>>,
    _listeners: Vec<Listener>,
}

fn navigate(window: &Window, href: String, delay_ms: u32) {
    let target = window.clone();
    let scheduled = after(window, delay_ms, move || {
        if let Err(err) = target.location().set_href(&href) {
            log::warn!("language switch to {href} failed: {err:?}");
        }
    });
    if let Err(err) = scheduled {
        log::warn!("{err}");
    }
}

impl LanguageWidget {
    pub fn attach(ctx: &PageContext) -> Result<Self> {
        let selectors = &ctx.config.selectors;
        let switcher = ctx.require(&selectors.language_switcher)?;
        let state = Rc::new(RefCell::new(SwitchState::default()));
        let mut listeners = Vec::new();

        for option in select_all_in(&switcher, &selectors.language_option) {
            let state = state.clone();
            let window = ctx.window.clone();
            let body: HtmlElement = ctx.body.clone();
            let config = ctx.config.language.clone();
            let link = option.clone();

            listeners.push(Listener::new(&option, "click", move |event| {
                let href = link.get_attribute("href");
                if !is_switch_target(href.as_deref()) {
                    return;
                }
                event.prevent_default();
                let Some(href) = href else {
                    return;
                };

                let mut state = state.borrow_mut();
                if let SwitchDecision::Navigate(href) = state.switch.activate(&href) {
                    log::info!("switching language to {href}");
                    let text = config.loading_text.clone();
                    state.loader = Some(MountedView::mount(body.clone(), move || {
                        view! { <SwitchLoader text=text /> }
                    }));
                    navigate(&window, href, config.switch_delay_ms);
                }
            })?);
        }

        let restored = state.clone();
        listeners.push(Listener::new(&ctx.window, "pageshow", move |event| {
            let persisted = event
                .dyn_ref::<PageTransitionEvent>()
                .is_some_and(|event| event.persisted());
            if persisted {
                let mut state = restored.borrow_mut();
                state.switch.reset();
                state.loader = None;
            }
        })?);

        Ok(Self {
            _state: state,
            _listeners: listeners,
        })
    }
}
