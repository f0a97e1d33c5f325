//! Theme toggle binding.

use std::{cell::RefCell, rc::Rc};

use pagekit_core::{PreferenceStorage, Result, Theme, ThemeManager, UiError};
use wasm_bindgen::JsCast;
use web_sys::MediaQueryListEvent;

use crate::{
    context::PageContext,
    dom::DomSurface,
    listener::Listener,
    storage::{dark_scheme_query, preference_storage},
};

type Manager = ThemeManager<Box<dyn PreferenceStorage>, DomSurface>;

fn follow_system(manager: &RefCell<Manager>, dark: bool) -> bool {
    let applied = manager.borrow_mut().on_system_change(dark);
    if applied {
        log::debug!("theme follows system: {}", Theme::from_dark(dark));
    }
    applied
}

/// Applies the theme at attach time and keeps it in sync with the toggle
/// button and the system color scheme.
pub struct ThemeWidget {
    manager: Rc<RefCell<Manager>>,
    _listeners: Vec<Listener>,
}

impl ThemeWidget {
    pub fn attach(ctx: &PageContext) -> Result<Self> {
        let root = ctx
            .document
            .document_element()
            .ok_or_else(|| UiError::missing(":root"))?;

        let scheme = match dark_scheme_query(&ctx.window) {
            Ok(query) => Some(query),
            Err(err) => {
                log::info!("system color scheme not followed: {err}");
                None
            }
        };
        let prefers_dark = scheme.as_ref().is_some_and(|query| query.matches());

        let manager = Rc::new(RefCell::new(ThemeManager::new(
            preference_storage(&ctx.window),
            DomSurface::new(root),
            prefers_dark,
            &ctx.config.theme,
        )));
        log::debug!("theme applied: {}", manager.borrow().current());

        let mut listeners = Vec::new();

        if let Some(toggle) = ctx.find(&ctx.config.selectors.theme_toggle) {
            let manager = manager.clone();
            listeners.push(Listener::new(&toggle, "click", move |_| {
                let theme = manager.borrow_mut().toggle();
                log::debug!("theme toggled to {theme}");
            })?);
        }

        if let Some(query) = scheme {
            let manager = manager.clone();
            listeners.push(Listener::new(&query, "change", move |event| {
                if let Some(event) = event.dyn_ref::<MediaQueryListEvent>() {
                    follow_system(&manager, event.matches());
                }
            })?);
        }

        Ok(Self {
            manager,
            _listeners: listeners,
        })
    }

    /// The system color scheme changed. Returns whether the page theme
    /// followed it.
    pub fn on_system_change(&self, dark: bool) -> bool {
        follow_system(&self.manager, dark)
    }

    pub fn current(&self) -> Theme {
        self.manager.borrow().current()
    }

    pub fn toggle(&self) -> Theme {
        self.manager.borrow_mut().toggle()
    }

    /// Drop the explicit preference and follow the system again.
    pub fn reset(&self) -> Theme {
        let mut manager = self.manager.borrow_mut();
        manager.clear();
        manager.current()
    }
}
