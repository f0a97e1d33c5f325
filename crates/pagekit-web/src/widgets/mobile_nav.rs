//! Mobile navigation drawer binding.

use std::{cell::RefCell, rc::Rc};

use pagekit_core::{Result, nav::MobileNav};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, KeyboardEvent, Node};

use crate::{context::PageContext, dom::DomSurface, listener::Listener};

pub struct MobileNavWidget {
    nav: Rc<RefCell<MobileNav<DomSurface>>>,
    _listeners: Vec<Listener>,
}

fn contains(element: &Element, event: &Event) -> bool {
    let target = event.target().and_then(|target| target.dyn_into::<Node>().ok());
    element.contains(target.as_ref())
}

impl MobileNavWidget {
    pub fn attach(ctx: &PageContext) -> Result<Self> {
        let selectors = &ctx.config.selectors;
        let toggle = ctx.require(&selectors.mobile_menu_toggle)?;
        let menu = ctx.require(&selectors.nav_menu)?;

        let nav = Rc::new(RefCell::new(MobileNav::new(
            DomSurface::new(toggle.clone()),
            DomSurface::new(menu.clone()),
            ctx.scroll_lock(),
            ctx.config.navigation.mobile_breakpoint,
        )));

        let mut listeners = Vec::new();

        let n = nav.clone();
        listeners.push(Listener::new(&toggle, "click", move |_| {
            let open = n.borrow_mut().toggle();
            log::debug!("mobile menu open: {open}");
        })?);

        let n = nav.clone();
        listeners.push(Listener::new(&ctx.document, "click", move |event| {
            let inside = contains(&toggle, &event) || contains(&menu, &event);
            n.borrow_mut().on_document_click(inside);
        })?);

        let n = nav.clone();
        let window = ctx.window.clone();
        listeners.push(Listener::passive(&ctx.window, "resize", move |_| {
            let width = window
                .inner_width()
                .ok()
                .and_then(|width| width.as_f64())
                .unwrap_or(0.0);
            n.borrow_mut().on_resize(width);
        })?);

        let n = nav.clone();
        listeners.push(Listener::new(&ctx.document, "keydown", move |event| {
            if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                n.borrow_mut().on_key(&event.key());
            }
        })?);

        Ok(Self {
            nav,
            _listeners: listeners,
        })
    }

    pub fn is_open(&self) -> bool {
        self.nav.borrow().is_open()
    }
}

impl Drop for MobileNavWidget {
    fn drop(&mut self) {
        self.nav.borrow_mut().close();
    }
}
