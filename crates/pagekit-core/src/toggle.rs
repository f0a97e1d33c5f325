//! Open/closed state for modal widgets.

use std::{cell::Cell, rc::Rc};

use crate::surface::Surface;

/// Suppresses page scrolling through the body's `overflow` style.
///
/// Clones share one holder count: scrolling comes back only when the last
/// holder releases.
#[derive(Debug, Clone)]
pub struct ScrollLock<E> {
    body: E,
    holders: Rc<Cell<usize>>,
}

impl<E: Surface> ScrollLock<E> {
    pub fn new(body: E) -> Self {
        Self {
            body,
            holders: Rc::new(Cell::new(0)),
        }
    }

    pub fn lock(&self) {
        self.holders.set(self.holders.get() + 1);
        self.apply();
    }

    pub fn release(&self) {
        self.holders.set(self.holders.get().saturating_sub(1));
        self.apply();
    }

    pub fn is_locked(&self) -> bool {
        self.holders.get() > 0
    }

    /// Bring the body style in line with the holder count.
    pub fn apply(&self) {
        if self.is_locked() {
            self.body.set_style("overflow", "hidden");
        } else {
            self.body.clear_style("overflow");
        }
    }
}

/// A panel that is either open or closed.
///
/// While open the panel (and its trigger, when given) carry their active
/// classes and hold the page scroll lock. Closing gives the hold back.
#[derive(Debug)]
pub struct ModalToggle<E> {
    panel: E,
    panel_class: String,
    trigger: Option<(E, String)>,
    scroll: ScrollLock<E>,
    open: bool,
}

impl<E: Surface> ModalToggle<E> {
    pub fn new(panel: E, panel_class: impl Into<String>, scroll: ScrollLock<E>) -> Self {
        Self {
            panel,
            panel_class: panel_class.into(),
            trigger: None,
            scroll,
            open: false,
        }
    }

    /// Also mark `trigger` with `class` while open.
    pub fn with_trigger(mut self, trigger: E, class: impl Into<String>) -> Self {
        self.trigger = Some((trigger, class.into()));
        self
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.panel.add_class(&self.panel_class);
        if let Some((trigger, class)) = &self.trigger {
            trigger.add_class(class);
        }
        if !self.open {
            self.scroll.lock();
        }
        self.open = true;
    }

    pub fn close(&mut self) {
        self.panel.remove_class(&self.panel_class);
        if let Some((trigger, class)) = &self.trigger {
            trigger.remove_class(class);
        }
        if self.open {
            self.scroll.release();
        } else {
            self.scroll.apply();
        }
        self.open = false;
    }

    /// Flip the state and return whether the panel is now open.
    pub fn toggle(&mut self) -> bool {
        if self.open {
            self.close();
        } else {
            self.open();
        }
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::MemorySurface;

    #[test]
    fn test_open_locks_scroll_and_close_restores() {
        let panel = MemorySurface::new();
        let body = MemorySurface::new();
        let mut modal = ModalToggle::new(panel.clone(), "active", ScrollLock::new(body.clone()));

        modal.open();
        assert!(modal.is_open());
        assert!(panel.has_class("active"));
        assert_eq!(body.style("overflow").as_deref(), Some("hidden"));

        modal.close();
        assert!(!modal.is_open());
        assert!(!panel.has_class("active"));
        assert_eq!(body.style("overflow"), None);
    }

    #[test]
    fn test_toggle_marks_trigger() {
        let panel = MemorySurface::new();
        let trigger = MemorySurface::new();
        let mut modal = ModalToggle::new(panel, "mobile-active", ScrollLock::new(MemorySurface::new()))
            .with_trigger(trigger.clone(), "active");

        assert!(modal.toggle());
        assert!(trigger.has_class("active"));
        assert!(!modal.toggle());
        assert!(!trigger.has_class("active"));
    }

    #[test]
    fn test_shared_lock_held_until_last_modal_closes() {
        let body = MemorySurface::new();
        let lock = ScrollLock::new(body.clone());
        let mut search = ModalToggle::new(MemorySurface::new(), "active", lock.clone());
        let mut nav = ModalToggle::new(MemorySurface::new(), "mobile-active", lock.clone());

        search.open();
        nav.open();
        search.close();
        assert!(lock.is_locked());
        assert_eq!(body.style("overflow").as_deref(), Some("hidden"));

        // closing twice must not steal the other holder's lock
        search.close();
        assert!(lock.is_locked());

        nav.close();
        assert!(!lock.is_locked());
        assert_eq!(body.style("overflow"), None);
    }

    #[test]
    fn test_open_twice_holds_once() {
        let body = MemorySurface::new();
        let lock = ScrollLock::new(body.clone());
        let mut modal = ModalToggle::new(MemorySurface::new(), "active", lock.clone());

        modal.open();
        modal.open();
        modal.close();
        assert!(!lock.is_locked());
        assert_eq!(body.style("overflow"), None);
    }

    #[test]
    fn test_close_when_closed_still_releases_scroll() {
        let body = MemorySurface::new();
        body.set_style("overflow", "hidden");
        let mut modal = ModalToggle::new(MemorySurface::new(), "active", ScrollLock::new(body.clone()));

        modal.close();
        assert_eq!(body.style("overflow"), None);
    }
}
