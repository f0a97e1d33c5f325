//! Mobile navigation drawer.

use crate::{
    surface::Surface,
    toggle::{ModalToggle, ScrollLock},
};

/// Class added to the menu while the drawer is open.
pub const MENU_OPEN_CLASS: &str = "mobile-active";
/// Class added to the toggle button while the drawer is open.
pub const TOGGLE_OPEN_CLASS: &str = "active";

/// Drawer state plus the rules for dismissing it.
#[derive(Debug)]
pub struct MobileNav<E> {
    drawer: ModalToggle<E>,
    breakpoint: f64,
}

impl<E: Surface> MobileNav<E> {
    pub fn new(toggle: E, menu: E, scroll: ScrollLock<E>, breakpoint: f64) -> Self {
        Self {
            drawer: ModalToggle::new(menu, MENU_OPEN_CLASS, scroll)
                .with_trigger(toggle, TOGGLE_OPEN_CLASS),
            breakpoint,
        }
    }

    pub fn is_open(&self) -> bool {
        self.drawer.is_open()
    }

    pub fn toggle(&mut self) -> bool {
        self.drawer.toggle()
    }

    pub fn close(&mut self) {
        self.drawer.close();
    }

    /// A click landed somewhere on the page. `inside` is true when it hit
    /// the toggle or the menu.
    pub fn on_document_click(&mut self, inside: bool) -> bool {
        self.dismiss_if(!inside)
    }

    /// The viewport was resized to `width`.
    pub fn on_resize(&mut self, width: f64) -> bool {
        self.dismiss_if(width > self.breakpoint)
    }

    pub fn on_key(&mut self, key: &str) -> bool {
        self.dismiss_if(key == "Escape")
    }

    fn dismiss_if(&mut self, condition: bool) -> bool {
        if condition && self.drawer.is_open() {
            self.drawer.close();
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::MemorySurface;

    struct Fixture {
        nav: MobileNav<MemorySurface>,
        toggle: MemorySurface,
        menu: MemorySurface,
        body: MemorySurface,
    }

    fn fixture() -> Fixture {
        let toggle = MemorySurface::new();
        let menu = MemorySurface::new();
        let body = MemorySurface::new();
        let nav = MobileNav::new(
            toggle.clone(),
            menu.clone(),
            ScrollLock::new(body.clone()),
            768.0,
        );
        Fixture {
            nav,
            toggle,
            menu,
            body,
        }
    }

    #[test]
    fn test_toggle_opens_drawer_and_locks_scroll() {
        let mut f = fixture();
        assert!(f.nav.toggle());

        assert!(f.menu.has_class("mobile-active"));
        assert!(f.toggle.has_class("active"));
        assert_eq!(f.body.style("overflow").as_deref(), Some("hidden"));
    }

    #[test]
    fn test_outside_click_closes_and_restores_scroll() {
        let mut f = fixture();
        f.nav.toggle();

        assert!(!f.nav.on_document_click(true));
        assert!(f.nav.is_open());

        assert!(f.nav.on_document_click(false));
        assert!(!f.nav.is_open());
        assert_eq!(f.body.style("overflow"), None);
    }

    #[test]
    fn test_resize_past_breakpoint_closes() {
        let mut f = fixture();
        f.nav.toggle();

        assert!(!f.nav.on_resize(768.0));
        assert!(f.nav.on_resize(1024.0));
        assert!(!f.menu.has_class("mobile-active"));
        assert_eq!(f.body.style("overflow"), None);
    }

    #[test]
    fn test_escape_closes() {
        let mut f = fixture();
        f.nav.toggle();

        assert!(!f.nav.on_key("Enter"));
        assert!(f.nav.on_key("Escape"));
        assert_eq!(f.body.style("overflow"), None);
    }

    #[test]
    fn test_dismiss_rules_ignore_closed_drawer() {
        let mut f = fixture();
        assert!(!f.nav.on_document_click(false));
        assert!(!f.nav.on_resize(2000.0));
        assert!(!f.nav.on_key("Escape"));
    }
}
