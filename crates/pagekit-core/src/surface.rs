//! The mutation capability widgets are written against.
//!
//! A [`Surface`] is one element a widget is allowed to change. Lookups and
//! event subscription stay with the caller, which hands widgets only the
//! surfaces they own.

use std::{
    cell::RefCell,
    collections::{BTreeMap, BTreeSet},
    rc::Rc,
};

/// An element whose classes, attributes and inline styles can be changed.
///
/// Implementations swallow platform failures; a mutation that cannot be
/// applied leaves the element unchanged.
pub trait Surface {
    fn add_class(&self, class: &str);

    fn remove_class(&self, class: &str);

    fn has_class(&self, class: &str) -> bool;

    /// Add or remove `class` depending on `enabled`.
    fn set_class(&self, class: &str, enabled: bool) {
        if enabled {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    fn attribute(&self, name: &str) -> Option<String>;

    fn set_attribute(&self, name: &str, value: &str);

    fn remove_attribute(&self, name: &str);

    /// Set an inline style property.
    fn set_style(&self, property: &str, value: &str);

    /// Remove an inline style property, restoring the stylesheet value.
    fn clear_style(&self, property: &str);
}

#[derive(Debug, Default)]
struct MemoryState {
    classes: BTreeSet<String>,
    attributes: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
}

/// In-memory [`Surface`].
///
/// Clones share state, so a test can keep a handle to an element it gave to
/// a widget and inspect it afterwards.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    state: Rc<RefCell<MemoryState>>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a surface with preset attributes.
    pub fn with_attributes<'a>(attributes: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let surface = Self::new();
        for (name, value) in attributes {
            surface.set_attribute(name, value);
        }
        surface
    }

    /// Current value of an inline style property.
    pub fn style(&self, property: &str) -> Option<String> {
        self.state.borrow().styles.get(property).cloned()
    }

    pub fn classes(&self) -> Vec<String> {
        self.state.borrow().classes.iter().cloned().collect()
    }
}

impl Surface for MemorySurface {
    fn add_class(&self, class: &str) {
        self.state.borrow_mut().classes.insert(class.to_string());
    }

    fn remove_class(&self, class: &str) {
        self.state.borrow_mut().classes.remove(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.state.borrow().classes.contains(class)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.state.borrow().attributes.get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.state
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn remove_attribute(&self, name: &str) {
        self.state.borrow_mut().attributes.remove(name);
    }

    fn set_style(&self, property: &str, value: &str) {
        self.state
            .borrow_mut()
            .styles
            .insert(property.to_string(), value.to_string());
    }

    fn clear_style(&self, property: &str) {
        self.state.borrow_mut().styles.remove(property);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_surface_classes() {
        let surface = MemorySurface::new();
        surface.add_class("active");
        assert!(surface.has_class("active"));

        surface.set_class("active", false);
        assert!(!surface.has_class("active"));
    }

    #[test]
    fn test_memory_surface_clones_share_state() {
        let surface = MemorySurface::with_attributes([("data-src", "/a.png")]);
        let handle = surface.clone();

        surface.remove_attribute("data-src");
        surface.set_style("overflow", "hidden");

        assert_eq!(handle.attribute("data-src"), None);
        assert_eq!(handle.style("overflow").as_deref(), Some("hidden"));
    }
}
