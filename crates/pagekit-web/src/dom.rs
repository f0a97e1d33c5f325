//! `web-sys` adapters for the core capabilities.

use pagekit_core::{Result, Surface, UiError};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, NodeList};

/// Convert a rejected JS call into a core operation error.
pub fn js_error(operation: &'static str, value: JsValue) -> UiError {
    let message = value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| String::from(err.message()))
        })
        .unwrap_or_else(|| format!("{value:?}"));
    UiError::operation(operation, message)
}

/// Attach an operation name to JS results.
pub trait JsResultExt<T> {
    fn op(self, operation: &'static str) -> Result<T>;
}

impl<T> JsResultExt<T> for std::result::Result<T, JsValue> {
    fn op(self, operation: &'static str) -> Result<T> {
        self.map_err(|value| js_error(operation, value))
    }
}

/// Collect the elements of a node list, skipping non-element nodes.
pub fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// First descendant of `parent` matching `selector`.
pub fn select_in(parent: &Element, selector: &str) -> Option<Element> {
    match parent.query_selector(selector) {
        Ok(found) => found,
        Err(err) => {
            log::warn!("invalid selector {selector:?}: {}", js_error("querySelector", err));
            None
        }
    }
}

/// All descendants of `parent` matching `selector`.
pub fn select_all_in(parent: &Element, selector: &str) -> Vec<Element> {
    match parent.query_selector_all(selector) {
        Ok(list) => elements(&list),
        Err(err) => {
            log::warn!("invalid selector {selector:?}: {}", js_error("querySelectorAll", err));
            Vec::new()
        }
    }
}

/// An element handed to core widgets.
#[derive(Debug, Clone, PartialEq)]
pub struct DomSurface(Element);

impl DomSurface {
    pub fn new(element: Element) -> Self {
        Self(element)
    }

    pub fn element(&self) -> &Element {
        &self.0
    }

    fn log_failure(&self, operation: &'static str, result: std::result::Result<(), JsValue>) {
        if let Err(err) = result.op(operation) {
            log::debug!("{err}");
        }
    }
}

impl From<Element> for DomSurface {
    fn from(element: Element) -> Self {
        Self(element)
    }
}

impl From<HtmlElement> for DomSurface {
    fn from(element: HtmlElement) -> Self {
        Self(element.into())
    }
}

impl Surface for DomSurface {
    fn add_class(&self, class: &str) {
        self.log_failure("classList.add", self.0.class_list().add_1(class));
    }

    fn remove_class(&self, class: &str) {
        self.log_failure("classList.remove", self.0.class_list().remove_1(class));
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.log_failure("setAttribute", self.0.set_attribute(name, value));
    }

    fn remove_attribute(&self, name: &str) {
        self.log_failure("removeAttribute", self.0.remove_attribute(name));
    }

    fn set_style(&self, property: &str, value: &str) {
        if let Some(element) = self.0.dyn_ref::<HtmlElement>() {
            self.log_failure("style.setProperty", element.style().set_property(property, value));
        }
    }

    fn clear_style(&self, property: &str) {
        if let Some(element) = self.0.dyn_ref::<HtmlElement>() {
            let removed = element.style().remove_property(property).map(|_| ());
            self.log_failure("style.removeProperty", removed);
        }
    }
}
