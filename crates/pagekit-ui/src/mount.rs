//! Mounting views into server-rendered markup.

use std::any::Any;

use leptos::prelude::*;
use web_sys::HtmlElement;

/// A view appended to an existing element.
///
/// Dropping the value unmounts the view and disposes its reactive owner.
pub struct MountedView {
    _handle: Box<dyn Any>,
}

impl MountedView {
    /// Append the view built by `view` to `parent`.
    pub fn mount<F, N>(parent: HtmlElement, view: F) -> Self
    where
        F: FnOnce() -> N + 'static,
        N: IntoView + 'static,
    {
        Self {
            _handle: Box::new(leptos::mount::mount_to(parent, view)),
        }
    }
}

impl std::fmt::Debug for MountedView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MountedView").finish_non_exhaustive()
    }
}
