//! Deferred image loading binding.

use std::rc::Rc;

use js_sys::{Array, Reflect};
use pagekit_core::{Result, lazy::LazyImages};
use wasm_bindgen::{JsCast, JsValue, prelude::*};
use web_sys::{IntersectionObserver, IntersectionObserverEntry};

use crate::{
    context::PageContext,
    dom::{DomSurface, JsResultExt},
};

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Observes deferred images until they scroll into view.
pub struct LazyImagesWidget {
    observer: Option<(IntersectionObserver, ObserverCallback)>,
}

impl LazyImagesWidget {
    pub fn attach(ctx: &PageContext) -> Result<Self> {
        let supported =
            Reflect::has(&ctx.window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false);
        Self::attach_with(ctx, supported)
    }

    /// Attach with `observer_supported` telling whether `IntersectionObserver`
    /// exists. Without it every deferred image loads immediately.
    pub fn attach_with(ctx: &PageContext, observer_supported: bool) -> Result<Self> {
        let lazy = Rc::new(LazyImages::new(&ctx.config.lazy_images));
        let images = ctx.find_all(&lazy.selector());

        if !observer_supported {
            log::info!(
                "IntersectionObserver unavailable, loading {} images now",
                images.len()
            );
            for image in images {
                lazy.reveal(&DomSurface::new(image));
            }
            return Ok(Self { observer: None });
        }

        if images.is_empty() {
            return Ok(Self { observer: None });
        }

        let revealing = lazy.clone();
        let callback: ObserverCallback =
            Closure::new(move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let image = entry.target();
                    revealing.reveal(&DomSurface::new(image.clone()));
                    observer.unobserve(&image);
                }
            });

        let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())
            .op("IntersectionObserver")?;
        for image in &images {
            observer.observe(image);
        }
        log::debug!("observing {} deferred images", images.len());

        Ok(Self {
            observer: Some((observer, callback)),
        })
    }
}

impl Drop for LazyImagesWidget {
    fn drop(&mut self) {
        if let Some((observer, _callback)) = &self.observer {
            observer.disconnect();
        }
    }
}
