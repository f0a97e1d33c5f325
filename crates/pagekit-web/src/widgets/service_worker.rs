//! Service worker registration.

use js_sys::Reflect;
use pagekit_core::{Result, UiError};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{ServiceWorkerRegistration, Window};

use crate::{context::PageContext, dom::JsResultExt, widgets::on_load};

async fn register(window: Window, script: String) -> Result<String> {
    let navigator = window.navigator();
    let supported = Reflect::has(&navigator, &JsValue::from_str("serviceWorker")).unwrap_or(false);
    if !supported {
        return Err(UiError::unsupported("serviceWorker"));
    }

    let registration = JsFuture::from(navigator.service_worker().register(&script))
        .await
        .op("serviceWorker.register")?
        .dyn_into::<ServiceWorkerRegistration>()
        .map_err(|_| UiError::operation("serviceWorker.register", "not a registration"))?;
    Ok(registration.scope())
}

/// Register the configured worker script once the page has loaded.
pub fn schedule_registration(ctx: &PageContext) -> Result<()> {
    let window = ctx.window.clone();
    let script = ctx.config.service_worker.script.clone();
    on_load(ctx, move || {
        wasm_bindgen_futures::spawn_local(async move {
            match register(window, script).await {
                Ok(scope) => log::info!("service worker registered: {scope}"),
                Err(UiError::Unsupported { .. }) => {}
                Err(err) => log::warn!("service worker registration failed: {err}"),
            }
        });
    })
}
