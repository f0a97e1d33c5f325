//! One-time decorations: copy buttons, external links and the content fade-in.

use js_sys::{Function, Promise, Reflect};
use pagekit_core::{
    Result, Surface, UiError,
    config::DecorationConfig,
    decorate::{COPY_BUTTON_CLASS, FADE_IN_CLASS, is_external_link, mark_external},
};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, Window};

use crate::{
    context::PageContext,
    dom::{DomSurface, JsResultExt},
    listener::{Listener, after},
};

const EXTERNAL_LINK_SELECTOR: &str = "a[href^=\"http\"]";

/// Start `navigator.clipboard.writeText(text)`.
fn write_clipboard(window: &Window, text: &str) -> Result<Promise> {
    let clipboard = Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))
        .op("navigator.clipboard")?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(UiError::unsupported("navigator.clipboard"));
    }
    let write_text = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .op("clipboard.writeText")?
        .dyn_into::<Function>()
        .map_err(|_| UiError::unsupported("clipboard.writeText"))?;
    write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .op("clipboard.writeText")?
        .dyn_into::<Promise>()
        .map_err(|_| UiError::operation("clipboard.writeText", "did not return a promise"))
}

fn copy_code(window: Window, code: Element, button: Element, config: DecorationConfig) {
    let text = code.text_content().unwrap_or_default();
    let promise = match write_clipboard(&window, &text) {
        Ok(promise) => promise,
        Err(err) => {
            log::warn!("copy failed: {err}");
            return;
        }
    };

    wasm_bindgen_futures::spawn_local(async move {
        if let Err(err) = JsFuture::from(promise).await.op("clipboard.writeText") {
            log::warn!("copy failed: {err}");
            return;
        }
        button.set_text_content(Some(&config.copied_label));
        let label = config.copy_label;
        let reset = button.clone();
        let scheduled = after(&window, config.copied_reset_ms, move || {
            reset.set_text_content(Some(&label));
        });
        if let Err(err) = scheduled {
            log::debug!("{err}");
        }
    });
}

fn add_copy_button(ctx: &PageContext, code: Element) -> Result<Option<(Element, Listener)>> {
    let Some(parent) = code.parent_element() else {
        return Ok(None);
    };
    let config = &ctx.config.decorations;
    let button = ctx.document.create_element("button").op("createElement")?;
    button.set_class_name(COPY_BUTTON_CLASS);
    button.set_text_content(Some(&config.copy_label));
    parent.append_child(&button).op("appendChild")?;

    let window = ctx.window.clone();
    let config = config.clone();
    let target = button.clone();
    let listener = Listener::new(&button, "click", move |_| {
        copy_code(window.clone(), code.clone(), target.clone(), config.clone());
    })?;
    Ok(Some((button, listener)))
}

fn mark_external_links(ctx: &PageContext) -> usize {
    let hostname = ctx.window.location().hostname().unwrap_or_default();
    let mut marked = 0;
    for link in ctx.find_all(EXTERNAL_LINK_SELECTOR) {
        let external = link
            .get_attribute("href")
            .is_some_and(|href| is_external_link(&href, &hostname));
        if external {
            mark_external(&DomSurface::new(link));
            marked += 1;
        }
    }
    marked
}

/// Owns the copy buttons it appended; dropping it removes them.
pub struct DecorationsWidget {
    buttons: Vec<(Element, Listener)>,
}

impl DecorationsWidget {
    pub fn attach(ctx: &PageContext) -> Result<Self> {
        let config = &ctx.config.decorations;
        let mut buttons = Vec::new();

        if config.copy_buttons {
            for code in ctx.find_all(&ctx.config.selectors.code_block) {
                match add_copy_button(ctx, code) {
                    Ok(Some(button)) => buttons.push(button),
                    Ok(None) => {}
                    Err(err) => log::warn!("copy button not added: {err}"),
                }
            }
        }

        if config.external_links {
            let marked = mark_external_links(ctx);
            log::debug!("marked {marked} external links");
        }

        if let Some(main) = ctx.find(&ctx.config.selectors.site_main) {
            DomSurface::new(main).add_class(FADE_IN_CLASS);
        }

        Ok(Self { buttons })
    }
}

impl Drop for DecorationsWidget {
    fn drop(&mut self) {
        for (button, _listener) in self.buttons.drain(..) {
            button.remove();
        }
    }
}
