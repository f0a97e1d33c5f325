//! Event listeners and timers tied to the lifetime of their owner.

use pagekit_core::Result;
use wasm_bindgen::{JsCast, prelude::*};
use web_sys::{AddEventListenerOptions, Event, EventTarget, Window};

use crate::dom::JsResultExt;

/// A registered event listener. Dropping it removes the listener.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .op("addEventListener")?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }

    /// A listener that never calls `preventDefault`, for scroll and resize.
    pub fn passive<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .op("addEventListener")?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

impl std::fmt::Debug for Listener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listener").field("event", &self.event).finish()
    }
}

/// Run `callback` once, the next time `event` fires on `target`.
///
/// The registration cannot be withdrawn; use it for page lifecycle events.
pub fn once<F>(target: &EventTarget, event: &str, callback: F) -> Result<()>
where
    F: FnOnce() + 'static,
{
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    let callback = Closure::once_into_js(callback);
    target
        .add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.unchecked_ref(),
            &options,
        )
        .op("addEventListener")
}

/// `setTimeout` takes an `i32`; longer delays saturate.
pub fn timeout_ms(delay_ms: u32) -> i32 {
    i32::try_from(delay_ms).unwrap_or(i32::MAX)
}

/// A pending `setTimeout`. Dropping it before it fires cancels it.
pub struct Timeout {
    window: Window,
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn new<F>(window: &Window, delay_ms: u32, callback: F) -> Result<Self>
    where
        F: FnOnce() + 'static,
    {
        let mut callback = Some(callback);
        let callback = Closure::<dyn FnMut()>::new(move || {
            if let Some(callback) = callback.take() {
                callback();
            }
        });
        let handle = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                timeout_ms(delay_ms),
            )
            .op("setTimeout")?;
        Ok(Self {
            window: window.clone(),
            handle,
            _callback: callback,
        })
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        self.window.clear_timeout_with_handle(self.handle);
    }
}

/// Run `callback` after `delay_ms`. The timer cannot be cancelled.
pub fn after<F>(window: &Window, delay_ms: u32, callback: F) -> Result<()>
where
    F: FnOnce() + 'static,
{
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            Closure::once_into_js(callback).unchecked_ref(),
            timeout_ms(delay_ms),
        )
        .op("setTimeout")
        .map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_ms_saturates() {
        assert_eq!(timeout_ms(300), 300);
        assert_eq!(timeout_ms(i32::MAX as u32), i32::MAX);
        assert_eq!(timeout_ms(u32::MAX), i32::MAX);
    }
}
