//! Page load timing report.

use js_sys::Reflect;
use pagekit_core::{
    Result, UiError,
    perf::{FirstPaint, PageTiming, PerformanceReport},
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Performance, PerformanceEntry, Window};

use crate::{context::PageContext, listener::after, widgets::on_load};

fn first_paint(performance: &Performance) -> FirstPaint {
    let supported =
        Reflect::has(performance, &JsValue::from_str("getEntriesByType")).unwrap_or(false);
    if !supported {
        return FirstPaint::Unsupported;
    }
    performance
        .get_entries_by_type("paint")
        .iter()
        .filter_map(|entry| entry.dyn_into::<PerformanceEntry>().ok())
        .find(|entry| entry.name() == "first-paint")
        .map_or(FirstPaint::Unavailable, |entry| FirstPaint::At(entry.start_time()))
}

/// Report for the current page, once `load` has completed.
pub fn collect(window: &Window) -> Result<PerformanceReport> {
    let performance = window
        .performance()
        .ok_or_else(|| UiError::unsupported("performance"))?;
    let timing = performance.timing();
    Ok(PerformanceReport::new(
        PageTiming {
            navigation_start: timing.navigation_start(),
            dom_content_loaded_end: timing.dom_content_loaded_event_end(),
            load_event_end: timing.load_event_end(),
        },
        first_paint(&performance),
    ))
}

/// Log the timing report after `load`. `loadEventEnd` is only filled in once
/// the load handlers have returned, hence the extra tick.
pub fn schedule_report(ctx: &PageContext) -> Result<()> {
    let window = ctx.window.clone();
    on_load(ctx, move || {
        let timer = window.clone();
        let scheduled = after(&timer, 0, move || match collect(&window) {
            Ok(report) => log::info!("{report}"),
            Err(err) => log::info!("performance report skipped: {err}"),
        });
        if let Err(err) = scheduled {
            log::debug!("{err}");
        }
    })
}
