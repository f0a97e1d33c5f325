//! Overlays appended to the page body.

use leptos::prelude::*;

const TRACK_STYLE: &str = "position: fixed; top: 0; left: 0; width: 100%; height: 3px; \
     background-color: transparent; z-index: 1000; pointer-events: none;";

const FILL_STYLE: &str = "height: 100%; \
     background: linear-gradient(90deg, var(--accent-color), var(--accent-hover)); \
     transition: width 0.1s ease;";

/// Inline style of the bar fill at `percent`.
pub fn fill_style(percent: f64) -> String {
    let percent = if percent.is_finite() {
        percent.clamp(0.0, 100.0)
    } else {
        0.0
    };
    format!("{FILL_STYLE} width: {percent}%;")
}

/// Fixed reading progress bar.
#[component]
pub fn ReadingProgressBar(
    /// Progress through the post, 0 to 100.
    #[prop(into)]
    percent: Signal<f64>,
) -> impl IntoView {
    view! {
      <div class="reading-progress" style=TRACK_STYLE>
        <div class="reading-progress-bar" style=move || fill_style(percent.get())></div>
      </div>
    }
}

/// Notice shown while the language switch navigates away.
#[component]
pub fn SwitchLoader(
    /// Text of the notice.
    text: String,
) -> impl IntoView {
    view! { <div class="language-switch-loader">{text}</div> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_style_width() {
        assert!(fill_style(42.5).ends_with("width: 42.5%;"));
        assert!(fill_style(0.0).ends_with("width: 0%;"));
    }

    #[test]
    fn test_fill_style_rejects_invalid_values() {
        assert!(fill_style(f64::NAN).ends_with("width: 0%;"));
        assert!(fill_style(250.0).ends_with("width: 100%;"));
    }
}
