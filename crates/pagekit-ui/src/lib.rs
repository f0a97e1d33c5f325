//! pagekit UI Components
//!
//! Leptos views for the parts of pagekit that render their own markup. The
//! views are mounted into server-rendered pages by `pagekit-web`.
//!
//! # Components
//!
//! - [`SearchResults`] - Results panel with `<mark>` highlighting
//! - [`ReadingProgressBar`] - Fixed bar tracking reading progress
//! - [`SwitchLoader`] - Transient language switch notice
//!
//! # Example
//!
//! ```ignore
//! use leptos::prelude::*;
//! use pagekit_core::SearchOutcome;
//! use pagekit_ui::{MountedView, SearchResults};
//!
//! let outcome = RwSignal::new(SearchOutcome::Idle);
//! let view = MountedView::mount(container, move || view! { <SearchResults outcome=outcome /> });
//! ```

pub mod mount;
pub mod progress;
pub mod search;

pub use mount::MountedView;
pub use progress::{ReadingProgressBar, SwitchLoader};
pub use search::{Highlighted, SearchResults};
