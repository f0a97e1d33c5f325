//! pagekit Core Library
//!
//! Widget logic for the pagekit blog enhancements, independent of the browser.
//!
//! Every widget mutates the page only through the [`Surface`] capability and
//! persists only through [`PreferenceStorage`], so the same code runs against
//! `web-sys` elements in the browser and [`MemorySurface`] in tests.
//!
//! # Modules
//!
//! - [`config`] - Page configuration (selectors, thresholds, delays)
//! - [`theme`] - Light/dark preference with system fallback
//! - [`search`] - In-page post index, highlighting and the search session
//! - [`toggle`] - Modal open/close state with scroll locking
//! - [`nav`] - Mobile navigation drawer
//! - [`scroll`] - Back-to-top, reading progress and anchor offsets
//! - [`lazy`] - Deferred image reveal
//! - [`language`] - Language switch links
//! - [`decorate`] - One-time page decorations
//! - [`perf`] - Page load timing report

pub mod config;
pub mod debounce;
pub mod decorate;
pub mod error;
pub mod language;
pub mod lazy;
pub mod nav;
pub mod perf;
pub mod scroll;
pub mod search;
pub mod storage;
pub mod surface;
pub mod theme;
pub mod toggle;

pub use config::SiteConfig;
pub use debounce::{Debouncer, Ticket};
pub use error::{Result, UiError};
pub use search::{Highlighter, SearchIndex, SearchOutcome, SearchRecord, SearchSession, Segment};
pub use storage::{MemoryStorage, PreferenceStorage};
pub use surface::{MemorySurface, Surface};
pub use theme::{Theme, ThemeManager};
pub use toggle::{ModalToggle, ScrollLock};
