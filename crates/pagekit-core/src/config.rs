//! Page configuration.
//!
//! The configuration is embedded by the site template as a JSON document and
//! every field is optional; an empty object yields the stock markup contract.

use serde::{Deserialize, Serialize};

use crate::error::{Result, UiError};

/// Element id of the `<script type="application/json">` holding the config.
pub const CONFIG_ELEMENT_ID: &str = "pagekit-config";

/// Main configuration structure for pagekit.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SiteConfig {
    /// CSS selectors for the markup each widget binds to.
    #[serde(default)]
    pub selectors: Selectors,

    /// Theme preference settings.
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Search overlay settings.
    #[serde(default)]
    pub search: SearchConfig,

    /// Scroll and navigation thresholds.
    #[serde(default)]
    pub navigation: NavigationConfig,

    /// Language switcher settings.
    #[serde(default)]
    pub language: LanguageConfig,

    /// Deferred image settings.
    #[serde(default)]
    pub lazy_images: LazyImageConfig,

    /// One-time page decorations.
    #[serde(default)]
    pub decorations: DecorationConfig,

    /// Service worker registration.
    #[serde(default)]
    pub service_worker: ServiceWorkerConfig,

    /// Page timing report.
    #[serde(default)]
    pub performance: PerformanceConfig,

    /// Console logging.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Selectors describing the consumed markup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Selectors {
    pub theme_toggle: String,
    pub search_toggle: String,
    pub search_overlay: String,
    pub search_input: String,
    pub search_close: String,
    pub search_results: String,
    pub post_card: String,
    pub post_title_link: String,
    pub post_excerpt: String,
    pub post_tag: String,
    pub mobile_menu_toggle: String,
    pub nav_menu: String,
    pub back_to_top: String,
    pub post_content: String,
    pub language_switcher: String,
    pub language_option: String,
    pub code_block: String,
    pub site_main: String,
}

/// Theme preference configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThemeConfig {
    /// Storage key of the explicit preference.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Attribute set on the root element.
    #[serde(default = "default_theme_attribute")]
    pub attribute: String,
}

/// Search configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchConfig {
    /// Quiet period before a keystroke runs the query.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u32,

    /// Delay before focusing the input after opening.
    #[serde(default = "default_focus_delay_ms")]
    pub focus_delay_ms: u32,

    /// Queries shorter than this run no lookup.
    #[serde(default = "default_min_query_chars")]
    pub min_query_chars: usize,

    /// Maximum number of results shown.
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Optional JSON index replacing the scanned post cards.
    #[serde(default)]
    pub index_url: Option<String>,
}

/// Scroll and navigation thresholds, in CSS pixels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavigationConfig {
    /// Viewport width above which the mobile drawer closes.
    #[serde(default = "default_mobile_breakpoint")]
    pub mobile_breakpoint: f64,

    /// Fixed header height subtracted from anchor targets.
    #[serde(default = "default_header_offset")]
    pub header_offset: f64,

    /// Scroll offset past which the back-to-top button shows.
    #[serde(default = "default_back_to_top_threshold")]
    pub back_to_top_threshold: f64,
}

/// Language switcher configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LanguageConfig {
    /// Delay between activation and navigation.
    #[serde(default = "default_switch_delay_ms")]
    pub switch_delay_ms: u32,

    /// Text of the transient loader.
    #[serde(default = "default_loading_text")]
    pub loading_text: String,
}

/// Deferred image configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LazyImageConfig {
    /// Attribute carrying the deferred source.
    #[serde(default = "default_source_attribute")]
    pub source_attribute: String,

    /// Class added once the image is loaded.
    #[serde(default = "default_loaded_class")]
    pub loaded_class: String,
}

/// Decoration configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DecorationConfig {
    /// Attach copy buttons to code blocks.
    #[serde(default = "default_true")]
    pub copy_buttons: bool,

    /// Open external links in a new tab.
    #[serde(default = "default_true")]
    pub external_links: bool,

    #[serde(default = "default_copy_label")]
    pub copy_label: String,

    #[serde(default = "default_copied_label")]
    pub copied_label: String,

    /// How long the copied label stays before reverting.
    #[serde(default = "default_copied_reset_ms")]
    pub copied_reset_ms: u32,
}

/// Service worker configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceWorkerConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Script URL passed to `register`.
    #[serde(default = "default_worker_script")]
    pub script: String,
}

/// Page timing report configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PerformanceConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// One of `error`, `warn`, `info`, `debug`, `trace`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default value functions
fn default_storage_key() -> String {
    "theme".to_string()
}

fn default_theme_attribute() -> String {
    "data-theme".to_string()
}

fn default_debounce_ms() -> u32 {
    300
}

fn default_focus_delay_ms() -> u32 {
    100
}

fn default_min_query_chars() -> usize {
    2
}

fn default_max_results() -> usize {
    10
}

fn default_mobile_breakpoint() -> f64 {
    768.0
}

fn default_header_offset() -> f64 {
    80.0
}

fn default_back_to_top_threshold() -> f64 {
    300.0
}

fn default_switch_delay_ms() -> u32 {
    300
}

fn default_loading_text() -> String {
    "Switching language...".to_string()
}

fn default_source_attribute() -> String {
    "data-src".to_string()
}

fn default_loaded_class() -> String {
    "loaded".to_string()
}

fn default_true() -> bool {
    true
}

fn default_copy_label() -> String {
    "Copy".to_string()
}

fn default_copied_label() -> String {
    "Copied!".to_string()
}

fn default_copied_reset_ms() -> u32 {
    2000
}

fn default_worker_script() -> String {
    "/sw.js".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

impl Default for Selectors {
    fn default() -> Self {
        Self {
            theme_toggle: ".theme-toggle".to_string(),
            search_toggle: ".search-toggle".to_string(),
            search_overlay: ".search-overlay".to_string(),
            search_input: ".search-input".to_string(),
            search_close: ".search-close".to_string(),
            search_results: ".search-results-content".to_string(),
            post_card: ".post-card".to_string(),
            post_title_link: ".post-title a".to_string(),
            post_excerpt: ".post-excerpt".to_string(),
            post_tag: ".tag".to_string(),
            mobile_menu_toggle: ".mobile-menu-toggle".to_string(),
            nav_menu: ".nav-menu".to_string(),
            back_to_top: ".back-to-top".to_string(),
            post_content: ".post-content".to_string(),
            language_switcher: ".language-switcher".to_string(),
            language_option: ".lang-option".to_string(),
            code_block: "pre code".to_string(),
            site_main: ".site-main".to_string(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            attribute: default_theme_attribute(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            focus_delay_ms: default_focus_delay_ms(),
            min_query_chars: default_min_query_chars(),
            max_results: default_max_results(),
            index_url: None,
        }
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: default_mobile_breakpoint(),
            header_offset: default_header_offset(),
            back_to_top_threshold: default_back_to_top_threshold(),
        }
    }
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            switch_delay_ms: default_switch_delay_ms(),
            loading_text: default_loading_text(),
        }
    }
}

impl Default for LazyImageConfig {
    fn default() -> Self {
        Self {
            source_attribute: default_source_attribute(),
            loaded_class: default_loaded_class(),
        }
    }
}

impl Default for DecorationConfig {
    fn default() -> Self {
        Self {
            copy_buttons: true,
            external_links: true,
            copy_label: default_copy_label(),
            copied_label: default_copied_label(),
            copied_reset_ms: default_copied_reset_ms(),
        }
    }
}

impl Default for ServiceWorkerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            script: default_worker_script(),
        }
    }
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate configuration from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SiteConfig = serde_json::from_str(json)
            .map_err(|e| UiError::config_with_source("Failed to parse page config", e))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.theme.storage_key.is_empty() {
            return Err(UiError::config("theme.storage_key cannot be empty"));
        }

        if self.search.min_query_chars == 0 {
            return Err(UiError::config("search.min_query_chars must be at least 1"));
        }

        if self.search.max_results == 0 {
            return Err(UiError::config("search.max_results must be at least 1"));
        }

        if !LOG_LEVELS.contains(&self.logging.level.to_ascii_lowercase().as_str()) {
            return Err(UiError::config(format!(
                "logging.level must be one of {}, got {:?}",
                LOG_LEVELS.join(", "),
                self.logging.level
            )));
        }

        if self.search.debounce_ms == 0 {
            tracing::warn!("search.debounce_ms is 0, every keystroke runs a query");
        }

        Ok(())
    }
}
