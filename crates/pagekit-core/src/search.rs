//! In-page post search.
//!
//! Records are collected once from the rendered post cards (or a JSON index)
//! and matched with case-insensitive literal substrings. There is no ranking:
//! results come back in index order.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::{
    config::SearchConfig,
    debounce::{Debouncer, Ticket},
    error::Result,
    surface::Surface,
    toggle::{ModalToggle, ScrollLock},
};

/// Class that shows the search overlay.
pub const OVERLAY_OPEN_CLASS: &str = "active";

/// One searchable post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchRecord {
    /// Post title.
    pub title: String,

    /// Post URL.
    pub url: String,

    /// Summary shown under the title.
    #[serde(default)]
    pub excerpt: String,

    /// Tags in display order.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Lowercased full text of the post card.
    #[serde(default)]
    pub searchable_text: String,
}

impl SearchRecord {
    /// Create a record, lowercasing `full_text` for matching.
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        excerpt: impl Into<String>,
        tags: Vec<String>,
        full_text: &str,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            excerpt: excerpt.into(),
            tags,
            searchable_text: full_text.to_lowercase(),
        }
    }

    /// Whether this record matches an already lowercased needle.
    fn matches(&self, needle: &str) -> bool {
        self.searchable_text.contains(needle)
            || self.title.to_lowercase().contains(needle)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
    }

    /// Records loaded from JSON may omit the searchable text.
    fn normalized(mut self) -> Self {
        if self.searchable_text.is_empty() {
            let mut text = format!("{} {}", self.title, self.excerpt);
            for tag in &self.tags {
                text.push(' ');
                text.push_str(tag);
            }
            self.searchable_text = text.to_lowercase();
        } else {
            self.searchable_text = self.searchable_text.to_lowercase();
        }
        self
    }
}

/// Result of running a query.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum SearchOutcome {
    /// No query, or one below the minimum length.
    #[default]
    Idle,
    /// The query ran and matched nothing.
    Empty { query: String },
    /// Matching records in index order.
    Matches {
        query: String,
        records: Vec<SearchRecord>,
    },
}

impl SearchOutcome {
    pub fn records(&self) -> &[SearchRecord] {
        match self {
            Self::Matches { records, .. } => records,
            _ => &[],
        }
    }

    pub fn query(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Empty { query } | Self::Matches { query, .. } => Some(query),
        }
    }
}

/// Immutable list of records with the lookup rules.
#[derive(Debug, Clone)]
pub struct SearchIndex {
    records: Vec<SearchRecord>,
    min_query_chars: usize,
    max_results: usize,
}

impl SearchIndex {
    pub fn new(records: Vec<SearchRecord>, config: &SearchConfig) -> Self {
        Self {
            records: records.into_iter().map(SearchRecord::normalized).collect(),
            min_query_chars: config.min_query_chars,
            max_results: config.max_results,
        }
    }

    /// Parse a JSON array of records.
    pub fn from_json(json: &str, config: &SearchConfig) -> Result<Self> {
        let records: Vec<SearchRecord> = serde_json::from_str(json)?;
        Ok(Self::new(records, config))
    }

    pub fn records(&self) -> &[SearchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether `text` is long enough to run a lookup.
    pub fn accepts(&self, text: &str) -> bool {
        text.chars().count() >= self.min_query_chars
    }

    /// Records whose title, tags or text contain `text`, capped at the
    /// configured maximum.
    pub fn query(&self, text: &str) -> Vec<&SearchRecord> {
        if !self.accepts(text) {
            return Vec::new();
        }
        let needle = text.to_lowercase();
        self.records
            .iter()
            .filter(|record| record.matches(&needle))
            .take(self.max_results)
            .collect()
    }

    /// Run `text` and describe the outcome for rendering.
    pub fn lookup(&self, text: &str) -> SearchOutcome {
        if !self.accepts(text) {
            return SearchOutcome::Idle;
        }
        let records: Vec<SearchRecord> = self.query(text).into_iter().cloned().collect();
        if records.is_empty() {
            SearchOutcome::Empty {
                query: text.to_string(),
            }
        } else {
            SearchOutcome::Matches {
                query: text.to_string(),
                records,
            }
        }
    }
}

/// A run of highlighted or plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Plain(&'a str),
    Marked(&'a str),
}

/// Case-insensitive literal matcher for one query.
#[derive(Debug, Clone)]
pub struct Highlighter {
    pattern: Option<Regex>,
}

impl Highlighter {
    /// Compile `query` as an escaped literal. An empty query, or one that
    /// fails to compile, highlights nothing.
    pub fn new(query: &str) -> Self {
        if query.is_empty() {
            return Self { pattern: None };
        }
        let pattern = RegexBuilder::new(&regex::escape(query))
            .case_insensitive(true)
            .build()
            .map_err(|err| tracing::debug!(%err, query, "highlight disabled"))
            .ok();
        Self { pattern }
    }

    /// Split `text` into plain and marked runs, preserving original casing.
    pub fn segments<'a>(&self, text: &'a str) -> Vec<Segment<'a>> {
        let Some(pattern) = &self.pattern else {
            return vec![Segment::Plain(text)];
        };

        let mut segments = Vec::new();
        let mut last = 0;
        for found in pattern.find_iter(text) {
            if found.start() > last {
                segments.push(Segment::Plain(&text[last..found.start()]));
            }
            segments.push(Segment::Marked(found.as_str()));
            last = found.end();
        }
        if last < text.len() || segments.is_empty() {
            segments.push(Segment::Plain(&text[last..]));
        }
        segments
    }

    /// Wrap every match in `<mark>` tags.
    pub fn apply(&self, text: &str) -> String {
        self.segments(text)
            .into_iter()
            .map(|segment| match segment {
                Segment::Plain(s) => s.to_string(),
                Segment::Marked(s) => format!("<mark>{s}</mark>"),
            })
            .collect()
    }
}

/// Wrap every case-insensitive occurrence of `query` in `text` with `<mark>`.
pub fn highlight(text: &str, query: &str) -> String {
    Highlighter::new(query).apply(text)
}

/// What a key press means for the search overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Escape while open.
    Close,
    /// Ctrl/Cmd + K; the default browser action must be suppressed.
    Toggle,
}

/// Interpret a key press. `command` is true when Ctrl or Meta is held.
pub fn shortcut(key: &str, command: bool, is_open: bool) -> Option<Shortcut> {
    if key == "Escape" && is_open {
        return Some(Shortcut::Close);
    }
    if command && key == "k" {
        return Some(Shortcut::Toggle);
    }
    None
}

/// Overlay state, pending input and last outcome of the search widget.
pub struct SearchSession<E> {
    index: SearchIndex,
    overlay: ModalToggle<E>,
    debouncer: Debouncer<String>,
    outcome: SearchOutcome,
}

impl<E: Surface> SearchSession<E> {
    pub fn new(index: SearchIndex, overlay: E, scroll: ScrollLock<E>, config: &SearchConfig) -> Self {
        Self {
            index,
            overlay: ModalToggle::new(overlay, OVERLAY_OPEN_CLASS, scroll),
            debouncer: Debouncer::new(config.debounce_ms),
            outcome: SearchOutcome::Idle,
        }
    }

    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    /// Swap in a new index, e.g. after a JSON index arrives.
    pub fn replace_index(&mut self, index: SearchIndex) {
        tracing::debug!(records = index.len(), "search index replaced");
        self.index = index;
    }

    pub fn is_open(&self) -> bool {
        self.overlay.is_open()
    }

    pub fn outcome(&self) -> &SearchOutcome {
        &self.outcome
    }

    pub fn debounce_ms(&self) -> u32 {
        self.debouncer.wait_ms()
    }

    /// Open the overlay with no prior results.
    pub fn open(&mut self) {
        self.outcome = SearchOutcome::Idle;
        self.overlay.open();
    }

    /// Close the overlay, dropping pending input and results.
    pub fn close(&mut self) {
        self.debouncer.cancel();
        self.outcome = SearchOutcome::Idle;
        self.overlay.close();
    }

    /// Returns whether the overlay is now open.
    pub fn toggle(&mut self) -> bool {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
        self.is_open()
    }

    /// Record a keystroke; the caller fires the ticket after the quiet period.
    pub fn input(&mut self, value: impl Into<String>) -> Ticket {
        self.debouncer.schedule(value.into())
    }

    /// Run the query for `ticket` if it is still the latest input.
    pub fn fire(&mut self, ticket: Ticket) -> Option<&SearchOutcome> {
        let text = self.debouncer.fire(ticket)?;
        self.outcome = self.index.lookup(&text);
        Some(&self.outcome)
    }
}
