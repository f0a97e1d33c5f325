//! Search results panel.
//!
//! Record text is rendered as text nodes with matches wrapped in `<mark>`
//! elements, so post titles and excerpts are never parsed as markup.

use leptos::{either::Either, prelude::*};
use pagekit_core::{Highlighter, SearchOutcome, SearchRecord, Segment};

/// Message shown when a query matched no posts.
pub fn no_results_message(query: &str) -> String {
    format!("No posts found for \"{query}\"")
}

/// Search results list component.
///
/// Renders nothing while idle.
#[component]
pub fn SearchResults(
    /// The outcome of the latest query.
    #[prop(into)]
    outcome: Signal<SearchOutcome>,
) -> impl IntoView {
    move || match outcome.get() {
        SearchOutcome::Idle => ().into_any(),
        SearchOutcome::Empty { query } => view! {
          <div class="search-no-results">
            <p>{no_results_message(&query)}</p>
          </div>
        }
        .into_any(),
        SearchOutcome::Matches { query, records } => {
            let highlighter = Highlighter::new(&query);
            records
                .into_iter()
                .map(|record| {
                    view! { <SearchResultItem record=record highlighter=highlighter.clone() /> }
                })
                .collect_view()
                .into_any()
        }
    }
}

/// Individual search result item component.
#[component]
fn SearchResultItem(
    /// The record to display.
    record: SearchRecord,
    /// Matcher for the query that produced the record.
    highlighter: Highlighter,
) -> impl IntoView {
    let SearchRecord {
        title,
        url,
        excerpt,
        tags,
        ..
    } = record;
    let tag_list = (!tags.is_empty()).then(|| {
        view! {
          <div class="search-result-tags">
            {tags.into_iter().map(|tag| view! { <span class="tag">{tag}</span> }).collect_view()}
          </div>
        }
    });

    view! {
      <div class="search-result">
        <h4>
          <a href=url>
            <Highlighted text=title highlighter=highlighter.clone() />
          </a>
        </h4>
        <p>
          <Highlighted text=excerpt highlighter=highlighter />
        </p>
        {tag_list}
      </div>
    }
}

/// Text with every match of `highlighter` wrapped in `<mark>`.
#[component]
pub fn Highlighted(
    /// Text to render.
    text: String,
    /// Matcher for the active query.
    highlighter: Highlighter,
) -> impl IntoView {
    highlighter
        .segments(&text)
        .into_iter()
        .map(|segment| match segment {
            Segment::Plain(plain) => Either::Left(plain.to_string()),
            Segment::Marked(marked) => Either::Right(view! { <mark>{marked.to_string()}</mark> }),
        })
        .collect_view()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_results_message() {
        assert_eq!(no_results_message("zig"), "No posts found for \"zig\"");
    }
}
