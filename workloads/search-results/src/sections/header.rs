//! Search header section - result count, explanation and suggestions.

use crate::escape::{html_escape, search_href};
use storefront_search::money::group_thousands;
use storefront_search::present::ResultsView;
use storefront_search::search::FilterSelection;

/// Render the header above the product grid.
pub fn render_search_header(view: &ResultsView) -> String {
    let shown = view.cards.len() as u64;
    let total = if view.total_found > shown {
        format!(
            r#"<p class="result-count">แสดง {} จาก {} รายการ</p>"#,
            group_thousands(shown as i64),
            group_thousands(view.total_found as i64)
        )
    } else {
        String::new()
    };

    format!(
        r#"<section class="search-header" data-section="search-header">
    <div class="search-info">
        <h1>{}</h1>
        {}
    </div>
</section>
{}"#,
        html_escape(&view.heading),
        total,
        render_explanation(view.explanation.as_deref())
    )
}

/// The service's explanation banner; empty when there is none.
pub fn render_explanation(explanation: Option<&str>) -> String {
    match explanation {
        Some(text) => format!(
            r#"<div class="explanation" data-section="explanation"><p>{}</p></div>"#,
            html_escape(text)
        ),
        None => String::new(),
    }
}

/// Suggested follow-up queries. Each link keeps the current filters.
pub fn render_suggestions(suggestions: &[String], filters: &FilterSelection) -> String {
    if suggestions.is_empty() {
        return String::new();
    }

    let items: String = suggestions
        .iter()
        .map(|s| {
            format!(
                r#"<li><a href="{}" class="suggestion">{}</a></li>"#,
                html_escape(&search_href(s, filters)),
                html_escape(s)
            )
        })
        .collect();

    format!(
        r#"<nav class="suggestions" data-section="suggestions">
    <div class="suggestions-label">คำแนะนำการค้นหา</div>
    <ul>{}</ul>
</nav>"#,
        items
    )
}

/// Render skeleton placeholder for header.
pub fn render_header_skeleton() -> String {
    r#"<section class="search-header skeleton" data-section="search-header">
    <div class="search-info">
        <div class="skeleton-text skeleton-title"></div>
        <div class="skeleton-text skeleton-count"></div>
    </div>
</section>"#
        .to_string()
}
