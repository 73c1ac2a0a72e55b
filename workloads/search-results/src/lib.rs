//! Search results page rendered from `storefront-search` view models.
//!
//! The page is a shell (head, site header with the search box) around a
//! two-column layout: filters on the side, and the main column showing
//! whatever the [`PageView`] says: nothing yet, a loading skeleton, the
//! empty state, or the explanation, recommendations and product grid.

mod escape;
mod sections;
mod shell;

pub use escape::{html_escape, search_href};

use sections::{
    render_empty_state, render_filters, render_header_skeleton, render_recommendations,
    render_results, render_results_skeleton, render_search_header, render_suggestions,
};
use shell::{site_header, HeadContent, Shell};
use storefront_search::present::PageView;
use storefront_search::search::FilterSelection;

/// Render the complete HTML document for `view`.
pub fn render_page(view: &PageView, filters: &FilterSelection) -> String {
    let query = page_query(view);
    let shell = create_shell(query);

    let mut html = shell.render_opening();
    html.push_str(r#"<div class="search-layout"><div class="search-sidebar">"#);
    html.push_str(&render_filters(filters, query));
    html.push_str(r#"</div><div class="search-main">"#);
    html.push_str(&render_main(view, filters));
    html.push_str("</div></div>\n");
    html.push_str(&shell.render_closing());
    html
}

/// Render only the main column for `view`.
pub fn render_main(view: &PageView, filters: &FilterSelection) -> String {
    match view {
        PageView::Idle => String::new(),
        PageView::Loading { skeletons } => {
            format!(
                "{}\n{}",
                render_header_skeleton(),
                render_results_skeleton(*skeletons)
            )
        }
        PageView::Empty(empty) => render_empty_state(empty, filters),
        PageView::Results(results) => [
            render_search_header(results),
            render_suggestions(&results.suggestions, filters),
            render_recommendations(&results.recommendations),
            render_results(results),
        ]
        .join("\n"),
    }
}

fn page_query(view: &PageView) -> &str {
    let query = match view {
        PageView::Empty(empty) => empty.query.as_deref(),
        PageView::Results(results) => results.query.as_deref(),
        PageView::Idle | PageView::Loading { .. } => None,
    };
    query.unwrap_or_default()
}

fn create_shell(query: &str) -> Shell {
    let title = if query.is_empty() {
        "JIB Computer Shop - AI-Powered Smart Search".to_string()
    } else {
        format!("{} - ผลการค้นหา", query)
    };

    let head = HeadContent::new(title)
        .with_meta("viewport", "width=device-width, initial-scale=1")
        .with_meta("description", "ค้นหาสินค้าไอทีด้วย AI")
        .with_style(SEARCH_STYLES);

    Shell::new(head).with_body_start(site_header(query))
}

const SEARCH_STYLES: &str = r##"
:root {
    --primary: #2563eb;
    --accent: #7c3aed;
    --bg: #f8fafc;
    --card-bg: #ffffff;
    --text: #1e293b;
    --text-muted: #64748b;
    --border: #e2e8f0;
    --success: #16a34a;
    --error: #ef4444;
}

* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: 'Sarabun', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
    background: var(--bg);
    color: var(--text);
    line-height: 1.5;
}

.site-header {
    display: flex;
    align-items: center;
    gap: 2rem;
    padding: 1rem 2rem;
    background: var(--card-bg);
    border-bottom: 1px solid var(--border);
    position: sticky;
    top: 0;
    z-index: 100;
}

.logo { font-size: 1.5rem; font-weight: 700; color: var(--primary); text-decoration: none; }

.search-form { display: flex; flex: 1; max-width: 720px; }

.search-form input {
    flex: 1;
    padding: 0.75rem 1rem;
    border: 1px solid var(--border);
    border-radius: 8px 0 0 8px;
    font-size: 1rem;
}

.search-form button, .apply-filters {
    padding: 0.75rem 1.5rem;
    background: var(--primary);
    color: white;
    border: none;
    border-radius: 0 8px 8px 0;
    cursor: pointer;
}

main { max-width: 1400px; margin: 0 auto; padding: 2rem; }

.search-layout { display: grid; grid-template-columns: 280px 1fr; gap: 2rem; }

/* Filters */
.filters-panel { background: var(--card-bg); border-radius: 12px; padding: 1.5rem; height: fit-content; }
.filters-header { display: flex; justify-content: space-between; margin-bottom: 1rem; }
.clear-all { color: var(--accent); font-size: 0.875rem; }
.filter-group { margin-bottom: 1.25rem; }
.filter-title { font-size: 0.875rem; font-weight: 600; color: var(--text-muted); margin-bottom: 0.5rem; }
.filter-option { display: flex; align-items: center; gap: 0.5rem; padding: 0.25rem 0; }
.apply-filters { border-radius: 8px; width: 100%; }
.active-filters { display: flex; flex-wrap: wrap; gap: 0.5rem; margin-top: 1rem; padding-top: 1rem; border-top: 1px solid var(--border); }
.active-filter { display: inline-flex; gap: 0.25rem; padding: 0.125rem 0.5rem; border-radius: 999px; background: #ede9fe; color: var(--accent); font-size: 0.75rem; }
.active-filter a { color: inherit; text-decoration: none; }

/* Header */
.search-header { margin-bottom: 1rem; }
.search-info h1 { font-size: 1.25rem; }
.result-count { color: var(--text-muted); }
.explanation { background: var(--card-bg); border: 1px solid var(--border); border-radius: 8px; padding: 1rem; margin-bottom: 1rem; }
.suggestions { margin-bottom: 1rem; }
.suggestions-label { font-size: 0.875rem; color: var(--text-muted); }
.suggestions ul { display: flex; flex-wrap: wrap; gap: 0.5rem; list-style: none; }
.suggestion { display: inline-block; padding: 0.25rem 0.75rem; border: 1px solid var(--border); border-radius: 999px; text-decoration: none; color: var(--text); }

/* Recommendations */
.recommendations { background: var(--card-bg); border-radius: 12px; padding: 1rem 1.5rem; margin-bottom: 1.5rem; }
.recommendations ol { list-style: none; display: grid; gap: 0.75rem; margin-top: 0.5rem; }
.recommendation-reasons { color: var(--text-muted); font-size: 0.875rem; }

/* Product grid */
.product-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 1.5rem; }
.product-card { background: var(--card-bg); border-radius: 12px; overflow: hidden; display: flex; flex-direction: column; }
.product-image { position: relative; aspect-ratio: 1; background: #f1f5f9; }
.product-image img { width: 100%; height: 100%; object-fit: contain; }
.badge { position: absolute; top: 0.5rem; padding: 0.125rem 0.5rem; border-radius: 4px; font-size: 0.75rem; color: white; }
.category-badge { left: 0.5rem; background: var(--primary); }
.discount-badge { right: 0.5rem; background: var(--error); }
.rank-badge { bottom: 0.5rem; left: 0.5rem; top: auto; background: var(--accent); color: white; border-radius: 4px; padding: 0 0.375rem; }
.recommendation .rank-badge { position: static; }
.product-info { padding: 1rem; flex: 1; }
.product-title { font-size: 1rem; font-weight: 500; margin-bottom: 0.5rem; }
.product-detail { font-size: 0.875rem; color: var(--text-muted); margin-bottom: 0.75rem; }
.product-byline { font-size: 0.75rem; color: var(--text-muted); margin-bottom: 0.5rem; }
.price-row { display: flex; justify-content: space-between; font-size: 0.875rem; }
.list-price { color: var(--text-muted); }
.views { color: var(--text-muted); font-size: 0.75rem; }
.product-price { font-size: 1.25rem; font-weight: 700; color: var(--primary); }
.savings { color: var(--success); font-size: 0.875rem; }
.product-link { display: block; margin: 0 1rem 1rem; padding: 0.5rem; text-align: center; background: var(--primary); color: white; border-radius: 6px; text-decoration: none; }
mark { background: #dbeafe; color: #1e40af; font-weight: 600; padding: 0 0.125rem; border-radius: 2px; }

/* Skeleton loading */
.skeleton .skeleton-text {
    height: 1rem;
    background: linear-gradient(90deg, #e2e8f0 25%, #f1f5f9 50%, #e2e8f0 75%);
    background-size: 200% 100%;
    animation: shimmer 1.5s infinite;
    border-radius: 4px;
    margin: 0.5rem 1rem;
}
.skeleton .skeleton-title { width: 60%; height: 1.5rem; }
.skeleton .skeleton-count { width: 40%; }
.skeleton .skeleton-text.short { width: 50%; }
.skeleton .skeleton-image { aspect-ratio: 1; background: #e2e8f0; }

@keyframes shimmer {
    0% { background-position: 200% 0; }
    100% { background-position: -200% 0; }
}

/* Empty state */
.empty-state { text-align: center; padding: 4rem 2rem; }
.empty-state h2 { margin-bottom: 0.5rem; }
.empty-state p { color: var(--text-muted); margin-bottom: 1.5rem; }
.retry { color: var(--primary); }

@media (max-width: 1024px) {
    .search-layout { grid-template-columns: 1fr; }
}

@media (max-width: 640px) {
    .site-header { flex-wrap: wrap; gap: 1rem; padding: 1rem; }
    .search-form { order: 3; flex-basis: 100%; }
    .product-grid { grid-template-columns: repeat(2, 1fr); gap: 1rem; }
}
"##;
