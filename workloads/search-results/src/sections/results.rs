//! Results section - product grid, skeleton and empty state.

use crate::escape::{html_escape, search_href};
use crate::sections::{render_explanation, render_suggestions};
use storefront_search::highlight::Segment;
use storefront_search::present::{EmptyView, ProductCard, ResultsView};
use storefront_search::search::FilterSelection;

/// Render the product grid.
pub fn render_results(view: &ResultsView) -> String {
    let products_html: String = view.cards.iter().map(render_product_card).collect();

    format!(
        r#"<section class="search-results" data-section="results">
    <div class="product-grid">
        {}
    </div>
</section>"#,
        products_html
    )
}

/// Render highlighted text, wrapping matches in `<mark>`.
pub fn render_segments(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|s| {
            if s.is_match {
                format!("<mark>{}</mark>", html_escape(&s.text))
            } else {
                html_escape(&s.text)
            }
        })
        .collect()
}

fn render_product_card(card: &ProductCard) -> String {
    let name = render_segments(&card.name);
    let plain_name: String = card.name.iter().map(|s| s.text.as_str()).collect();

    let category = if card.category.is_empty() {
        String::new()
    } else {
        format!(
            r#"<span class="badge category-badge">{}</span>"#,
            html_escape(&card.category)
        )
    };
    let discount = card
        .discount_badge
        .as_deref()
        .map(|d| format!(r#"<span class="badge discount-badge">{}</span>"#, d))
        .unwrap_or_default();
    let rank = card
        .recommendation_rank
        .map(|r| format!(r#"<span class="badge rank-badge">#{}</span>"#, r))
        .unwrap_or_default();
    let byline = card
        .byline
        .as_deref()
        .map(|b| format!(r#"<div class="product-byline">{}</div>"#, html_escape(b)))
        .unwrap_or_default();
    let list_price = card
        .list_price
        .map(|m| format!(r#"<s class="list-price">{}</s>"#, m.display()))
        .unwrap_or_default();
    let savings = card
        .savings
        .map(|m| format!(r#"<div class="savings">ประหยัด {}</div>"#, m.display()))
        .unwrap_or_default();

    format!(
        r#"<article class="product-card" data-product-id="{}">
    <div class="product-image">
        <img src="{}" alt="{}" loading="lazy">
        {}{}{}
    </div>
    <div class="product-info">
        <h3 class="product-title">{}</h3>
        <div class="product-detail">{}</div>
        {}
        <div class="price-row">
            {}
            <span class="views">{} views</span>
        </div>
        <div class="product-price">{}</div>
        {}
    </div>
    <a href="{}" class="product-link" target="_blank" rel="noopener noreferrer">ดูรายละเอียด</a>
</article>"#,
        html_escape(card.id.as_str()),
        html_escape(&card.image),
        html_escape(&plain_name),
        category,
        discount,
        rank,
        name,
        render_segments(&card.detail),
        byline,
        list_price,
        html_escape(&card.views),
        card.sell_price.display(),
        savings,
        html_escape(&card.link),
    )
}

/// Render `count` placeholder cards.
pub fn render_results_skeleton(count: usize) -> String {
    let cards: String = (0..count)
        .map(|_| {
            r#"<div class="product-card skeleton">
        <div class="skeleton-image"></div>
        <div class="skeleton-text"></div>
        <div class="skeleton-text short"></div>
        <div class="skeleton-text short"></div>
    </div>"#
        })
        .collect();

    format!(
        r#"<section class="search-results skeleton" data-section="results" aria-busy="true">
    <div class="product-grid">
        {}
    </div>
</section>"#,
        cards
    )
}

/// Render the no-products state, used for failed searches too.
pub fn render_empty_state(view: &EmptyView, filters: &FilterSelection) -> String {
    let retry = view
        .query
        .as_deref()
        .map(|q| {
            format!(
                r#"<a class="retry" href="{}">ค้นหาอีกครั้ง</a>"#,
                html_escape(&search_href(q, filters))
            )
        })
        .unwrap_or_default();

    format!(
        r#"{}
<section class="search-results empty" data-section="results">
    <div class="empty-state">
        <h2>{}</h2>
        <p>{}</p>
        {}
    </div>
</section>
{}"#,
        render_explanation(view.explanation.as_deref()),
        html_escape(view.title),
        html_escape(view.hint),
        retry,
        render_suggestions(&view.suggestions, filters)
    )
}
