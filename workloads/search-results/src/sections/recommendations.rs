//! Recommendation summary box.

use crate::escape::html_escape;
use storefront_search::present::RecommendationSummary;

/// Render the top recommendations; empty when there are none.
pub fn render_recommendations(items: &[RecommendationSummary]) -> String {
    if items.is_empty() {
        return String::new();
    }

    let items_html: String = items
        .iter()
        .map(|item| {
            let name = item.product_name.as_deref().unwrap_or(item.product_id.as_str());
            let reasons = if item.reasons.is_empty() {
                String::new()
            } else {
                format!(
                    r#"<p class="recommendation-reasons">{}</p>"#,
                    html_escape(&item.reasons)
                )
            };
            format!(
                r#"<li class="recommendation" data-product-id="{}">
            <span class="rank-badge">#{}</span>
            <span class="recommendation-name">{}</span>
            {}
        </li>"#,
                html_escape(item.product_id.as_str()),
                item.rank,
                html_escape(name),
                reasons
            )
        })
        .collect();

    format!(
        r#"<section class="recommendations" data-section="recommendations">
    <h2>สินค้าแนะนำ</h2>
    <ol>
        {}
    </ol>
</section>"#,
        items_html
    )
}
