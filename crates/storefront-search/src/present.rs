//! View models for the results page.
//!
//! Everything here is a pure function of a [`SearchSnapshot`] or of the
//! values inside it. Renderers only read these views; they never look at the
//! lifecycle or the raw result.

use crate::catalog::Product;
use crate::highlight::{Highlighter, Segment};
use crate::ids::ProductId;
use crate::money::{group_thousands, Money};
use crate::search::{FilterAction, FilterSelection, Lifecycle, SearchResult, SearchSnapshot};

/// Recommendations shown in the summary box.
pub const MAX_RECOMMENDATIONS: usize = 3;
/// Suggestions shown under the header.
pub const MAX_SUGGESTIONS: usize = 5;
/// Placeholder cards shown while a search is pending.
pub const SKELETON_CARDS: usize = 8;

pub const EMPTY_TITLE: &str = "ไม่พบสินค้าที่ตรงกับการค้นหา";
pub const EMPTY_HINT: &str = "ลองใช้คำค้นหาอื่น หรือปรับเปลี่ยนเงื่อนไขการค้นหา";

/// Baht price with grouping and glyph, e.g. `฿1,234`.
pub fn format_price(amount: i64) -> String {
    Money::baht(amount).display()
}

/// Page views: literal below 1000, otherwise thousands to one decimal.
pub fn format_views(views: u64) -> String {
    if views < 1000 {
        views.to_string()
    } else {
        let tenths = (views + 50) / 100;
        format!("{}.{}K", tenths / 10, tenths % 10)
    }
}

/// Results header text.
pub fn results_heading(count: usize) -> String {
    format!("ผลการค้นหา ({} รายการ)", group_thousands(count as i64))
}

/// One product as shown in the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    pub id: ProductId,
    pub name: Vec<Segment>,
    pub detail: Vec<Segment>,
    pub category: String,
    /// `brand | warranty`, skipping empty parts.
    pub byline: Option<String>,
    pub image: String,
    pub link: String,
    pub sell_price: Money,
    /// Struck-through list price, when it differs from the selling price.
    pub list_price: Option<Money>,
    /// e.g. `-17%`.
    pub discount_badge: Option<String>,
    pub savings: Option<Money>,
    pub views: String,
    /// Rank from the service's recommendations, if listed there.
    pub recommendation_rank: Option<u32>,
}

impl ProductCard {
    pub fn new(product: &Product, highlighter: &Highlighter, result: &SearchResult) -> Self {
        let byline = [product.brand.as_str(), product.warranty.as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" | ");

        Self {
            id: product.id.clone(),
            name: highlighter.segments(&product.name),
            detail: highlighter.segments(&product.detail),
            category: product.category.clone(),
            byline: (!byline.is_empty()).then_some(byline),
            image: product.image.clone(),
            link: product.link.clone(),
            sell_price: product.sell_price(),
            list_price: product.has_markdown().then(|| product.list_price()),
            discount_badge: product
                .is_discounted()
                .then(|| format!("-{}%", product.discount)),
            savings: product.savings().filter(|_| product.is_discounted()),
            views: format_views(product.views),
            recommendation_rank: result.recommendation_for(&product.id).map(|r| r.rank),
        }
    }
}

/// One line of the recommendation box.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationSummary {
    pub rank: u32,
    pub product_id: ProductId,
    /// Name of the ranked product, when it is on this page.
    pub product_name: Option<String>,
    /// Reasons joined with `, `.
    pub reasons: String,
}

/// The best-ranked recommendations, at most [`MAX_RECOMMENDATIONS`].
pub fn recommendation_summary(result: &SearchResult) -> Vec<RecommendationSummary> {
    let mut ranked: Vec<_> = result.recommendations.iter().collect();
    ranked.sort_by_key(|r| r.rank);
    ranked
        .into_iter()
        .take(MAX_RECOMMENDATIONS)
        .map(|r| RecommendationSummary {
            rank: r.rank,
            product_id: r.product_id.clone(),
            product_name: result.product(&r.product_id).map(|p| p.name.clone()),
            reasons: r.reasons.join(", "),
        })
        .collect()
}

/// A removable badge for one active filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChip {
    pub label: String,
    /// Dispatching this removes the filter.
    pub remove: FilterAction,
}

/// Chips for every active filter: brands, then CPU, then budget.
pub fn active_filter_chips(selection: &FilterSelection) -> Vec<FilterChip> {
    let brands = selection.brands.iter().map(|brand| FilterChip {
        label: brand.clone(),
        remove: FilterAction::ToggleBrand(brand.clone()),
    });
    let cpu = selection.cpu.iter().map(|cpu| FilterChip {
        label: cpu.clone(),
        remove: FilterAction::ClearCpu,
    });
    let price = selection.price_range.iter().map(|range| FilterChip {
        label: range.label(),
        remove: FilterAction::ClearPriceRange,
    });
    brands.chain(cpu).chain(price).collect()
}

/// Shown when a search produced no products, including failures.
#[derive(Debug, Clone, PartialEq)]
pub struct EmptyView {
    pub query: Option<String>,
    pub title: &'static str,
    pub hint: &'static str,
    pub explanation: Option<String>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    pub query: Option<String>,
    pub heading: String,
    pub explanation: Option<String>,
    pub total_found: u64,
    pub cards: Vec<ProductCard>,
    pub recommendations: Vec<RecommendationSummary>,
    pub suggestions: Vec<String>,
}

/// What the page shows.
#[derive(Debug, Clone, PartialEq)]
pub enum PageView {
    /// Nothing searched yet.
    Idle,
    Loading { skeletons: usize },
    Empty(EmptyView),
    Results(ResultsView),
}

impl PageView {
    pub fn name(&self) -> &'static str {
        match self {
            PageView::Idle => "idle",
            PageView::Loading { .. } => "loading",
            PageView::Empty(_) => "empty",
            PageView::Results(_) => "results",
        }
    }
}

/// Build the page for `snapshot`.
pub fn present(snapshot: &SearchSnapshot) -> PageView {
    match &snapshot.state {
        Lifecycle::Idle => return PageView::Idle,
        Lifecycle::Pending => {
            return PageView::Loading {
                skeletons: SKELETON_CARDS,
            }
        }
        Lifecycle::Succeeded(_) | Lifecycle::Failed(_) => {}
    }
    match snapshot.displayed_result() {
        Some(result) => present_result(&result, snapshot.query.as_deref()),
        None => PageView::Idle,
    }
}

/// Build the page for a settled result.
pub fn present_result(result: &SearchResult, query: Option<&str>) -> PageView {
    let explanation = (!result.explanation.is_empty()).then(|| result.explanation.clone());
    let suggestions: Vec<String> = result
        .suggestions
        .iter()
        .take(MAX_SUGGESTIONS)
        .cloned()
        .collect();

    if result.is_empty() {
        return PageView::Empty(EmptyView {
            query: query.map(str::to_string),
            title: EMPTY_TITLE,
            hint: EMPTY_HINT,
            explanation,
            suggestions,
        });
    }

    let highlighter = Highlighter::new(query.unwrap_or_default());
    PageView::Results(ResultsView {
        query: query.map(str::to_string),
        heading: results_heading(result.products.len()),
        explanation,
        total_found: result.total_found(),
        cards: result
            .products
            .iter()
            .map(|p| ProductCard::new(p, &highlighter, result))
            .collect(),
        recommendations: recommendation_summary(result),
        suggestions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{PriceRange, RecommendationItem, DEGRADED_EXPLANATION};

    fn snapshot(state: Lifecycle, query: Option<&str>) -> SearchSnapshot {
        SearchSnapshot {
            state,
            query: query.map(str::to_string),
            filters: FilterSelection::default(),
        }
    }

    fn text(segments: &[Segment]) -> String {
        segments.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_format_views() {
        assert_eq!(format_views(0), "0");
        assert_eq!(format_views(999), "999");
        assert_eq!(format_views(1000), "1.0K");
        assert_eq!(format_views(12500), "12.5K");
        assert_eq!(format_views(1250), "1.3K");
        assert_eq!(format_views(3250), "3.3K");
        assert_eq!(format_views(1049), "1.0K");
        assert_eq!(format_views(999_950), "1000.0K");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(1234), "\u{0e3f}1,234");
        assert_eq!(format_price(25990), "\u{0e3f}25,990");
        assert_eq!(format_price(0), "\u{0e3f}0");
    }

    #[test]
    fn test_card_without_markdown() {
        let product = Product::new(1, "Logitech G102", 1000);
        let card = ProductCard::new(&product, &Highlighter::new(""), &SearchResult::default());
        assert_eq!(card.list_price, None);
        assert_eq!(card.savings, None);
        assert_eq!(card.discount_badge, None);
        assert_eq!(card.sell_price.display_amount(), "1,000");
    }

    #[test]
    fn test_card_with_markdown() {
        let product = Product::new(2, "HyperX Alloy", 1200).with_sale(1000, 17);
        let card = ProductCard::new(&product, &Highlighter::new(""), &SearchResult::default());
        assert_eq!(card.list_price.map(|m| m.display_amount()).as_deref(), Some("1,200"));
        assert_eq!(card.sell_price.display_amount(), "1,000");
        assert_eq!(card.savings.map(|m| m.display_amount()).as_deref(), Some("200"));
        assert_eq!(card.discount_badge.as_deref(), Some("-17%"));
    }

    #[test]
    fn test_price_change_without_discount_shows_strikethrough_only() {
        let product = Product::new(3, "Dell Inspiron", 22990).with_sale(21990, 0);
        let card = ProductCard::new(&product, &Highlighter::new(""), &SearchResult::default());
        assert!(card.list_price.is_some());
        assert_eq!(card.savings, None);
        assert_eq!(card.discount_badge, None);
    }

    #[test]
    fn test_card_byline_and_highlight() {
        let mut product = Product::new(4, "Acer Swift Go", 24990)
            .with_brand("Acer")
            .with_detail("Intel Core Ultra 5, OLED");
        product.warranty = "2 ปี".into();

        let card = ProductCard::new(&product, &Highlighter::new("swift"), &SearchResult::default());
        assert_eq!(card.byline.as_deref(), Some("Acer | 2 ปี"));
        assert_eq!(text(&card.name), "Acer Swift Go");
        assert!(card.name.iter().any(|s| s.is_match && s.text == "Swift"));
        assert!(card.detail.iter().all(|s| !s.is_match));
    }

    #[test]
    fn test_recommendation_summary_orders_and_truncates() {
        let result = SearchResult::new(vec![Product::new(7, "Lenovo Yoga", 30000)], "")
            .with_recommendations(vec![
                RecommendationItem::new(9, 4).with_reasons(["d"]),
                RecommendationItem::new(8, 2).with_reasons(["b"]),
                RecommendationItem::new(7, 1).with_reasons(["จอสวย", "เบา"]),
                RecommendationItem::new(6, 3).with_reasons(Vec::<String>::new()),
            ]);

        let summary = recommendation_summary(&result);
        assert_eq!(summary.iter().map(|r| r.rank).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(summary[0].reasons, "จอสวย, เบา");
        assert_eq!(summary[0].product_name.as_deref(), Some("Lenovo Yoga"));
        assert_eq!(summary[1].product_name, None);
        assert_eq!(summary[2].reasons, "");
    }

    #[test]
    fn test_present_lifecycle_states() {
        assert_eq!(present(&snapshot(Lifecycle::Idle, None)), PageView::Idle);
        assert_eq!(
            present(&snapshot(Lifecycle::Pending, Some("rtx"))),
            PageView::Loading { skeletons: 8 }
        );
    }

    #[test]
    fn test_empty_success_is_empty_view_not_skeleton() {
        let result = SearchResult::new(Vec::new(), "ไม่มีสินค้าในงบนี้");
        let view = present(&snapshot(Lifecycle::Succeeded(result), Some("rtx 4090")));
        let PageView::Empty(empty) = view else {
            panic!("expected empty view, got {}", view.name());
        };
        assert_eq!(empty.title, EMPTY_TITLE);
        assert_eq!(empty.explanation.as_deref(), Some("ไม่มีสินค้าในงบนี้"));
    }

    #[test]
    fn test_failure_is_empty_view_with_error_explanation() {
        let view = present(&snapshot(Lifecycle::Failed("timeout".into()), Some("rtx")));
        let PageView::Empty(empty) = view else {
            panic!("expected empty view");
        };
        assert_eq!(empty.explanation.as_deref(), Some(DEGRADED_EXPLANATION));
    }

    #[test]
    fn test_results_view() {
        let result = SearchResult::new(
            vec![
                Product::new(1, "MSI Thin GF63", 23990).with_views(12500),
                Product::new(2, "MSI Cyborg 15", 29990),
            ],
            "",
        )
        .with_total_found(57)
        .with_recommendations(vec![RecommendationItem::new(2, 1)])
        .with_suggestions(["a", "b", "c", "d", "e", "f"]);

        let PageView::Results(view) = present(&snapshot(Lifecycle::Succeeded(result), Some("msi")))
        else {
            panic!("expected results");
        };
        assert_eq!(view.heading, "ผลการค้นหา (2 รายการ)");
        assert_eq!(view.explanation, None);
        assert_eq!(view.total_found, 57);
        assert_eq!(view.suggestions.len(), MAX_SUGGESTIONS);
        assert_eq!(view.cards[0].views, "12.5K");
        assert_eq!(view.cards[0].recommendation_rank, None);
        assert_eq!(view.cards[1].recommendation_rank, Some(1));
        // Service order is kept.
        assert_eq!(text(&view.cards[0].name), "MSI Thin GF63");
    }

    #[test]
    fn test_active_filter_chips() {
        let selection = FilterSelection::default()
            .apply(FilterAction::ToggleBrand("MSI".into()))
            .apply(FilterAction::ToggleBrand("Acer".into()))
            .apply(FilterAction::SetCpu("AMD".into()))
            .apply(FilterAction::SetPriceRange(PriceRange::new(0, 10000).unwrap()));

        let chips = active_filter_chips(&selection);
        let labels: Vec<_> = chips.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Acer", "MSI", "AMD", "ไม่เกิน 10,000"]);

        let cleared = chips
            .iter()
            .fold(selection.clone(), |s, chip| s.apply(chip.remove.clone()));
        assert!(cleared.is_empty());
    }
}
