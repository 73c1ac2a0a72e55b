//! Filters panel - brand, CPU and budget selection with active chips.

use crate::escape::{html_escape, search_href};
use storefront_search::present::active_filter_chips;
use storefront_search::search::{FilterSelection, BRANDS, CPU_TYPES, PRICE_BUCKETS};

/// Render the filter panel as a GET form that resubmits the search.
pub fn render_filters(selection: &FilterSelection, query: &str) -> String {
    // Catalogue brands first, then any other selected brand so it stays visible.
    let extra_brands = selection
        .brands
        .iter()
        .filter(|b| !BRANDS.contains(&b.as_str()))
        .map(String::as_str);
    let brands_html: String = BRANDS
        .iter()
        .copied()
        .chain(extra_brands)
        .map(|brand| {
            render_option(
                "checkbox",
                "brand",
                brand,
                brand,
                selection.has_brand(brand),
            )
        })
        .collect();

    let cpus_html: String = CPU_TYPES
        .iter()
        .map(|cpu| render_option("radio", "cpu", cpu, cpu, selection.cpu.as_deref() == Some(*cpu)))
        .collect();

    let selected_range = selection.price_range;
    let budgets_html: String = PRICE_BUCKETS
        .iter()
        .map(|bucket| {
            render_option(
                "radio",
                "price",
                &bucket.range().to_string(),
                bucket.label,
                selected_range == Some(bucket.range()),
            )
        })
        .collect();

    format!(
        r#"<aside class="filters-panel" data-section="filters">
    <form action="/search" method="GET">
        <input type="hidden" name="q" value="{}">
        <div class="filters-header">
            <h2>ตัวกรอง</h2>
            <a class="clear-all" href="{}">ล้างทั้งหมด</a>
        </div>
        <div class="filter-group" data-filter="brand">
            <h3 class="filter-title">แบรนด์ยอดนิยม</h3>
            {}
        </div>
        <div class="filter-group" data-filter="cpu">
            <h3 class="filter-title">ประเภท CPU</h3>
            {}
        </div>
        <div class="filter-group" data-filter="price">
            <h3 class="filter-title">ช่วงราคา</h3>
            {}
        </div>
        <button type="submit" class="apply-filters">ค้นหา</button>
    </form>
    {}
</aside>"#,
        html_escape(query),
        html_escape(&search_href(query, &FilterSelection::default())),
        brands_html,
        cpus_html,
        budgets_html,
        render_active_filters(selection, query)
    )
}

fn render_option(kind: &str, name: &str, value: &str, label: &str, checked: bool) -> String {
    format!(
        r#"<label class="filter-option">
                <input type="{}" name="{}" value="{}"{}>
                <span class="filter-label">{}</span>
            </label>"#,
        kind,
        name,
        html_escape(value),
        if checked { " checked" } else { "" },
        html_escape(label)
    )
}

/// Active selections as chips; each chip links to the search without it.
pub fn render_active_filters(selection: &FilterSelection, query: &str) -> String {
    let chips = active_filter_chips(selection);
    if chips.is_empty() {
        return String::new();
    }

    let chips_html: String = chips
        .into_iter()
        .map(|chip| {
            let without = selection.apply(chip.remove);
            format!(
                r#"<span class="active-filter">{}<a href="{}" aria-label="ลบตัวกรอง">&times;</a></span>"#,
                html_escape(&chip.label),
                html_escape(&search_href(query, &without))
            )
        })
        .collect();

    format!(
        r#"<div class="active-filters">
        <span class="active-filters-label">ตัวกรองที่เลือก:</span>
        {}
    </div>"#,
        chips_html
    )
}
