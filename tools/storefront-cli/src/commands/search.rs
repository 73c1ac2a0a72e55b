//! Run a product search.

use std::fs;

use anyhow::{bail, Context as _, Result};
use console::style;
use search_results::render_page;
use serde_json::json;
use storefront_search::present::{present, EmptyView, PageView, ResultsView};
use storefront_search::search::{
    FilterSelection, FilterState, HttpSearchService, Lifecycle, PriceRange, QueryComposer,
    SearchController, SubmitOutcome,
};

use super::SearchArgs;
use crate::context::Context;
use crate::output::{state_badge, styled_segments};

/// Run the search command.
pub async fn run(args: SearchArgs, ctx: &Context) -> Result<()> {
    let config = &ctx.config.search;
    let text = args.query.join(" ");

    let mut composer = QueryComposer::new();
    if let Some(provider) = args.provider.or(config.llm_provider) {
        composer = composer.with_provider(provider);
    }

    let selection = initial_selection(&args.brands, args.cpu.as_deref(), args.price);
    let service = HttpSearchService::new(config);
    ctx.output.debug(&format!("POST {}", service.endpoint()));

    let controller = SearchController::new(service)
        .with_composer(composer)
        .with_filters(FilterState::with_selection(selection));

    let spinner = ctx.output.spinner(&format!("กำลังค้นหา \"{}\"...", text.trim()));
    let outcome = controller.submit(&text).await;
    spinner.finish_and_clear();

    if outcome == SubmitOutcome::Ignored {
        bail!("Search text is empty");
    }

    let snapshot = controller.snapshot();
    let view = present(&snapshot);

    if let Some(path) = &args.html {
        fs::write(path, render_page(&view, &snapshot.filters))
            .with_context(|| format!("Failed to write {}", path.display()))?;
        ctx.output.success(&format!("Wrote {}", path.display()));
    }

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "state": snapshot.state.name(),
            "query": snapshot.query,
            "filters": snapshot.filters,
            "result": snapshot.displayed_result(),
        }));
    } else {
        ctx.output.debug(&format!("state: {}", state_badge(snapshot.state.name())));
        let show_explanation = ctx.config.output.show_explanation;
        match &view {
            PageView::Results(results) => print_results(results, show_explanation, ctx),
            PageView::Empty(empty) => print_empty(empty, show_explanation, ctx),
            PageView::Idle | PageView::Loading { .. } => {}
        }
    }

    if let Lifecycle::Failed(reason) = &snapshot.state {
        bail!("Search failed: {reason}");
    }

    Ok(())
}

/// Selection built from command-line flags. Repeated brands count once.
fn initial_selection(
    brands: &[String],
    cpu: Option<&str>,
    price: Option<PriceRange>,
) -> FilterSelection {
    let state = FilterState::new();
    for brand in brands {
        if !state.selection().has_brand(brand) {
            state.toggle_brand(brand.clone());
        }
    }
    if let Some(cpu) = cpu {
        state.set_cpu(cpu.to_string());
    }
    if let Some(range) = price {
        state.set_price_range(range);
    }
    state.selection()
}

fn print_results(view: &ResultsView, show_explanation: bool, ctx: &Context) {
    ctx.output.header(&view.heading);
    if view.total_found > view.cards.len() as u64 {
        ctx.output.line(&format!(
            "แสดง {} จาก {} รายการ",
            view.cards.len(),
            view.total_found
        ));
    }
    if show_explanation {
        if let Some(explanation) = &view.explanation {
            ctx.output.info(explanation);
        }
    }

    if !view.recommendations.is_empty() {
        ctx.output.header("สินค้าแนะนำ");
        for rec in &view.recommendations {
            let name = rec
                .product_name
                .clone()
                .unwrap_or_else(|| rec.product_id.to_string());
            ctx.output
                .list_item(&format!("#{} {}: {}", rec.rank, style(name).bold(), rec.reasons));
        }
    }

    for (i, card) in view.cards.iter().enumerate() {
        let rank = card
            .recommendation_rank
            .map(|r| format!(" {}", style(format!("[#{r}]")).green()))
            .unwrap_or_default();
        ctx.output.line("");
        ctx.output
            .line(&format!("{}. {}{}", i + 1, styled_segments(&card.name), rank));

        let mut price = style(card.sell_price.display()).bold().to_string();
        if let Some(list) = &card.list_price {
            price.push_str(&format!(" {}", style(list.display()).dim().strikethrough()));
        }
        if let Some(badge) = &card.discount_badge {
            price.push_str(&format!(" {}", style(badge).red()));
        }
        ctx.output.kv("ราคา", &price);
        if let Some(savings) = &card.savings {
            ctx.output.kv("ประหยัด", &savings.display());
        }
        if let Some(byline) = &card.byline {
            ctx.output.kv("แบรนด์", byline);
        }
        if !card.category.is_empty() {
            ctx.output.kv("หมวดหมู่", &card.category);
        }
        ctx.output.kv("เข้าชม", &card.views);
        if !card.link.is_empty() {
            ctx.output.kv("ลิงก์", &card.link);
        }
    }

    print_suggestions(&view.suggestions, ctx);
}

fn print_empty(view: &EmptyView, show_explanation: bool, ctx: &Context) {
    ctx.output.header(view.title);
    ctx.output.line(view.hint);
    if show_explanation {
        if let Some(explanation) = &view.explanation {
            ctx.output.warn(explanation);
        }
    }
    print_suggestions(&view.suggestions, ctx);
}

fn print_suggestions(suggestions: &[String], ctx: &Context) {
    if suggestions.is_empty() {
        return;
    }
    ctx.output.header("คำแนะนำการค้นหา");
    for suggestion in suggestions {
        ctx.output.list_item(suggestion);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_selection_dedupes_brands() {
        let brands = vec!["ASUS".to_string(), "MSI".to_string(), "ASUS".to_string()];
        let selection = initial_selection(&brands, None, None);

        assert_eq!(selection.brands.len(), 2);
        assert!(selection.has_brand("ASUS"));
        assert!(selection.has_brand("MSI"));
    }

    #[test]
    fn test_initial_selection_applies_cpu_and_price() {
        let range: PriceRange = "10000-20000".parse().unwrap();
        let selection = initial_selection(&[], Some("AMD Ryzen"), Some(range));

        assert_eq!(selection.cpu.as_deref(), Some("AMD Ryzen"));
        assert_eq!(selection.price_range, Some(range));
        assert_eq!(selection.active_count(), 2);
    }

    #[test]
    fn test_initial_selection_empty() {
        let selection = initial_selection(&[], None, None);
        assert!(selection.is_empty());
    }
}
