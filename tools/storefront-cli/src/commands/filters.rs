//! List the filter catalogue.

use anyhow::Result;
use serde_json::json;
use storefront_search::search::{BRANDS, CPU_TYPES, PRICE_BUCKETS};

use super::FiltersArgs;
use crate::context::Context;

/// Run the filters command.
pub async fn run(_args: FiltersArgs, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        let budgets: Vec<_> = PRICE_BUCKETS
            .iter()
            .map(|b| json!({ "value": b.range().to_string(), "label": b.label }))
            .collect();
        ctx.output.json(&json!({
            "brands": BRANDS,
            "cpu": CPU_TYPES,
            "price": budgets,
        }));
        return Ok(());
    }

    ctx.output.header("แบรนด์ยอดนิยม (--brand)");
    for brand in BRANDS {
        ctx.output.list_item(brand);
    }

    ctx.output.header("ประเภท CPU (--cpu)");
    for cpu in CPU_TYPES {
        ctx.output.list_item(cpu);
    }

    ctx.output.header("ช่วงราคา (--price)");
    for bucket in PRICE_BUCKETS {
        ctx.output.kv(&bucket.range().to_string(), bucket.label);
    }

    Ok(())
}
