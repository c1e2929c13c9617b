use anyhow::Context;

use club_api::exercises::filter_by_category;
use club_engine::store::CatalogSource;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    category: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let limit = effective_limit(flags.limit, ctx.default_limit());
    let items = ctx
        .client
        .list_items()
        .await
        .context("failed to list exercises")?;

    let mut items = filter_by_category(items, category);
    items.truncate(limit);
    output(&items, flags.format)
}
