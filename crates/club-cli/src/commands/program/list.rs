use crate::cli::GlobalFlags;
use crate::context::AppContext;

pub async fn run(training: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let program = super::load(training, ctx).await?;
    super::print_summary(&program.summary(), flags.format)
}
