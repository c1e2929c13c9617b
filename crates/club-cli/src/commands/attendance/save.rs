use anyhow::Context;
use serde::Serialize;

use club_core::responses::SyncResult;
use club_engine::{BatchSync, load_roster};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::attendance::AttendanceSaveArgs;
use crate::commands::shared::parse::{MemberEdit, parse_member_edit};
use crate::context::AppContext;
use crate::output::output_document;

/// Flat table line of a sync outcome.
#[derive(Debug, Serialize)]
struct OutcomeLine<'a> {
    member: &'a str,
    status: &'static str,
    error: Option<&'a str>,
}

fn outcome_lines(result: &SyncResult) -> Vec<OutcomeLine<'_>> {
    let succeeded = result.succeeded.iter().map(|member| OutcomeLine {
        member,
        status: "ok",
        error: None,
    });
    let failed = result.failed.iter().map(|failure| OutcomeLine {
        member: &failure.member_id,
        status: "failed",
        error: Some(&failure.error_message),
    });
    succeeded.chain(failed).collect()
}

/// Reject `--set` edits for members that `--only` leaves out of the save.
fn check_edits_within_only(edits: &[MemberEdit], only: &[String]) -> anyhow::Result<()> {
    if only.is_empty() {
        return Ok(());
    }
    let skipped: Vec<&str> = edits
        .iter()
        .map(|edit| edit.member_id.as_str())
        .filter(|member_id| !only.iter().any(|kept| kept.as_str() == *member_id))
        .collect();
    if !skipped.is_empty() {
        anyhow::bail!(
            "--set edits member(s) {} not listed in --only; they would not be saved",
            skipped.join(",")
        );
    }
    Ok(())
}

pub async fn run(
    args: &AttendanceSaveArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let edits = args
        .set
        .iter()
        .map(|raw| parse_member_edit(raw))
        .collect::<anyhow::Result<Vec<_>>>()?;
    check_edits_within_only(&edits, &args.only)?;

    let client = ctx.client.as_ref();
    let (_, mut view) = load_roster(client, client, &args.training)
        .await
        .with_context(|| format!("failed to load attendance for training {}", args.training))?;

    for edit in edits {
        view.patch(&edit.member_id, edit.patch)
            .with_context(|| format!("cannot edit member {}", edit.member_id))?;
    }

    let rows = if args.only.is_empty() {
        view.rows().to_vec()
    } else {
        view.select(args.only.as_slice())
            .context("--only names a member who is not on this training's team")?
    };

    let result = BatchSync::new(ctx.client.clone(), ctx.sync_options())
        .sync(&rows)
        .await;
    output_document(&result, &outcome_lines(&result), flags.format)?;

    if !result.is_complete() {
        anyhow::bail!(
            "{} of {} rows failed to persist; retry with --only {}",
            result.failed.len(),
            rows.len(),
            result.failed_ids().join(",")
        );
    }
    Ok(())
}
