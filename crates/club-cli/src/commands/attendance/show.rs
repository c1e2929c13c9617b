use anyhow::Context;
use serde::Serialize;

use club_core::entities::ReconciledRow;
use club_core::responses::AttendanceSheet;
use club_engine::load_roster;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output_document;

/// Flat table line of an attendance sheet.
#[derive(Debug, Serialize)]
struct SheetLine<'a> {
    member: &'a str,
    name: &'a str,
    presence: &'static str,
    absence: Option<&'a str>,
    note: Option<&'a str>,
    behavior: Option<i32>,
    technique: Option<i32>,
    attitude: Option<i32>,
    record: Option<&'a str>,
}

impl<'a> From<&'a ReconciledRow> for SheetLine<'a> {
    fn from(row: &'a ReconciledRow) -> Self {
        let record = &row.record;
        Self {
            member: &row.member.id,
            name: &row.member.name,
            presence: record.presence.as_str(),
            absence: record.absence_title.as_deref(),
            note: record.note.as_deref(),
            behavior: record.behavior_score,
            technique: record.technique_score,
            attitude: record.attitude_score,
            record: record.record_id.as_deref(),
        }
    }
}

pub async fn run(training: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let client = ctx.client.as_ref();
    let (session, view) = load_roster(client, client, training)
        .await
        .with_context(|| format!("failed to load attendance for training {training}"))?;

    let sheet = AttendanceSheet {
        session,
        rows: view.into_rows(),
    };
    let lines: Vec<SheetLine<'_>> = sheet.rows.iter().map(SheetLine::from).collect();
    output_document(&sheet, &lines, flags.format)
}
