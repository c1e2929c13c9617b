use anyhow::Context;
use club_core::patch::RecordPatch;

/// One `--set member.field=value` edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberEdit {
    pub member_id: String,
    pub patch: RecordPatch,
}

/// Parse `member.field=value`. The member id ends at the first `.`.
pub fn parse_member_edit(raw: &str) -> anyhow::Result<MemberEdit> {
    let (member_id, assignment) = raw
        .split_once('.')
        .filter(|(member_id, _)| !member_id.contains('='))
        .with_context(|| format!("invalid edit '{raw}': expected member.field=value"))?;
    let member_id = member_id.trim();
    if member_id.is_empty() {
        anyhow::bail!("invalid edit '{raw}': member id is empty");
    }

    let patch = RecordPatch::parse_assignment(assignment)
        .with_context(|| format!("invalid edit '{raw}'"))?;
    Ok(MemberEdit {
        member_id: member_id.to_string(),
        patch,
    })
}
