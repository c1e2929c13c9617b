//! Backend JSON documents and their mapping onto domain entities.
//!
//! The backend speaks camelCase with its own field names (`teamId`,
//! `timeMinutes`, `status: "presente" | "ausente"`, ...). Nothing outside this
//! module sees those shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use club_core::entities::{
    AttendanceFields, AttendanceRecord, CatalogItem, CompositionEntry, Member, NewAttendance,
    NewCompositionEntry, TrainingSession,
};
use club_core::enums::PresenceState;

// ── Trainings and teams ────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingDoc {
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub team_id: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

impl From<TrainingDoc> for TrainingSession {
    fn from(doc: TrainingDoc) -> Self {
        Self {
            starts_at: parse_timestamp(doc.start_date.as_deref()),
            ends_at: parse_timestamp(doc.end_date.as_deref()),
            id: doc.id,
            title: doc.title,
            group_id: doc.team_id,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamDoc {
    #[serde(default)]
    pub user_teams: Vec<UserTeamDoc>,
}

#[derive(Debug, Deserialize)]
pub struct UserTeamDoc {
    pub user: UserDoc,
}

#[derive(Debug, Deserialize)]
pub struct UserDoc {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl TeamDoc {
    /// Team members in the order the backend lists them.
    pub fn into_members(self) -> Vec<Member> {
        self.user_teams
            .into_iter()
            .map(|link| Member {
                id: link.user.id,
                name: link.user.name,
                email: link.user.email,
            })
            .collect()
    }
}

/// Unparseable timestamps are dropped rather than failing the whole session.
fn parse_timestamp(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = raw?;
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => Some(parsed.with_timezone(&Utc)),
        Err(error) => {
            tracing::debug!(raw, %error, "ignoring unparseable training timestamp");
            None
        }
    }
}

// ── Attendance ─────────────────────────────────────────────────────

const PRESENT: &str = "presente";
const ABSENT: &str = "ausente";

const fn status_literal(presence: PresenceState) -> &'static str {
    match presence {
        PresenceState::Present => PRESENT,
        PresenceState::Absent => ABSENT,
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceDoc {
    pub id: String,
    pub training_id: String,
    pub user_id: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub absence_title: Option<String>,
    #[serde(default)]
    pub absence_desc: Option<String>,
    #[serde(default)]
    pub behavior: Option<i32>,
    #[serde(default)]
    pub technique: Option<i32>,
    #[serde(default)]
    pub attitude: Option<i32>,
}

impl From<AttendanceDoc> for AttendanceRecord {
    fn from(doc: AttendanceDoc) -> Self {
        Self {
            record_id: Some(doc.id),
            session_id: doc.training_id,
            member_id: doc.user_id,
            presence: PresenceState::coerce(doc.status.as_deref().unwrap_or_default()),
            note: doc.notes,
            absence_title: doc.absence_title,
            absence_description: doc.absence_desc,
            behavior_score: doc.behavior,
            technique_score: doc.technique,
            attitude_score: doc.attitude,
        }
    }
}

/// Body of `PUT /attendances/{id}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceBody<'a> {
    pub status: &'static str,
    pub absence_title: Option<&'a str>,
    pub absence_desc: Option<&'a str>,
    pub notes: Option<&'a str>,
    pub behavior: Option<i32>,
    pub technique: Option<i32>,
    pub attitude: Option<i32>,
}

impl<'a> From<&'a AttendanceFields> for AttendanceBody<'a> {
    fn from(fields: &'a AttendanceFields) -> Self {
        Self {
            status: status_literal(fields.presence),
            absence_title: fields.absence_title.as_deref(),
            absence_desc: fields.absence_description.as_deref(),
            notes: fields.note.as_deref(),
            behavior: fields.behavior_score,
            technique: fields.technique_score,
            attitude: fields.attitude_score,
        }
    }
}

/// Body of `POST /attendances`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAttendanceBody<'a> {
    pub training_id: &'a str,
    pub user_id: &'a str,
    #[serde(flatten)]
    pub fields: AttendanceBody<'a>,
}

impl<'a> From<&'a NewAttendance> for NewAttendanceBody<'a> {
    fn from(new: &'a NewAttendance) -> Self {
        Self {
            training_id: &new.session_id,
            user_id: &new.member_id,
            fields: AttendanceBody::from(&new.fields),
        }
    }
}

// ── Program entries and catalog ────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ExerciseDoc {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
}

impl From<ExerciseDoc> for CatalogItem {
    fn from(doc: ExerciseDoc) -> Self {
        Self {
            id: doc.id,
            name: doc.name,
            category: doc.category,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingExerciseDoc {
    pub id: String,
    pub training_id: String,
    pub exercise_id: String,
    pub time_minutes: u32,
    #[serde(default)]
    pub phase: Option<String>,
    #[serde(default)]
    pub order: Option<i32>,
    #[serde(default)]
    pub exercise: Option<ExerciseDoc>,
}

impl From<TrainingExerciseDoc> for CompositionEntry {
    fn from(doc: TrainingExerciseDoc) -> Self {
        Self {
            id: doc.id,
            session_id: doc.training_id,
            item_id: doc.exercise_id,
            duration_minutes: doc.time_minutes,
            phase: doc.phase,
            position: doc.order,
            item: doc.exercise.map(CatalogItem::from),
        }
    }
}

/// Body of `POST /training-exercises`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTrainingExerciseBody<'a> {
    pub training_id: &'a str,
    pub exercise_id: &'a str,
    pub time_minutes: u32,
    pub phase: Option<&'a str>,
    pub order: Option<i32>,
}

impl<'a> From<&'a NewCompositionEntry> for NewTrainingExerciseBody<'a> {
    fn from(new: &'a NewCompositionEntry) -> Self {
        Self {
            training_id: &new.session_id,
            exercise_id: &new.item_id,
            time_minutes: new.duration_minutes,
            phase: new.phase.as_deref(),
            order: new.position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TRAINING_FIXTURE: &str = r#"{
        "id": "trn-1",
        "title": "Sub-12 terça",
        "teamId": "team-4",
        "startDate": "2025-03-04T18:00:00.000Z",
        "endDate": "not a date",
        "pavilionId": "pav-2"
    }"#;

    const TEAM_FIXTURE: &str = r#"{
        "id": "team-4",
        "name": "Sub-12",
        "userTeams": [
            { "userId": "u1", "user": { "id": "u1", "name": "Ana", "email": "ana@club.pt" } },
            { "userId": "u2", "user": { "id": "u2", "name": "Bruno", "email": "bruno@club.pt" } }
        ]
    }"#;

    const ATTENDANCE_FIXTURE: &str = r#"[
        {
            "id": "att-1",
            "trainingId": "trn-1",
            "userId": "u1",
            "status": "ausente",
            "notes": null,
            "absenceTitle": "Doente",
            "absenceDesc": "Gripe",
            "behavior": 4,
            "technique": null,
            "attitude": 5
        },
        {
            "id": "att-2",
            "trainingId": "trn-1",
            "userId": "u2",
            "status": "atrasado"
        }
    ]"#;

    const TRAINING_EXERCISE_FIXTURE: &str = r#"{
        "id": "te-1",
        "trainingId": "trn-1",
        "exerciseId": "ex-3",
        "timeMinutes": 15,
        "phase": "aquecimento",
        "order": null,
        "exercise": { "id": "ex-3", "name": "Rondo 4x2", "category": "Passe" }
    }"#;

    #[test]
    fn parse_training() {
        let doc: TrainingDoc = serde_json::from_str(TRAINING_FIXTURE).unwrap();
        let session = TrainingSession::from(doc);
        assert_eq!(session.group_id, "team-4");
        assert_eq!(session.title, "Sub-12 terça");
        assert!(session.starts_at.is_some());
        assert_eq!(session.ends_at, None);
    }

    #[test]
    fn team_members_keep_backend_order() {
        let doc: TeamDoc = serde_json::from_str(TEAM_FIXTURE).unwrap();
        let members = doc.into_members();
        let ids: Vec<&str> = members.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["u1", "u2"]);
        assert_eq!(members[0].email, "ana@club.pt");
    }

    #[test]
    fn attendance_status_is_coerced() {
        let docs: Vec<AttendanceDoc> = serde_json::from_str(ATTENDANCE_FIXTURE).unwrap();
        let records: Vec<AttendanceRecord> = docs.into_iter().map(Into::into).collect();

        assert_eq!(records[0].presence, PresenceState::Absent);
        assert_eq!(records[0].absence_description.as_deref(), Some("Gripe"));
        assert_eq!(records[0].behavior_score, Some(4));
        assert_eq!(records[0].technique_score, None);
        assert_eq!(records[1].presence, PresenceState::Present);
        assert_eq!(records[1].record_id.as_deref(), Some("att-2"));
    }

    #[test]
    fn create_body_uses_backend_names() {
        let mut record = AttendanceRecord::draft("trn-1", "u3");
        record.presence = PresenceState::Absent;
        record.absence_title = Some("Exames".into());
        record.behavior_score = Some(3);
        let new = record.to_new();

        let json = serde_json::to_value(NewAttendanceBody::from(&new)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "trainingId": "trn-1",
                "userId": "u3",
                "status": "ausente",
                "absenceTitle": "Exames",
                "absenceDesc": null,
                "notes": null,
                "behavior": 3,
                "technique": null,
                "attitude": null
            })
        );
    }

    #[test]
    fn training_exercise_embeds_catalog_item() {
        let doc: TrainingExerciseDoc = serde_json::from_str(TRAINING_EXERCISE_FIXTURE).unwrap();
        let entry = CompositionEntry::from(doc);
        assert_eq!(entry.duration_minutes, 15);
        assert_eq!(entry.position, None);
        assert_eq!(entry.label(), "Rondo 4x2");
    }

    #[test]
    fn new_training_exercise_body() {
        let new = NewCompositionEntry {
            session_id: "trn-1".into(),
            item_id: "ex-3".into(),
            duration_minutes: 20,
            phase: None,
            position: Some(2),
        };
        let json = serde_json::to_value(NewTrainingExerciseBody::from(&new)).unwrap();
        assert_eq!(json["timeMinutes"], 20);
        assert_eq!(json["exerciseId"], "ex-3");
        assert_eq!(json["order"], 2);
        assert!(json["phase"].is_null());
    }
}
