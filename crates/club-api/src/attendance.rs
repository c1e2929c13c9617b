//! Attendance records.
//!
//! The backend answers create and update with the stored row; that row is
//! what the engine stamps back into the sheet.

use async_trait::async_trait;
use reqwest::Method;

use club_core::entities::{AttendanceFields, AttendanceRecord, NewAttendance};
use club_core::errors::StoreError;
use club_engine::store::AttendanceStore;

use crate::wire::{AttendanceBody, AttendanceDoc, NewAttendanceBody};
use crate::{ApiClient, error::ApiError, http::decode, segment};

impl ApiClient {
    /// `GET /attendances/training/{trainingId}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the backend returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn get_attendances(
        &self,
        training_id: &str,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        let path = format!("/attendances/training/{}", segment(training_id));
        let docs: Vec<AttendanceDoc> =
            decode(self.request(Method::GET, &path).send().await?).await?;
        Ok(docs.into_iter().map(AttendanceRecord::from).collect())
    }

    /// `POST /attendances`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the backend refuses the
    /// record, or the response cannot be parsed.
    pub async fn post_attendance(&self, new: &NewAttendance) -> Result<AttendanceRecord, ApiError> {
        let resp = self
            .request(Method::POST, "/attendances")
            .json(&NewAttendanceBody::from(new))
            .send()
            .await?;
        let doc: AttendanceDoc = decode(resp).await?;
        Ok(doc.into())
    }

    /// `PUT /attendances/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the backend refuses the
    /// update, or the response cannot be parsed.
    pub async fn put_attendance(
        &self,
        record_id: &str,
        fields: &AttendanceFields,
    ) -> Result<AttendanceRecord, ApiError> {
        let path = format!("/attendances/{}", segment(record_id));
        let resp = self
            .request(Method::PUT, &path)
            .json(&AttendanceBody::from(fields))
            .send()
            .await?;
        let doc: AttendanceDoc = decode(resp).await?;
        Ok(doc.into())
    }
}

#[async_trait]
impl AttendanceStore for ApiClient {
    async fn list_attendance(&self, session_id: &str) -> Result<Vec<AttendanceRecord>, StoreError> {
        Ok(self.get_attendances(session_id).await?)
    }

    async fn create_attendance(&self, new: &NewAttendance) -> Result<AttendanceRecord, StoreError> {
        Ok(self.post_attendance(new).await?)
    }

    async fn update_attendance(
        &self,
        record_id: &str,
        fields: &AttendanceFields,
    ) -> Result<AttendanceRecord, StoreError> {
        Ok(self.put_attendance(record_id, fields).await?)
    }
}
