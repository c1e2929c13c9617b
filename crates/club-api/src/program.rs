//! Training programs (`/training-exercises`).

use async_trait::async_trait;
use reqwest::Method;

use club_core::entities::{CompositionEntry, NewCompositionEntry};
use club_core::errors::StoreError;
use club_engine::store::CompositionStore;

use crate::wire::{NewTrainingExerciseBody, TrainingExerciseDoc};
use crate::{ApiClient, error::ApiError, http::check_response, http::decode, segment};

impl ApiClient {
    /// `GET /training-exercises/by-training/{trainingId}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the backend returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn get_training_exercises(
        &self,
        training_id: &str,
    ) -> Result<Vec<CompositionEntry>, ApiError> {
        let path = format!("/training-exercises/by-training/{}", segment(training_id));
        let docs: Vec<TrainingExerciseDoc> =
            decode(self.request(Method::GET, &path).send().await?).await?;
        Ok(docs.into_iter().map(CompositionEntry::from).collect())
    }

    /// `POST /training-exercises`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the backend refuses the
    /// entry, or the response cannot be parsed.
    pub async fn post_training_exercise(
        &self,
        new: &NewCompositionEntry,
    ) -> Result<CompositionEntry, ApiError> {
        let resp = self
            .request(Method::POST, "/training-exercises")
            .json(&NewTrainingExerciseBody::from(new))
            .send()
            .await?;
        let doc: TrainingExerciseDoc = decode(resp).await?;
        Ok(doc.into())
    }

    /// `DELETE /training-exercises/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the backend refuses.
    pub async fn delete_training_exercise(&self, entry_id: &str) -> Result<(), ApiError> {
        let path = format!("/training-exercises/{}", segment(entry_id));
        check_response(self.request(Method::DELETE, &path).send().await?).await?;
        Ok(())
    }
}

#[async_trait]
impl CompositionStore for ApiClient {
    async fn list_entries(&self, session_id: &str) -> Result<Vec<CompositionEntry>, StoreError> {
        Ok(self.get_training_exercises(session_id).await?)
    }

    async fn create_entry(
        &self,
        new: &NewCompositionEntry,
    ) -> Result<CompositionEntry, StoreError> {
        Ok(self.post_training_exercise(new).await?)
    }

    async fn delete_entry(&self, entry_id: &str) -> Result<(), StoreError> {
        Ok(self.delete_training_exercise(entry_id).await?)
    }
}
