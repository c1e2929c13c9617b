//! Trainings and team rosters.

use async_trait::async_trait;
use reqwest::Method;

use club_core::entities::{Member, TrainingSession};
use club_core::errors::StoreError;
use club_engine::store::RosterSource;

use crate::wire::{TeamDoc, TrainingDoc};
use crate::{ApiClient, error::ApiError, http::decode, segment};

impl ApiClient {
    /// `GET /trainings/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the backend returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn get_training(&self, training_id: &str) -> Result<TrainingSession, ApiError> {
        let path = format!("/trainings/{}", segment(training_id));
        let doc: TrainingDoc = decode(self.request(Method::GET, &path).send().await?).await?;
        Ok(doc.into())
    }

    /// `GET /teams/{id}`, flattened to the team's members.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the backend returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn get_team_members(&self, team_id: &str) -> Result<Vec<Member>, ApiError> {
        let path = format!("/teams/{}", segment(team_id));
        let doc: TeamDoc = decode(self.request(Method::GET, &path).send().await?).await?;
        Ok(doc.into_members())
    }
}

#[async_trait]
impl RosterSource for ApiClient {
    async fn session(&self, session_id: &str) -> Result<TrainingSession, StoreError> {
        Ok(self.get_training(session_id).await?)
    }

    async fn group_members(&self, group_id: &str) -> Result<Vec<Member>, StoreError> {
        Ok(self.get_team_members(group_id).await?)
    }
}
