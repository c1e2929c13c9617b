//! Exercise catalog.

use async_trait::async_trait;
use reqwest::Method;

use club_core::entities::CatalogItem;
use club_core::errors::StoreError;
use club_engine::store::CatalogSource;

use crate::wire::ExerciseDoc;
use crate::{ApiClient, error::ApiError, http::decode};

impl ApiClient {
    /// `GET /exercises`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the backend returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn get_exercises(&self) -> Result<Vec<CatalogItem>, ApiError> {
        let docs: Vec<ExerciseDoc> =
            decode(self.request(Method::GET, "/exercises").send().await?).await?;
        Ok(docs.into_iter().map(CatalogItem::from).collect())
    }
}

#[async_trait]
impl CatalogSource for ApiClient {
    async fn list_items(&self) -> Result<Vec<CatalogItem>, StoreError> {
        Ok(self.get_exercises().await?)
    }
}

/// Catalog items in `category` (case-insensitive), or all of them.
#[must_use]
pub fn filter_by_category(items: Vec<CatalogItem>, category: Option<&str>) -> Vec<CatalogItem> {
    match category.map(str::trim).filter(|c| !c.is_empty()) {
        Some(category) => items
            .into_iter()
            .filter(|item| item.category.eq_ignore_ascii_case(category))
            .collect(),
        None => items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, category: &str) -> CatalogItem {
        CatalogItem {
            id: id.into(),
            name: format!("Exercise {id}"),
            category: category.into(),
        }
    }

    #[test]
    fn category_filter_ignores_case() {
        let items = vec![item("1", "Passe"), item("2", "Remate"), item("3", "passe")];
        let ids: Vec<String> = filter_by_category(items, Some("PASSE"))
            .into_iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn blank_category_keeps_everything() {
        let items = vec![item("1", "Passe"), item("2", "Remate")];
        assert_eq!(filter_by_category(items, Some(" ")).len(), 2);
    }
}
