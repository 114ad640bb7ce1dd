//! Document manager

use crate::error::AppError;
use nmp_client::ApiClient;
use nmp_domain::{matches_search, Document, DocumentCategory};
use serde::Serialize;
use std::time::Duration;

/// Delay before re-querying after a search or filter change
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// New-document form state
#[derive(Debug, Clone, Serialize)]
pub struct NewDocument {
    /// Document title
    pub title: String,
    /// Category
    pub category: DocumentCategory,
    /// Original file name
    pub file_name: String,
    /// Size in bytes
    pub file_size: u64,
    /// MIME type
    pub file_type: String,
    /// Optional description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl NewDocument {
    /// Form for a file about to be registered
    #[must_use]
    pub fn new(title: impl Into<String>, category: DocumentCategory, file_name: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            category,
            file_name: file_name.into(),
            file_size: 0,
            file_type: String::new(),
            description: None,
        }
    }

    /// Client-side validation, run before any network call
    pub fn validate(&self) -> Result<(), AppError> {
        if self.title.trim().is_empty() {
            return Err(AppError::Validation(
                "Document title is required".to_string(),
            ));
        }
        if self.file_name.trim().is_empty() {
            return Err(AppError::Validation("A file is required".to_string()));
        }
        Ok(())
    }
}

/// Document list view state and operations
#[derive(Debug, Default)]
pub struct DocumentManager {
    documents: Vec<Document>,
    search: String,
    category_filter: Option<DocumentCategory>,
    last_error: Option<String>,
}

impl DocumentManager {
    /// Manager seeded with an initial collection
    #[must_use]
    pub fn new(documents: Vec<Document>) -> Self {
        Self {
            documents,
            ..Self::default()
        }
    }

    /// Current collection
    #[inline]
    #[must_use]
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Set the search text
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// Set or clear the category filter
    pub fn set_category_filter(&mut self, filter: Option<DocumentCategory>) {
        self.category_filter = filter;
    }

    /// Documents matching the search text and category filter
    #[must_use]
    pub fn filtered(&self) -> Vec<&Document> {
        self.documents
            .iter()
            .filter(|d| {
                let description = d.description.as_deref().unwrap_or("");
                matches_search(
                    &self.search,
                    &[d.title.as_str(), d.file_name.as_str(), description],
                )
                    && self.category_filter.map_or(true, |c| d.category == c)
            })
            .collect()
    }

    /// Current error banner
    #[inline]
    #[must_use]
    pub fn error_banner(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Dismiss the error banner
    pub fn dismiss_error(&mut self) {
        self.last_error = None;
    }

    /// Refetch the whole collection, keeping the stale list on failure
    pub async fn refresh(&mut self, client: &ApiClient) -> Result<(), AppError> {
        match client.documents(&[]).await {
            Ok(documents) => {
                self.documents = documents;
                self.last_error = None;
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, "document refetch failed, keeping stale list");
                self.last_error = Some(err.to_string());
                Err(err.into())
            }
        }
    }

    /// Refetch after a search or filter change, waiting out the debounce
    /// window first so a typing burst issues one query
    pub async fn debounced_refresh(&mut self, client: &ApiClient) -> Result<(), AppError> {
        tokio::time::sleep(SEARCH_DEBOUNCE).await;
        self.refresh(client).await
    }

    /// Validate and register a document, then refetch the collection
    pub async fn create(
        &mut self,
        client: &ApiClient,
        form: &NewDocument,
    ) -> Result<Document, AppError> {
        form.validate()?;
        let created = client.create_document(form).await?;
        tracing::info!(title = %created.title, "document registered");
        self.refresh(client).await?;
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nmp_test_utils::fixtures;

    #[test]
    fn filtered_matches_category_and_search() {
        let mut manager = DocumentManager::new(vec![
            fixtures::document("Bylaws 2025", DocumentCategory::Legal, "bylaws.pdf"),
            fixtures::document("June Minutes", DocumentCategory::Minutes, "june-minutes.pdf"),
            fixtures::document("FY26 Budget", DocumentCategory::Financial, "budget.xlsx"),
        ]);

        manager.set_category_filter(Some(DocumentCategory::Legal));
        let legal = manager.filtered();
        assert_eq!(legal.len(), 1);
        assert_eq!(legal[0].title, "Bylaws 2025");

        manager.set_category_filter(None);
        manager.set_search("budget");
        assert_eq!(manager.filtered().len(), 1);

        // File names are searched too.
        manager.set_search("june-minutes");
        assert_eq!(manager.filtered().len(), 1);
    }

    #[test]
    fn validation_requires_title_and_file() {
        let form = NewDocument::new("", DocumentCategory::Legal, "bylaws.pdf");
        assert!(matches!(form.validate(), Err(AppError::Validation(_))));

        let form = NewDocument::new("Bylaws 2025", DocumentCategory::Legal, "");
        assert_eq!(form.validate().unwrap_err().to_string(), "A file is required");

        let form = NewDocument::new("Bylaws 2025", DocumentCategory::Legal, "bylaws.pdf");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn debounce_window_is_300ms() {
        assert_eq!(SEARCH_DEBOUNCE, Duration::from_millis(300));
    }

    #[tokio::test]
    async fn debounced_refresh_waits_then_requeries() {
        let stub = nmp_test_utils::spawn_stub();
        let client = nmp_client::ApiClient::new(
            nmp_client::ClientConfig::new().with_base_url(stub.base_url()),
            std::sync::Arc::new(nmp_client::MemorySessionStore::new()),
        );
        let mut manager = DocumentManager::default();

        let started = std::time::Instant::now();
        manager.set_search("bylaws");
        manager.debounced_refresh(&client).await.unwrap();
        assert!(started.elapsed() >= SEARCH_DEBOUNCE);
        assert_eq!(stub.request_count(), 1);
    }
}
