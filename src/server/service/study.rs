use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::study::StudyRepository,
    error::AppError,
    model::study::{Study, UpsertStudyParams},
};

pub struct StudyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudyService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every study in the collection.
    pub async fn list(&self) -> Result<Vec<Study>, AppError> {
        let repo = StudyRepository::new(self.db);

        Ok(repo.find_all().await?)
    }

    /// Gets a study by its identifier.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Study>, AppError> {
        let repo = StudyRepository::new(self.db);

        Ok(repo.find_by_id(id).await?)
    }

    /// Creates or replaces a study, assigning an identifier when absent.
    ///
    /// A store failure here is reported to the caller as a bad request, with
    /// the underlying cause logged server-side.
    ///
    /// # Arguments
    /// - `params` - Study document, identifier optional
    ///
    /// # Returns
    /// - `Ok(Study)` - The stored study including its assigned identifier
    /// - `Err(AppError::BadRequest)` - The store rejected the upsert
    pub async fn upsert(&self, params: UpsertStudyParams) -> Result<Study, AppError> {
        let repo = StudyRepository::new(self.db);

        let id = params
            .id
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let study = Study {
            id,
            name: params.name,
            description: params.description,
            created_by: params.created_by,
            levels: params.levels,
        };

        let stored = repo.upsert(study).await.map_err(|err| {
            tracing::error!("Failed to upsert study: {}", err);
            AppError::BadRequest("Could not upsert study".to_string())
        })?;

        tracing::info!("Stored study {} with name {}", stored.id, stored.name);

        Ok(stored)
    }

    /// Replaces the study stored under the given identifier with the supplied
    /// document. Returns `None` when no study with that identifier exists.
    ///
    /// # Arguments
    /// - `id` - Path identifier; overrides any identifier in the body
    /// - `params` - Replacement study document
    ///
    /// # Returns
    /// - `Ok(Some(Study))` - The stored replacement
    /// - `Ok(None)` - No study with that identifier
    /// - `Err(AppError)` - Database error
    pub async fn replace(
        &self,
        id: &str,
        params: UpsertStudyParams,
    ) -> Result<Option<Study>, AppError> {
        let repo = StudyRepository::new(self.db);

        if !repo.exists(id).await? {
            return Ok(None);
        }

        let study = Study {
            id: id.to_string(),
            name: params.name,
            description: params.description,
            created_by: params.created_by,
            levels: params.levels,
        };

        Ok(Some(repo.upsert(study).await?))
    }

    /// Removes a study by identifier. Removing an unknown identifier is not
    /// an error.
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let repo = StudyRepository::new(self.db);

        repo.delete(id).await?;

        Ok(())
    }
}
