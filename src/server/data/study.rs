use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::study::{Level, Study};

/// Repository providing the point operations over the study tables.
///
/// Holds a reference to the database connection and performs the find-by-id,
/// find-all, upsert, and remove operations. Level and value rows are managed
/// wholesale alongside their parent study; their surrogate keys never leave
/// this module.
pub struct StudyRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudyRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every study in the collection with its nested levels and values.
    ///
    /// # Returns
    /// - `Ok(Vec<Study>)` - All stored studies; empty when none exist
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_all(&self) -> Result<Vec<Study>, DbErr> {
        let studies = entity::prelude::Study::find().all(self.db).await?;

        let mut result = Vec::with_capacity(studies.len());
        for study in studies {
            let levels = self.find_levels(&study.id).await?;
            result.push(Study::from_entity(study, levels));
        }

        Ok(result)
    }

    /// Gets a study by its identifier with its nested levels and values.
    ///
    /// # Arguments
    /// - `id` - Study identifier
    ///
    /// # Returns
    /// - `Ok(Some(Study))` - Study found with full nested document
    /// - `Ok(None)` - No study with that identifier
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Study>, DbErr> {
        let study = entity::prelude::Study::find_by_id(id).one(self.db).await?;

        match study {
            Some(study) => {
                let levels = self.find_levels(&study.id).await?;
                Ok(Some(Study::from_entity(study, levels)))
            }
            None => Ok(None),
        }
    }

    /// Checks whether a study with the given identifier exists.
    ///
    /// # Arguments
    /// - `id` - Study identifier
    ///
    /// # Returns
    /// - `Ok(true)` - A study with that identifier is stored
    /// - `Ok(false)` - No such study
    /// - `Err(DbErr)` - Database error during count query
    pub async fn exists(&self, id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Study::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Creates or replaces a study by its identifier.
    ///
    /// Inserts the study row, updating name, description, and creator when a
    /// row with the identifier already exists, then replaces the nested level
    /// and value rows wholesale with the supplied document.
    ///
    /// # Arguments
    /// - `study` - Full study document including a concrete identifier
    ///
    /// # Returns
    /// - `Ok(Study)` - The stored study as read back from the database
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert(&self, study: Study) -> Result<Study, DbErr> {
        entity::prelude::Study::insert(entity::study::ActiveModel {
            id: ActiveValue::Set(study.id.clone()),
            name: ActiveValue::Set(study.name),
            description: ActiveValue::Set(study.description),
            created_by: ActiveValue::Set(study.created_by),
        })
        .on_conflict(
            OnConflict::column(entity::study::Column::Id)
                .update_columns([
                    entity::study::Column::Name,
                    entity::study::Column::Description,
                    entity::study::Column::CreatedBy,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        self.replace_levels(&study.id, &study.levels).await?;

        self.find_by_id(&study.id).await?.ok_or(DbErr::RecordNotFound(format!(
            "Study {} not found after upsert",
            study.id
        )))
    }

    /// Removes a study and its nested rows by identifier.
    ///
    /// Removing an identifier that does not exist is not an error.
    ///
    /// # Arguments
    /// - `id` - Study identifier
    ///
    /// # Returns
    /// - `Ok(())` - Study (if any) removed
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: &str) -> Result<(), DbErr> {
        self.replace_levels(id, &[]).await?;

        entity::prelude::Study::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }

    /// Fetches the level rows for a study, each paired with its value rows.
    ///
    /// Rows come back in insertion order, which is the order the caller
    /// supplied them in.
    async fn find_levels(
        &self,
        study_id: &str,
    ) -> Result<
        Vec<(
            entity::study_level::Model,
            Vec<entity::study_level_value::Model>,
        )>,
        DbErr,
    > {
        let levels = entity::prelude::StudyLevel::find()
            .filter(entity::study_level::Column::StudyId.eq(study_id))
            .order_by_asc(entity::study_level::Column::Id)
            .all(self.db)
            .await?;

        let mut result = Vec::with_capacity(levels.len());
        for level in levels {
            let values = entity::prelude::StudyLevelValue::find()
                .filter(entity::study_level_value::Column::LevelId.eq(level.id))
                .order_by_asc(entity::study_level_value::Column::Id)
                .all(self.db)
                .await?;
            result.push((level, values));
        }

        Ok(result)
    }

    /// Replaces a study's level and value rows with the supplied document.
    ///
    /// Existing value and level rows are deleted, then the new rows inserted
    /// in the supplied order.
    async fn replace_levels(&self, study_id: &str, levels: &[Level]) -> Result<(), DbErr> {
        let existing = entity::prelude::StudyLevel::find()
            .filter(entity::study_level::Column::StudyId.eq(study_id))
            .all(self.db)
            .await?;

        let level_ids: Vec<i32> = existing.iter().map(|level| level.id).collect();
        if !level_ids.is_empty() {
            entity::prelude::StudyLevelValue::delete_many()
                .filter(entity::study_level_value::Column::LevelId.is_in(level_ids))
                .exec(self.db)
                .await?;

            entity::prelude::StudyLevel::delete_many()
                .filter(entity::study_level::Column::StudyId.eq(study_id))
                .exec(self.db)
                .await?;
        }

        for level in levels {
            let inserted = entity::study_level::ActiveModel {
                study_id: ActiveValue::Set(study_id.to_string()),
                level_order: ActiveValue::Set(level.order),
                name: ActiveValue::Set(level.name.clone()),
                created_by: ActiveValue::Set(level.created_by.clone()),
                ..Default::default()
            }
            .insert(self.db)
            .await?;

            for value in &level.values {
                entity::study_level_value::ActiveModel {
                    level_id: ActiveValue::Set(inserted.id),
                    value_order: ActiveValue::Set(value.order),
                    name: ActiveValue::Set(value.name.clone()),
                    created_by: ActiveValue::Set(value.created_by.clone()),
                    ..Default::default()
                }
                .insert(self.db)
                .await?;
            }
        }

        Ok(())
    }
}
