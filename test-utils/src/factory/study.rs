//! Study factory for creating test study entities.
//!
//! This module provides factory methods for creating study entities (and their
//! nested level and value rows) with sensible defaults, reducing boilerplate in
//! tests. The factory supports customization through a builder pattern.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test studies with customizable fields.
///
/// Provides a builder pattern for creating study entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::study::StudyFactory;
///
/// let study = StudyFactory::new(&db)
///     .name("Dose Response")
///     .created_by("researcher")
///     .build()
///     .await?;
/// ```
pub struct StudyFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    name: String,
    description: String,
    created_by: String,
}

impl<'a> StudyFactory<'a> {
    /// Creates a new StudyFactory with default values.
    ///
    /// Defaults:
    /// - id: `"study-{n}"` where n is auto-incremented
    /// - name: `"Study {n}"`
    /// - description: `"Test study description"`
    /// - created_by: `""`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `StudyFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            id: format!("study-{}", n),
            name: format!("Study {}", n),
            description: "Test study description".to_string(),
            created_by: String::new(),
        }
    }

    /// Sets the identifier for the study.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the name for the study.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the description for the study.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the creator for the study.
    pub fn created_by(mut self, created_by: impl Into<String>) -> Self {
        self.created_by = created_by.into();
        self
    }

    /// Builds and inserts the study entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::study::Model)` - Created study entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::study::Model, DbErr> {
        entity::study::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            created_by: ActiveValue::Set(self.created_by),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a study with default values.
///
/// Shorthand for `StudyFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::study::Model)` - Created study entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_study(db: &DatabaseConnection) -> Result<entity::study::Model, DbErr> {
    StudyFactory::new(db).build().await
}

/// Creates a level row attached to the given study.
///
/// # Arguments
/// - `db` - Database connection
/// - `study_id` - Identifier of the parent study
/// - `level_order` - Caller-supplied ordering index
///
/// # Returns
/// - `Ok(entity::study_level::Model)` - Created level entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_level(
    db: &DatabaseConnection,
    study_id: &str,
    level_order: i32,
) -> Result<entity::study_level::Model, DbErr> {
    let n = next_id();
    entity::study_level::ActiveModel {
        study_id: ActiveValue::Set(study_id.to_string()),
        level_order: ActiveValue::Set(level_order),
        name: ActiveValue::Set(format!("Level {}", n)),
        created_by: ActiveValue::Set(String::new()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a value row attached to the given level.
///
/// # Arguments
/// - `db` - Database connection
/// - `level_id` - Surrogate key of the parent level row
/// - `value_order` - Caller-supplied ordering index
///
/// # Returns
/// - `Ok(entity::study_level_value::Model)` - Created value entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_value(
    db: &DatabaseConnection,
    level_id: i32,
    value_order: i32,
) -> Result<entity::study_level_value::Model, DbErr> {
    let n = next_id();
    entity::study_level_value::ActiveModel {
        level_id: ActiveValue::Set(level_id),
        value_order: ActiveValue::Set(value_order),
        name: ActiveValue::Set(format!("Value {}", n)),
        created_by: ActiveValue::Set(String::new()),
        ..Default::default()
    }
    .insert(db)
    .await
}
