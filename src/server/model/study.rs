//! Study domain models and parameters.
//!
//! Provides domain models for studies and their nested levels and values,
//! plus the parameter type for create/replace operations. Conversion between
//! entity models, domain models, and wire DTOs happens here so the other
//! layers stay free of marshalling code.

use crate::model::study::{LevelDto, StudyDto, ValueDto};

/// A study with its full nested document.
#[derive(Debug, Clone, PartialEq)]
pub struct Study {
    /// Opaque identifier, unique within the collection.
    pub id: String,
    pub name: String,
    pub description: String,
    pub created_by: String,
    /// Levels in the order the caller supplied them.
    pub levels: Vec<Level>,
}

/// A level nested within a study. No identity of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    /// Caller-supplied ordering index; not validated or re-sequenced.
    pub order: i32,
    pub name: String,
    pub created_by: String,
    pub values: Vec<Value>,
}

/// A value nested within a level.
#[derive(Debug, Clone, PartialEq)]
pub struct Value {
    /// Caller-supplied ordering index; not validated or re-sequenced.
    pub order: i32,
    pub name: String,
    pub created_by: String,
}

/// Parameters for the create/upsert and replace operations.
///
/// The identifier is optional: the service assigns one when the client did
/// not supply it (create), and overrides it with the path identifier on
/// replace.
#[derive(Debug, Clone)]
pub struct UpsertStudyParams {
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub created_by: String,
    pub levels: Vec<Level>,
}

impl UpsertStudyParams {
    /// Converts a wire DTO to operation parameters.
    ///
    /// An empty identifier on the wire means "not supplied"; a missing or
    /// null `levels` array maps to an empty level set.
    pub fn from_dto(dto: StudyDto) -> Self {
        Self {
            id: if dto.id.is_empty() { None } else { Some(dto.id) },
            name: dto.study_name,
            description: dto.description,
            created_by: dto.created_by,
            levels: dto
                .levels
                .unwrap_or_default()
                .into_iter()
                .map(Level::from_dto)
                .collect(),
        }
    }
}

impl Study {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The study entity from the database
    /// - `levels` - Level rows paired with their value rows, in stored order
    pub fn from_entity(
        entity: entity::study::Model,
        levels: Vec<(
            entity::study_level::Model,
            Vec<entity::study_level_value::Model>,
        )>,
    ) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            created_by: entity.created_by,
            levels: levels
                .into_iter()
                .map(|(level, values)| Level::from_entity(level, values))
                .collect(),
        }
    }

    /// Converts the domain model to a DTO for API responses.
    ///
    /// An empty level set serializes as `null` on the wire, matching the
    /// study document format.
    pub fn into_dto(self) -> StudyDto {
        StudyDto {
            id: self.id,
            study_name: self.name,
            description: self.description,
            levels: if self.levels.is_empty() {
                None
            } else {
                Some(self.levels.into_iter().map(Level::into_dto).collect())
            },
            created_by: self.created_by,
        }
    }
}

impl Level {
    pub fn from_dto(dto: LevelDto) -> Self {
        Self {
            order: dto.level_order,
            name: dto.level_name,
            created_by: dto.created_by,
            values: dto
                .values
                .unwrap_or_default()
                .into_iter()
                .map(Value::from_dto)
                .collect(),
        }
    }

    pub fn from_entity(
        entity: entity::study_level::Model,
        values: Vec<entity::study_level_value::Model>,
    ) -> Self {
        Self {
            order: entity.level_order,
            name: entity.name,
            created_by: entity.created_by,
            values: values.into_iter().map(Value::from_entity).collect(),
        }
    }

    pub fn into_dto(self) -> LevelDto {
        LevelDto {
            level_order: self.order,
            level_name: self.name,
            created_by: self.created_by,
            values: if self.values.is_empty() {
                None
            } else {
                Some(self.values.into_iter().map(Value::into_dto).collect())
            },
        }
    }
}

impl Value {
    pub fn from_dto(dto: ValueDto) -> Self {
        Self {
            order: dto.value_order,
            name: dto.value_name,
            created_by: dto.created_by,
        }
    }

    pub fn from_entity(entity: entity::study_level_value::Model) -> Self {
        Self {
            order: entity.value_order,
            name: entity.name,
            created_by: entity.created_by,
        }
    }

    pub fn into_dto(self) -> ValueDto {
        ValueDto {
            value_order: self.order,
            value_name: self.name,
            created_by: self.created_by,
        }
    }
}
