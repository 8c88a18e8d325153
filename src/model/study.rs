use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Wire representation of a study. All fields are optional on input; a
/// missing `levels` array serializes back as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StudyDto {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "studyname", default)]
    pub study_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub levels: Option<Vec<LevelDto>>,
    #[serde(rename = "createdby", default)]
    pub created_by: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LevelDto {
    #[serde(rename = "levelorder", default)]
    pub level_order: i32,
    #[serde(default)]
    pub values: Option<Vec<ValueDto>>,
    #[serde(rename = "levelname", default)]
    pub level_name: String,
    #[serde(rename = "createdby", default)]
    pub created_by: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ValueDto {
    #[serde(rename = "valueorder", default)]
    pub value_order: i32,
    #[serde(rename = "valuename", default)]
    pub value_name: String,
    #[serde(rename = "createdby", default)]
    pub created_by: String,
}
