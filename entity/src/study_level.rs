use sea_orm::entity::prelude::*;

/// A level nested within a study. The surrogate `id` never appears on the
/// wire; `level_order` is the caller-supplied ordering index.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "study_level")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub study_id: String,
    pub level_order: i32,
    pub name: String,
    pub created_by: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::study::Entity",
        from = "Column::StudyId",
        to = "super::study::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Study,
    #[sea_orm(has_many = "super::study_level_value::Entity")]
    StudyLevelValue,
}

impl Related<super::study::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Study.def()
    }
}

impl Related<super::study_level_value::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudyLevelValue.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
