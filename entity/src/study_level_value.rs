use sea_orm::entity::prelude::*;

/// A value nested within a study level.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "study_level_value")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub level_id: i32,
    pub value_order: i32,
    pub name: String,
    pub created_by: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::study_level::Entity",
        from = "Column::LevelId",
        to = "super::study_level::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    StudyLevel,
}

impl Related<super::study_level::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudyLevel.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
