use sea_orm::entity::prelude::*;

/// A persisted study record. The identifier is an opaque string assigned by
/// the service layer on first persist.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "study")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub description: String,
    pub created_by: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::study_level::Entity")]
    StudyLevel,
}

impl Related<super::study_level::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudyLevel.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
