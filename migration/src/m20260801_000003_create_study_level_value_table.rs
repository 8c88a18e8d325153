use sea_orm_migration::{prelude::*, schema::*};

use super::m20260801_000002_create_study_level_table::StudyLevel;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StudyLevelValue::Table)
                    .if_not_exists()
                    .col(pk_auto(StudyLevelValue::Id))
                    .col(integer(StudyLevelValue::LevelId))
                    .col(integer(StudyLevelValue::ValueOrder))
                    .col(string(StudyLevelValue::Name))
                    .col(string(StudyLevelValue::CreatedBy))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_study_level_value_level_id")
                            .from(StudyLevelValue::Table, StudyLevelValue::LevelId)
                            .to(StudyLevel::Table, StudyLevel::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StudyLevelValue::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StudyLevelValue {
    Table,
    Id,
    LevelId,
    ValueOrder,
    Name,
    CreatedBy,
}
