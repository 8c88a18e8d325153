use sea_orm_migration::{prelude::*, schema::*};

use super::m20260801_000001_create_study_table::Study;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StudyLevel::Table)
                    .if_not_exists()
                    .col(pk_auto(StudyLevel::Id))
                    .col(string(StudyLevel::StudyId))
                    .col(integer(StudyLevel::LevelOrder))
                    .col(string(StudyLevel::Name))
                    .col(string(StudyLevel::CreatedBy))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_study_level_study_id")
                            .from(StudyLevel::Table, StudyLevel::StudyId)
                            .to(Study::Table, Study::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StudyLevel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StudyLevel {
    Table,
    Id,
    StudyId,
    LevelOrder,
    Name,
    CreatedBy,
}
