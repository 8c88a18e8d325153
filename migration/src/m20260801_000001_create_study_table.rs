use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Study::Table)
                    .if_not_exists()
                    .col(string(Study::Id).primary_key())
                    .col(string(Study::Name))
                    .col(string(Study::Description))
                    .col(string(Study::CreatedBy))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Study::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Study {
    Table,
    Id,
    Name,
    Description,
    CreatedBy,
}
