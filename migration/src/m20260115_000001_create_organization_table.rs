use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Organization::Table)
                    .if_not_exists()
                    .col(pk_uuid(Organization::Id))
                    .col(string(Organization::Name))
                    .col(string_uniq(Organization::Slug))
                    .col(string_null(Organization::ConfluenceBaseUrl))
                    .col(string_null(Organization::ConfluenceEmail))
                    .col(string_null(Organization::ConfluenceToken))
                    .col(string_null(Organization::ConfluenceSpaceKey))
                    .col(
                        timestamp_with_time_zone(Organization::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Organization::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Organization {
    Table,
    Id,
    Name,
    Slug,
    ConfluenceBaseUrl,
    ConfluenceEmail,
    ConfluenceToken,
    ConfluenceSpaceKey,
    CreatedAt,
}
