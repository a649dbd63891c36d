use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260115_000002_create_user_table::User, m20260115_000003_create_workspace_table::Workspace,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Document::Table)
                    .if_not_exists()
                    .col(pk_uuid(Document::Id))
                    .col(uuid(Document::WorkspaceId))
                    .col(string(Document::Title))
                    .col(string_uniq(Document::Url))
                    .col(string_null(Document::ExternalId))
                    .col(uuid_null(Document::OwnerId))
                    .col(timestamp_with_time_zone_null(Document::LastChecked))
                    .col(
                        timestamp_with_time_zone(Document::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_document_workspace_id")
                            .from(Document::Table, Document::WorkspaceId)
                            .to(Workspace::Table, Workspace::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_document_owner_id")
                            .from(Document::Table, Document::OwnerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Document::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Document {
    Table,
    Id,
    WorkspaceId,
    Title,
    Url,
    ExternalId,
    OwnerId,
    LastChecked,
    CreatedAt,
}
