use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260115_000002_create_user_table::User, m20260115_000004_create_document_table::Document,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Flag::Table)
                    .if_not_exists()
                    .col(pk_uuid(Flag::Id))
                    .col(uuid(Flag::DocumentId))
                    .col(uuid(Flag::CreatedBy))
                    .col(uuid_null(Flag::AssignedTo))
                    .col(string(Flag::Title))
                    .col(text(Flag::Description))
                    .col(string_len(Flag::Priority, 16).default("medium"))
                    .col(string_len(Flag::Status, 16).default("pending"))
                    .col(text_null(Flag::Resolution))
                    .col(timestamp_with_time_zone_null(Flag::ResolvedAt))
                    .col(
                        timestamp_with_time_zone(Flag::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Flag::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flag_document_id")
                            .from(Flag::Table, Flag::DocumentId)
                            .to(Document::Table, Document::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flag_created_by")
                            .from(Flag::Table, Flag::CreatedBy)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flag_assigned_to")
                            .from(Flag::Table, Flag::AssignedTo)
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
            .drop_table(Table::drop().table(Flag::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Flag {
    Table,
    Id,
    DocumentId,
    CreatedBy,
    AssignedTo,
    Title,
    Description,
    Priority,
    Status,
    Resolution,
    ResolvedAt,
    CreatedAt,
    UpdatedAt,
}
