use sea_orm_migration::{prelude::*, schema::*};

use super::m20260115_000001_create_organization_table::Organization;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Workspace::Table)
                    .if_not_exists()
                    .col(pk_uuid(Workspace::Id))
                    .col(uuid(Workspace::OrgId))
                    .col(string(Workspace::Name))
                    .col(string(Workspace::IntegrationType))
                    .col(json_binary_null(Workspace::IntegrationConfig))
                    .col(boolean(Workspace::IsDefault).default(false))
                    .col(
                        timestamp_with_time_zone(Workspace::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_workspace_org_id")
                            .from(Workspace::Table, Workspace::OrgId)
                            .to(Organization::Table, Organization::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Workspace::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Workspace {
    Table,
    Id,
    OrgId,
    Name,
    IntegrationType,
    IntegrationConfig,
    IsDefault,
    CreatedAt,
}
