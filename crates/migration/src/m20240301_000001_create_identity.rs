//! Create `account` and `role`.
//!
//! `account.role_ids` is a plain `uuid[]`; roles are never joined by FK.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Role::Table)
                    .if_not_exists()
                    .col(uuid(Role::Id).primary_key())
                    .col(string_len(Role::Name, 128))
                    .col(array(Role::Permissions, ColumnType::Text).default(Expr::cust("'{}'")))
                    .col(string_len(Role::IsActive, 16).default("active"))
                    .col(boolean(Role::Deleted).default(false))
                    .col(timestamp_with_time_zone(Role::CreatedAt))
                    .col(timestamp_with_time_zone(Role::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Account::Table)
                    .if_not_exists()
                    .col(uuid(Account::Id).primary_key())
                    .col(string_len(Account::Email, 255).unique_key())
                    .col(string(Account::PasswordHash))
                    .col(string_len(Account::Status, 16).default("active"))
                    .col(boolean(Account::IsVerified).default(false))
                    .col(timestamp_with_time_zone_null(Account::EmailVerifiedAt))
                    .col(timestamp_with_time_zone_null(Account::LastLoginAt))
                    .col(array(Account::RoleIds, ColumnType::Uuid).default(Expr::cust("'{}'")))
                    .col(boolean(Account::Deleted).default(false))
                    .col(timestamp_with_time_zone(Account::CreatedAt))
                    .col(timestamp_with_time_zone(Account::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Account::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Role::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Role { Table, Id, Name, Permissions, IsActive, Deleted, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Account {
    Table,
    Id,
    Email,
    PasswordHash,
    Status,
    IsVerified,
    EmailVerifiedAt,
    LastLoginAt,
    RoleIds,
    Deleted,
    CreatedAt,
    UpdatedAt,
}
