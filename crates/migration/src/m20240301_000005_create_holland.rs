//! Create the Holland (RIASEC) test tables.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HollandQuestion::Table)
                    .if_not_exists()
                    .col(uuid(HollandQuestion::Id).primary_key())
                    .col(integer(HollandQuestion::Order))
                    .col(text(HollandQuestion::Content))
                    .col(string_len(HollandQuestion::Category, 1))
                    .col(json_binary(HollandQuestion::Options))
                    .col(boolean(HollandQuestion::Deleted).default(false))
                    .col(timestamp_with_time_zone(HollandQuestion::CreatedAt))
                    .col(timestamp_with_time_zone(HollandQuestion::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(HollandProfile::Table)
                    .if_not_exists()
                    .col(uuid(HollandProfile::Id).primary_key())
                    .col(string_len(HollandProfile::Code, 3).unique_key())
                    .col(string(HollandProfile::Title))
                    .col(text(HollandProfile::Description))
                    .col(array(HollandProfile::SuitableCareers, ColumnType::Text).default(Expr::cust("'{}'")))
                    .col(array(HollandProfile::SuggestedSkills, ColumnType::Text).default(Expr::cust("'{}'")))
                    .col(string_null(HollandProfile::Image))
                    .col(boolean(HollandProfile::Deleted).default(false))
                    .col(timestamp_with_time_zone(HollandProfile::CreatedAt))
                    .col(timestamp_with_time_zone(HollandProfile::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(HollandResult::Table)
                    .if_not_exists()
                    .col(uuid(HollandResult::Id).primary_key())
                    .col(uuid_null(HollandResult::AccountId))
                    .col(json_binary(HollandResult::Scores))
                    .col(string_len(HollandResult::TopCode, 3))
                    .col(timestamp_with_time_zone(HollandResult::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(HollandResult::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(HollandProfile::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(HollandQuestion::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum HollandQuestion { Table, Id, Order, Content, Category, Options, Deleted, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum HollandProfile {
    Table,
    Id,
    Code,
    Title,
    Description,
    SuitableCareers,
    SuggestedSkills,
    Image,
    Deleted,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum HollandResult { Table, Id, AccountId, Scores, TopCode, CreatedAt }
