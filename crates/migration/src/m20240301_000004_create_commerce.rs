//! Create the banner advertising tables and `job_package`.
//!
//! `banner_order.banner_id` links an approved order to the banner it produced.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BannerPackage::Table)
                    .if_not_exists()
                    .col(uuid(BannerPackage::Id).primary_key())
                    .col(string(BannerPackage::Name))
                    .col(text_null(BannerPackage::Description))
                    .col(string_len(BannerPackage::Position, 32))
                    .col(string_null(BannerPackage::PreviewImage))
                    .col(integer(BannerPackage::DurationDays))
                    .col(big_integer(BannerPackage::Price))
                    .col(integer(BannerPackage::MaxBannerSlots))
                    .col(integer(BannerPackage::Priority).default(0))
                    .col(boolean(BannerPackage::IsActive).default(true))
                    .col(boolean(BannerPackage::Deleted).default(false))
                    .col(timestamp_with_time_zone(BannerPackage::CreatedAt))
                    .col(timestamp_with_time_zone(BannerPackage::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Banner::Table)
                    .if_not_exists()
                    .col(uuid(Banner::Id).primary_key())
                    .col(string(Banner::Title))
                    .col(string(Banner::ImageUrl))
                    .col(string_null(Banner::RedirectUrl))
                    .col(string_null(Banner::AltText))
                    .col(string_len(Banner::Position, 32))
                    .col(big_integer(Banner::Price).default(0))
                    .col(boolean(Banner::Approved).default(false))
                    .col(boolean(Banner::IsActive).default(true))
                    .col(timestamp_with_time_zone_null(Banner::StartDate))
                    .col(timestamp_with_time_zone_null(Banner::EndDate))
                    .col(big_integer(Banner::ViewCount).default(0))
                    .col(big_integer(Banner::ClickCount).default(0))
                    .col(uuid_null(Banner::PackageId))
                    .col(boolean(Banner::Deleted).default(false))
                    .col(timestamp_with_time_zone(Banner::CreatedAt))
                    .col(timestamp_with_time_zone(Banner::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(BannerOrder::Table)
                    .if_not_exists()
                    .col(uuid(BannerOrder::Id).primary_key())
                    .col(uuid(BannerOrder::PackageId))
                    .col(uuid_null(BannerOrder::AccountId))
                    .col(uuid_null(BannerOrder::RecruiterId))
                    .col(uuid_null(BannerOrder::CompanyId))
                    .col(big_integer(BannerOrder::Amount))
                    .col(string_len(BannerOrder::Status, 16).default("PENDING"))
                    .col(string(BannerOrder::Title))
                    .col(string(BannerOrder::ImageUrl))
                    .col(string_null(BannerOrder::RedirectUrl))
                    .col(string_null(BannerOrder::AltText))
                    .col(uuid_null(BannerOrder::BannerId))
                    .col(timestamp_with_time_zone(BannerOrder::CreatedAt))
                    .col(timestamp_with_time_zone(BannerOrder::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(JobPackage::Table)
                    .if_not_exists()
                    .col(uuid(JobPackage::Id).primary_key())
                    .col(string(JobPackage::PackageName))
                    .col(big_integer(JobPackage::Price))
                    .col(integer(JobPackage::DurationDays))
                    .col(json_binary(JobPackage::Features))
                    .col(integer(JobPackage::PriorityLevel).default(0))
                    .col(boolean(JobPackage::IsActive).default(true))
                    .col(boolean(JobPackage::Deleted).default(false))
                    .col(timestamp_with_time_zone(JobPackage::CreatedAt))
                    .col(timestamp_with_time_zone(JobPackage::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(JobPackage::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(BannerOrder::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Banner::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(BannerPackage::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum BannerPackage {
    Table,
    Id,
    Name,
    Description,
    Position,
    PreviewImage,
    DurationDays,
    Price,
    MaxBannerSlots,
    Priority,
    IsActive,
    Deleted,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Banner {
    Table,
    Id,
    Title,
    ImageUrl,
    RedirectUrl,
    AltText,
    Position,
    Price,
    Approved,
    IsActive,
    StartDate,
    EndDate,
    ViewCount,
    ClickCount,
    PackageId,
    Deleted,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum BannerOrder {
    Table,
    Id,
    PackageId,
    AccountId,
    RecruiterId,
    CompanyId,
    Amount,
    Status,
    Title,
    ImageUrl,
    RedirectUrl,
    AltText,
    BannerId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum JobPackage { Table, Id, PackageName, Price, DurationDays, Features, PriorityLevel, IsActive, Deleted, CreatedAt, UpdatedAt }
