//! Create `cv_sample`, `blog` and the single-row `site_setting`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CvSample::Table)
                    .if_not_exists()
                    .col(uuid(CvSample::Id).primary_key())
                    .col(string(CvSample::Name))
                    .col(string(CvSample::Title))
                    .col(text_null(CvSample::Description))
                    .col(string_null(CvSample::DemoImage))
                    .col(text(CvSample::Html))
                    .col(text(CvSample::Css).default(""))
                    .col(boolean(CvSample::IsActive).default(true))
                    .col(boolean(CvSample::IsDeleted).default(false))
                    .col(timestamp_with_time_zone(CvSample::CreatedAt))
                    .col(timestamp_with_time_zone(CvSample::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Blog::Table)
                    .if_not_exists()
                    .col(uuid(Blog::Id).primary_key())
                    .col(string(Blog::Title))
                    .col(string(Blog::Slug).unique_key())
                    .col(text_null(Blog::Excerpt))
                    .col(text(Blog::Content))
                    .col(string(Blog::CoverImageUrl))
                    .col(array(Blog::Tags, ColumnType::Text).default(Expr::cust("'{}'")))
                    .col(boolean(Blog::Published).default(false))
                    .col(timestamp_with_time_zone_null(Blog::PublishedAt))
                    .col(boolean(Blog::Deleted).default(false))
                    .col(timestamp_with_time_zone(Blog::CreatedAt))
                    .col(timestamp_with_time_zone(Blog::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SiteSetting::Table)
                    .if_not_exists()
                    .col(integer(SiteSetting::Id).primary_key())
                    .col(string_null(SiteSetting::LogoUrl))
                    .col(string_null(SiteSetting::FaviconUrl))
                    .col(string_null(SiteSetting::ClientTitle))
                    .col(string_null(SiteSetting::RecruiterTitle))
                    .col(boolean(SiteSetting::NoticeEnabled).default(false))
                    .col(text_null(SiteSetting::NoticeMessage))
                    .col(string_len_null(SiteSetting::NoticeColor, 7))
                    .col(timestamp_with_time_zone_null(SiteSetting::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(SiteSetting::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Blog::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(CvSample::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum CvSample { Table, Id, Name, Title, Description, DemoImage, Html, Css, IsActive, IsDeleted, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Blog {
    Table,
    Id,
    Title,
    Slug,
    Excerpt,
    Content,
    CoverImageUrl,
    Tags,
    Published,
    PublishedAt,
    Deleted,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum SiteSetting {
    Table,
    Id,
    LogoUrl,
    FaviconUrl,
    ClientTitle,
    RecruiterTitle,
    NoticeEnabled,
    NoticeMessage,
    NoticeColor,
    UpdatedAt,
}
