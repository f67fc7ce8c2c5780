use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Jobs: admin filters and the public listing
        manager
            .create_index(
                Index::create()
                    .name("idx_job_category")
                    .table(Job::Table)
                    .col(Job::CategoryId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_job_recruiter")
                    .table(Job::Table)
                    .col(Job::RecruiterId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_job_status_deleted")
                    .table(Job::Table)
                    .col(Job::Status)
                    .col(Job::Deleted)
                    .to_owned(),
            )
            .await?;

        // BannerOrder: admin filter by package
        manager
            .create_index(
                Index::create()
                    .name("idx_banner_order_package")
                    .table(BannerOrder::Table)
                    .col(BannerOrder::PackageId)
                    .to_owned(),
            )
            .await?;

        // Banner: public slot lookup
        manager
            .create_index(
                Index::create()
                    .name("idx_banner_position")
                    .table(Banner::Table)
                    .col(Banner::Position)
                    .col(Banner::Approved)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_holland_question_order")
                    .table(HollandQuestion::Table)
                    .col(HollandQuestion::Order)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_job_category").table(Job::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_job_recruiter").table(Job::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_job_status_deleted").table(Job::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_banner_order_package").table(BannerOrder::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_banner_position").table(Banner::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_holland_question_order").table(HollandQuestion::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Job { Table, CategoryId, RecruiterId, Status, Deleted }

#[derive(DeriveIden)]
enum BannerOrder { Table, PackageId }

#[derive(DeriveIden)]
enum Banner { Table, Position, Approved }

#[derive(DeriveIden)]
enum HollandQuestion { Table, Order }
