//! Create `job_category`, `recruiter` and `job`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(JobCategory::Table)
                    .if_not_exists()
                    .col(uuid(JobCategory::Id).primary_key())
                    .col(string(JobCategory::Title))
                    .col(string(JobCategory::Slug).unique_key())
                    .col(text_null(JobCategory::Description))
                    .col(string_len(JobCategory::Status, 16).default("active"))
                    .col(big_integer(JobCategory::Views).default(0))
                    .col(boolean(JobCategory::Deleted).default(false))
                    .col(timestamp_with_time_zone(JobCategory::CreatedAt))
                    .col(timestamp_with_time_zone(JobCategory::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Recruiter::Table)
                    .if_not_exists()
                    .col(uuid(Recruiter::Id).primary_key())
                    .col(string(Recruiter::FullName))
                    .col(string_len(Recruiter::Gender, 16))
                    .col(string_len(Recruiter::Email, 255).unique_key())
                    .col(string(Recruiter::PasswordHash))
                    .col(string_len(Recruiter::Phone, 32))
                    .col(string(Recruiter::Company))
                    .col(string_null(Recruiter::Province))
                    .col(string_null(Recruiter::District))
                    .col(string_len(Recruiter::Status, 16).default("active"))
                    .col(string_null(Recruiter::Avatar))
                    .col(boolean(Recruiter::Deleted).default(false))
                    .col(timestamp_with_time_zone(Recruiter::CreatedAt))
                    .col(timestamp_with_time_zone(Recruiter::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Job::Table)
                    .if_not_exists()
                    .col(uuid(Job::Id).primary_key())
                    .col(string(Job::Title))
                    .col(string(Job::Slug).unique_key())
                    .col(text_null(Job::Description))
                    .col(text_null(Job::Requirements))
                    .col(text_null(Job::Benefits))
                    .col(integer_null(Job::Quantity))
                    .col(big_integer_null(Job::SalaryMin))
                    .col(big_integer_null(Job::SalaryMax))
                    .col(string_null(Job::SalaryType))
                    .col(boolean(Job::SalaryNegotiable).default(false))
                    .col(string_null(Job::Career))
                    .col(uuid_null(Job::CategoryId))
                    .col(string_null(Job::Level))
                    .col(string_null(Job::JobType))
                    .col(string_null(Job::Location))
                    .col(string_null(Job::Address))
                    .col(timestamp_with_time_zone_null(Job::Deadline))
                    .col(boolean(Job::IsActive).default(true))
                    .col(string_len(Job::Status, 16).default("active"))
                    .col(text_null(Job::ReasonReject))
                    .col(big_integer(Job::Views).default(0))
                    .col(array(Job::Skills, ColumnType::Text).default(Expr::cust("'{}'")))
                    .col(array(Job::Tags, ColumnType::Text).default(Expr::cust("'{}'")))
                    .col(array(Job::Images, ColumnType::Text).default(Expr::cust("'{}'")))
                    .col(uuid_null(Job::RecruiterId))
                    .col(boolean(Job::Deleted).default(false))
                    .col(timestamp_with_time_zone(Job::CreatedAt))
                    .col(timestamp_with_time_zone(Job::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Job::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Recruiter::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(JobCategory::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum JobCategory { Table, Id, Title, Slug, Description, Status, Views, Deleted, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Recruiter {
    Table,
    Id,
    FullName,
    Gender,
    Email,
    PasswordHash,
    Phone,
    Company,
    Province,
    District,
    Status,
    Avatar,
    Deleted,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Job {
    Table,
    Id,
    Title,
    Slug,
    Description,
    Requirements,
    Benefits,
    Quantity,
    SalaryMin,
    SalaryMax,
    SalaryType,
    SalaryNegotiable,
    Career,
    CategoryId,
    Level,
    JobType,
    Location,
    Address,
    Deadline,
    IsActive,
    Status,
    ReasonReject,
    Views,
    Skills,
    Tags,
    Images,
    RecruiterId,
    Deleted,
    CreatedAt,
    UpdatedAt,
}
