use models::job;
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobFilter {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub search: Option<String>,
    pub status: Option<String>,
    pub job_type: Option<String>,
    pub category_id: Option<Uuid>,
    pub recruiter_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicJobFilter {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub search: Option<String>,
    pub category_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJob {
    pub title: String,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub benefits: Option<String>,
    pub quantity: Option<i32>,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub salary_type: Option<String>,
    #[serde(default)]
    pub salary_negotiable: bool,
    pub career: Option<String>,
    pub category_id: Option<Uuid>,
    pub level: Option<String>,
    pub job_type: Option<String>,
    pub location: Option<String>,
    pub address: Option<String>,
    pub deadline: Option<DateTimeWithTimeZone>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub recruiter_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJob {
    pub title: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub benefits: Option<String>,
    pub quantity: Option<i32>,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub salary_type: Option<String>,
    pub salary_negotiable: Option<bool>,
    pub career: Option<String>,
    pub category_id: Option<Uuid>,
    pub level: Option<String>,
    pub job_type: Option<String>,
    pub location: Option<String>,
    pub address: Option<String>,
    pub deadline: Option<DateTimeWithTimeZone>,
    pub is_active: Option<bool>,
    pub status: Option<String>,
    pub reason_reject: Option<String>,
    pub skills: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub recruiter_id: Option<Uuid>,
}

/// Admin detail view with the category title resolved.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDetail {
    #[serde(flatten)]
    pub job: job::Model,
    pub category_title: Option<String>,
}

/// Fields of a job visible on the public board.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PublicJob {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub benefits: Option<String>,
    pub quantity: Option<i32>,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub salary_type: Option<String>,
    pub salary_negotiable: bool,
    pub career: Option<String>,
    pub category_id: Option<Uuid>,
    pub level: Option<String>,
    pub job_type: Option<String>,
    pub location: Option<String>,
    pub address: Option<String>,
    pub deadline: Option<DateTimeWithTimeZone>,
    pub skills: Vec<String>,
    pub tags: Vec<String>,
    pub images: Vec<String>,
    pub recruiter_id: Option<Uuid>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl From<job::Model> for PublicJob {
    fn from(j: job::Model) -> Self {
        Self {
            id: j.id,
            title: j.title,
            slug: j.slug,
            description: j.description,
            requirements: j.requirements,
            benefits: j.benefits,
            quantity: j.quantity,
            salary_min: j.salary_min,
            salary_max: j.salary_max,
            salary_type: j.salary_type,
            salary_negotiable: j.salary_negotiable,
            career: j.career,
            category_id: j.category_id,
            level: j.level,
            job_type: j.job_type,
            location: j.location,
            address: j.address,
            deadline: j.deadline,
            skills: j.skills,
            tags: j.tags,
            images: j.images,
            recruiter_id: j.recruiter_id,
            created_at: j.created_at,
            updated_at: j.updated_at,
        }
    }
}
