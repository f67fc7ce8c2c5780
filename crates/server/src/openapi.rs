//! OpenAPI document served at `/api-docs/openapi.json`.
//!
//! Request bodies are described by the `*Doc` mirrors below; handlers take the
//! service input types directly.

use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct LoginRequest { pub email: String, pub password: String }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct CreateAccountDoc {
    pub email: String,
    pub password: String,
    pub role_id: Option<Uuid>,
    /// `active` or `inactive`
    pub status: Option<String>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct CreateRoleDoc {
    pub name: String,
    pub permissions: Vec<String>,
    pub is_active: Option<String>,
}

#[derive(ToSchema)]
pub struct CreateCategoryDoc {
    pub title: String,
    pub description: Option<String>,
    pub status: Option<String>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct CreateJobDoc {
    pub title: String,
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
    pub deadline: Option<String>,
    pub skills: Vec<String>,
    pub tags: Vec<String>,
    pub recruiter_id: Option<Uuid>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct CreateRecruiterDoc {
    pub full_name: String,
    pub gender: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub company: String,
    pub province: Option<String>,
    pub district: Option<String>,
    pub status: Option<String>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct CreateCvSampleDoc {
    pub name: String,
    pub title: String,
    pub description: Option<String>,
    pub demo_image: Option<String>,
    pub html: String,
    pub css: String,
    pub is_active: Option<bool>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct CreateBlogDoc {
    pub title: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub cover_image_url: String,
    pub tags: Vec<String>,
    pub published: bool,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct CreateBannerPackageDoc {
    pub name: String,
    pub description: Option<String>,
    /// `BELOW_SEARCH_BAR` or `BELOW_FEATURED_COMPANIES`
    pub position: String,
    pub preview_image: Option<String>,
    pub duration_days: i32,
    pub price: i64,
    pub max_banner_slots: i32,
    pub priority: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct PlaceOrderDoc {
    pub package_id: Uuid,
    pub account_id: Option<Uuid>,
    pub recruiter_id: Option<Uuid>,
    pub company_id: Option<Uuid>,
    pub title: String,
    pub image_url: String,
    pub redirect_url: Option<String>,
    pub alt_text: Option<String>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct CreateJobPackageDoc {
    pub package_name: String,
    pub price: i64,
    pub duration_days: i32,
    pub features: Vec<String>,
    pub priority_level: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(ToSchema)]
pub struct AnswerOptionDoc { pub label: String, pub value: i32 }

#[derive(ToSchema)]
pub struct CreateQuestionDoc {
    pub order: Option<i32>,
    pub content: String,
    /// One of `R`, `I`, `A`, `S`, `E`, `C`
    pub category: String,
    pub options: Option<Vec<AnswerOptionDoc>>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct CreateProfileDoc {
    pub code: String,
    pub title: String,
    pub description: String,
    pub suitable_careers: Vec<String>,
    pub suggested_skills: Vec<String>,
    pub image: Option<String>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct SubmittedAnswerDoc {
    pub question_id: Uuid,
    /// 0..=4 or a Likert label
    pub answer: String,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct SubmissionDoc {
    pub account_id: Option<Uuid>,
    pub answers: Vec<SubmittedAnswerDoc>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct SiteSettingsPatchDoc {
    pub logo_url: Option<String>,
    pub favicon_url: Option<String>,
    pub client_title: Option<String>,
    pub recruiter_title: Option<String>,
    pub notice_enabled: Option<bool>,
    pub notice_message: Option<String>,
    /// `#rgb` or `#rrggbb`
    pub notice_color: Option<String>,
}

#[derive(ToSchema)]
pub struct StoredMediaDoc { pub url: String, pub secure_url: String, pub public_id: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::accounts::list,
        crate::routes::accounts::create,
        crate::routes::accounts::detail,
        crate::routes::accounts::with_roles,
        crate::routes::accounts::update,
        crate::routes::accounts::remove,
        crate::routes::auth::login,
        crate::routes::auth::logout,
        crate::routes::auth::me,
        crate::routes::banners::live,
        crate::routes::banners::click,
        crate::routes::banners::view,
        crate::routes::banners::place_order,
        crate::routes::banners::list_packages,
        crate::routes::banners::create_package,
        crate::routes::banners::package_detail,
        crate::routes::banners::update_package,
        crate::routes::banners::remove_package,
        crate::routes::banners::list_banners,
        crate::routes::banners::banner_detail,
        crate::routes::banners::update_banner,
        crate::routes::banners::remove_banner,
        crate::routes::banners::list_orders,
        crate::routes::banners::approve_order,
        crate::routes::banners::reject_order,
        crate::routes::blogs::list_published,
        crate::routes::blogs::published,
        crate::routes::blogs::list_all,
        crate::routes::blogs::create,
        crate::routes::blogs::detail,
        crate::routes::blogs::update,
        crate::routes::blogs::remove,
        crate::routes::cv_samples::list_active,
        crate::routes::cv_samples::list,
        crate::routes::cv_samples::create,
        crate::routes::cv_samples::detail,
        crate::routes::cv_samples::update,
        crate::routes::cv_samples::remove,
        crate::routes::cv_samples::hard_remove,
        crate::routes::cv_samples::toggle_active,
        crate::routes::holland::public_questions,
        crate::routes::holland::submit,
        crate::routes::holland::list_questions,
        crate::routes::holland::create_question,
        crate::routes::holland::question,
        crate::routes::holland::update_question,
        crate::routes::holland::remove_question,
        crate::routes::holland::list_profiles,
        crate::routes::holland::create_profile,
        crate::routes::holland::profile,
        crate::routes::holland::update_profile,
        crate::routes::holland::remove_profile,
        crate::routes::holland::list_results,
        crate::routes::job_categories::list_public,
        crate::routes::job_categories::list,
        crate::routes::job_categories::create,
        crate::routes::job_categories::detail,
        crate::routes::job_categories::update,
        crate::routes::job_categories::remove,
        crate::routes::job_categories::toggle_status,
        crate::routes::job_packages::list_public,
        crate::routes::job_packages::list,
        crate::routes::job_packages::create,
        crate::routes::job_packages::detail,
        crate::routes::job_packages::update,
        crate::routes::job_packages::remove,
        crate::routes::jobs::list_public,
        crate::routes::jobs::view_public,
        crate::routes::jobs::list,
        crate::routes::jobs::create,
        crate::routes::jobs::update,
        crate::routes::jobs::detail,
        crate::routes::jobs::add_images,
        crate::routes::jobs::remove_image,
        crate::routes::jobs::remove,
        crate::routes::jobs::toggle_status,
        crate::routes::recruiters::list,
        crate::routes::recruiters::create,
        crate::routes::recruiters::detail,
        crate::routes::recruiters::update,
        crate::routes::recruiters::upload_avatar,
        crate::routes::recruiters::remove_avatar,
        crate::routes::recruiters::remove,
        crate::routes::recruiters::toggle_status,
        crate::routes::roles::list,
        crate::routes::roles::create,
        crate::routes::roles::detail,
        crate::routes::roles::update,
        crate::routes::roles::remove,
        crate::routes::site_settings::current,
        crate::routes::site_settings::update,
        crate::routes::uploads::upload_image,
        crate::routes::uploads::upload_site_asset,
    ),
    components(
        schemas(
            HealthResponse,
            LoginRequest,
            CreateAccountDoc,
            CreateRoleDoc,
            CreateCategoryDoc,
            CreateJobDoc,
            CreateRecruiterDoc,
            CreateCvSampleDoc,
            CreateBlogDoc,
            CreateBannerPackageDoc,
            PlaceOrderDoc,
            CreateJobPackageDoc,
            AnswerOptionDoc,
            CreateQuestionDoc,
            CreateProfileDoc,
            SubmittedAnswerDoc,
            SubmissionDoc,
            SiteSettingsPatchDoc,
            StoredMediaDoc,
        )
    ),
    modifiers(&BearerAuth),
    tags(
        (name = "health"),
        (name = "auth"),
        (name = "accounts"),
        (name = "roles"),
        (name = "job-categories"),
        (name = "jobs"),
        (name = "recruiters"),
        (name = "cv-samples"),
        (name = "blogs"),
        (name = "banners"),
        (name = "job-packages"),
        (name = "holland"),
        (name = "site-settings"),
        (name = "uploads")
    )
)]
pub struct ApiDoc;

struct BearerAuth;

impl utoipa::Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).bearer_format("JWT").build()),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_admin_and_public_paths() {
        let doc = ApiDoc::openapi();
        for path in ["/health", "/auth/login", "/jobs/{slug}", "/admin/banner-orders/{id}/approve", "/holland/submit", "/admin/site-settings"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
