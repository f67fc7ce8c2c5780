use models::job_package::Features;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPackageFilter {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub search: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobPackage {
    pub package_name: String,
    pub price: i64,
    pub duration_days: i32,
    #[serde(default)]
    pub features: Features,
    pub priority_level: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJobPackage {
    pub package_name: Option<String>,
    pub price: Option<i64>,
    pub duration_days: Option<i32>,
    pub features: Option<Features>,
    pub priority_level: Option<i32>,
    pub is_active: Option<bool>,
}
