use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecruiterFilter {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub search: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecruiter {
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

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecruiter {
    pub full_name: Option<String>,
    pub gender: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub province: Option<String>,
    pub district: Option<String>,
    pub status: Option<String>,
}
