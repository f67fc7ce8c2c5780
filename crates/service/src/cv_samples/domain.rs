use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CvSampleFilter {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCvSample {
    pub name: String,
    pub title: String,
    pub description: Option<String>,
    pub demo_image: Option<String>,
    pub html: String,
    #[serde(default)]
    pub css: String,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCvSample {
    pub name: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub demo_image: Option<String>,
    pub html: Option<String>,
    pub css: Option<String>,
    pub is_active: Option<bool>,
}
