use models::holland_question::AnswerOption;
use models::{holland_profile, holland_result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::scoring::Answer;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuestion {
    pub order: Option<i32>,
    pub content: String,
    pub category: String,
    pub options: Option<Vec<AnswerOption>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuestion {
    pub order: Option<i32>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub options: Option<Vec<AnswerOption>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProfile {
    pub code: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub suitable_careers: Vec<String>,
    #[serde(default)]
    pub suggested_skills: Vec<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfile {
    pub code: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub suitable_careers: Option<Vec<String>>,
    pub suggested_skills: Option<Vec<String>>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultFilter {
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedAnswer {
    pub question_id: Uuid,
    pub answer: Answer,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub account_id: Option<Uuid>,
    #[serde(default)]
    pub answers: Vec<SubmittedAnswer>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmissionOutcome {
    pub result: holland_result::Model,
    pub profile: Option<holland_profile::Model>,
}
