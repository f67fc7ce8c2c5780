use models::{account, role};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountFilter {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub search: Option<String>,
    pub status: Option<String>,
    /// Role id the account must hold.
    pub role: Option<Uuid>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccount {
    pub email: String,
    pub password: String,
    pub role_id: Option<Uuid>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAccount {
    pub email: Option<String>,
    pub password: Option<String>,
    pub status: Option<String>,
    pub is_verified: Option<bool>,
    pub role_ids: Option<Vec<Uuid>>,
}

/// Account together with its resolved, non-deleted roles.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountWithRoles {
    #[serde(flatten)]
    pub account: account::Model,
    pub roles: Vec<role::Model>,
}
