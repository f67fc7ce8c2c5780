use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    #[sea_orm(string_value = "PENDING")]
    Pending,
    #[sea_orm(string_value = "PAID")]
    Paid,
    #[sea_orm(string_value = "FAILED")]
    Failed,
    #[sea_orm(string_value = "CANCELLED")]
    Cancelled,
}

impl OrderStatus {
    pub fn parse(raw: &str) -> Result<Self, ModelError> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "PENDING" => Ok(Self::Pending),
            "PAID" => Ok(Self::Paid),
            "FAILED" => Ok(Self::Failed),
            "CANCELLED" => Ok(Self::Cancelled),
            other => Err(ModelError::Validation(format!("invalid order status '{other}'"))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "banner_order")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub package_id: Uuid,
    pub account_id: Option<Uuid>,
    pub recruiter_id: Option<Uuid>,
    pub company_id: Option<Uuid>,
    pub amount: i64,
    pub status: OrderStatus,
    pub title: String,
    pub image_url: String,
    pub redirect_url: Option<String>,
    pub alt_text: Option<String>,
    pub banner_id: Option<Uuid>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Outcome of checking whether an order may be turned into a banner.
#[derive(Debug, PartialEq, Eq)]
pub enum Approval {
    Allowed,
    AlreadyLinked,
    InvalidStatus(OrderStatus),
}

impl Model {
    pub fn approval(&self) -> Approval {
        if self.banner_id.is_some() {
            return Approval::AlreadyLinked;
        }
        match self.status {
            OrderStatus::Pending | OrderStatus::Paid => Approval::Allowed,
            other => Approval::InvalidStatus(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn order(status: OrderStatus, banner_id: Option<Uuid>) -> Model {
        let now = Utc::now().into();
        Model {
            id: Uuid::new_v4(),
            package_id: Uuid::new_v4(),
            account_id: None,
            recruiter_id: None,
            company_id: None,
            amount: 100,
            status,
            title: "t".into(),
            image_url: "u".into(),
            redirect_url: None,
            alt_text: None,
            banner_id,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn approval_rules() {
        assert_eq!(order(OrderStatus::Pending, None).approval(), Approval::Allowed);
        assert_eq!(order(OrderStatus::Paid, None).approval(), Approval::Allowed);
        assert_eq!(order(OrderStatus::Paid, Some(Uuid::new_v4())).approval(), Approval::AlreadyLinked);
        assert_eq!(order(OrderStatus::Failed, None).approval(), Approval::InvalidStatus(OrderStatus::Failed));
        assert_eq!(order(OrderStatus::Cancelled, None).approval(), Approval::InvalidStatus(OrderStatus::Cancelled));
    }

    #[test]
    fn status_parse_is_case_insensitive() {
        assert_eq!(OrderStatus::parse("paid").unwrap(), OrderStatus::Paid);
        assert!(OrderStatus::parse("refunded").is_err());
    }
}
