use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Single-row table; the row id is fixed to [`SINGLETON_ID`].
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "site_setting")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[serde(skip)]
    pub id: i32,
    pub logo_url: Option<String>,
    pub favicon_url: Option<String>,
    pub client_title: Option<String>,
    pub recruiter_title: Option<String>,
    pub notice_enabled: bool,
    pub notice_message: Option<String>,
    pub notice_color: Option<String>,
    pub updated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub const SINGLETON_ID: i32 = 1;

impl Default for Model {
    fn default() -> Self {
        Self {
            id: SINGLETON_ID,
            logo_url: None,
            favicon_url: None,
            client_title: None,
            recruiter_title: None,
            notice_enabled: false,
            notice_message: None,
            notice_color: None,
            updated_at: None,
        }
    }
}

/// Accept `#rgb` or `#rrggbb`.
pub fn validate_color(color: &str) -> Result<(), ModelError> {
    let hex = color.strip_prefix('#').unwrap_or("");
    if matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()) {
        Ok(())
    } else {
        Err(ModelError::Validation(format!("invalid notice color '{color}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors() {
        assert!(validate_color("#fff").is_ok());
        assert!(validate_color("#1A2b3C").is_ok());
        assert!(validate_color("fff").is_err());
        assert!(validate_color("#ffff").is_err());
        assert!(validate_color("#ggg").is_err());
    }
}
