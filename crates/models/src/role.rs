use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "role")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    /// Free-form permission strings; not checked against a closed set.
    pub permissions: Vec<String>,
    pub is_active: String,
    pub deleted: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn normalize_name(name: &str) -> Result<String, ModelError> {
    let n = name.trim();
    if n.is_empty() {
        return Err(ModelError::Validation("role name required".into()));
    }
    Ok(n.to_string())
}

/// Trim, drop blanks and duplicates while keeping first-seen order.
pub fn normalize_permissions(perms: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(perms.len());
    for p in perms {
        let p = p.trim();
        if !p.is_empty() && !out.iter().any(|e| e == p) {
            out.push(p.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permissions_are_deduplicated_in_order() {
        let perms = vec!["jobs.read".to_string(), " jobs.write".into(), "jobs.read".into(), "".into()];
        assert_eq!(normalize_permissions(&perms), vec!["jobs.read", "jobs.write"]);
    }

    #[test]
    fn blank_name_rejected() {
        assert!(normalize_name("   ").is_err());
        assert_eq!(normalize_name(" admin ").unwrap(), "admin");
    }
}
