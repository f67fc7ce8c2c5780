use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// `active` / `inactive` flag stored as text by most tables.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Active,
    Inactive,
}

impl RecordStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Active => "active",
            RecordStatus::Inactive => "inactive",
        }
    }

    /// Case-insensitive parse; the admin console sends both `ACTIVE` and `active`.
    pub fn parse(raw: &str) -> Result<Self, ModelError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(RecordStatus::Active),
            "inactive" => Ok(RecordStatus::Inactive),
            other => Err(ModelError::Validation(format!("invalid status '{other}'"))),
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            RecordStatus::Active => RecordStatus::Inactive,
            RecordStatus::Inactive => RecordStatus::Active,
        }
    }

    /// Toggle a stored status string; anything unrecognised counts as inactive.
    pub fn toggle_str(stored: &str) -> Self {
        Self::parse(stored).unwrap_or(RecordStatus::Inactive).toggled()
    }
}

impl Default for RecordStatus {
    fn default() -> Self { RecordStatus::Active }
}

/// Status filter of list queries: `active`/`inactive` filter, `all` disables
/// the filter, anything else (including no value) means `active`.
pub fn status_filter(raw: Option<&str>) -> Option<RecordStatus> {
    match raw.map(|s| s.trim().to_ascii_lowercase()) {
        Some(s) if s == "all" => None,
        Some(s) => Some(RecordStatus::parse(&s).unwrap_or_default()),
        None => Some(RecordStatus::Active),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_both_cases() {
        assert_eq!(RecordStatus::parse("ACTIVE").unwrap(), RecordStatus::Active);
        assert_eq!(RecordStatus::parse(" inactive ").unwrap(), RecordStatus::Inactive);
        assert!(RecordStatus::parse("archived").is_err());
    }

    #[test]
    fn toggle_flips() {
        assert_eq!(RecordStatus::toggle_str("active"), RecordStatus::Inactive);
        assert_eq!(RecordStatus::toggle_str("inactive"), RecordStatus::Active);
        assert_eq!(RecordStatus::toggle_str("garbage"), RecordStatus::Active);
    }

    #[test]
    fn filter_defaults_to_active() {
        assert_eq!(status_filter(None), Some(RecordStatus::Active));
        assert_eq!(status_filter(Some("bogus")), Some(RecordStatus::Active));
        assert_eq!(status_filter(Some("INACTIVE")), Some(RecordStatus::Inactive));
        assert_eq!(status_filter(Some("all")), None);
    }
}
