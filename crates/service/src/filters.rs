//! Shared list-filter helpers.

use models::status::RecordStatus;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::{Expr, IntoColumnRef, SimpleExpr};

/// Trimmed, non-empty search term.
pub fn search_term(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim).filter(|s| !s.is_empty()).map(str::to_string)
}

/// Case-insensitive substring match on `col`.
pub fn ilike<C: IntoColumnRef>(col: C, term: &str) -> SimpleExpr {
    let escaped = term.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_");
    Expr::col(col).ilike(format!("%{escaped}%"))
}

/// In-memory counterpart of [`ilike`] used by mock repositories.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Whether a stored status string passes the filter.
pub fn status_matches(stored: &str, wanted: Option<RecordStatus>) -> bool {
    wanted.map_or(true, |w| stored.eq_ignore_ascii_case(w.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::status::status_filter;

    #[test]
    fn blank_search_is_ignored() {
        assert_eq!(search_term(Some("   ")), None);
        assert_eq!(search_term(None), None);
        assert_eq!(search_term(Some(" dev ")).as_deref(), Some("dev"));
    }

    #[test]
    fn status_matching() {
        assert!(status_matches("active", status_filter(None)));
        assert!(!status_matches("inactive", status_filter(None)));
        assert!(status_matches("inactive", status_filter(Some("all"))));
    }

    #[test]
    fn contains_ignores_case() {
        assert!(contains_ci("Senior Rust Engineer", "rust"));
        assert!(!contains_ci("Go", "rust"));
    }
}
