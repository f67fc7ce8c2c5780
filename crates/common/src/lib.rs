//! Shared building blocks for the recruitment platform crates:
//! wire types, logging setup, slug helpers and startup environment checks.

pub mod types;
pub mod utils;
pub mod slug;
pub mod env;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn message_response_serializes_message() {
        let m = types::MessageResponse::new("deleted");
        let v = serde_json::to_value(&m).unwrap();
        assert_eq!(v["message"], "deleted");
    }
}
