//! Unique slug generation by linear probing.

use async_trait::async_trait;
use common::slug::{candidate, slugify};
use uuid::Uuid;

use crate::errors::ServiceError;

/// Probe cap; a title colliding this many times indicates a bug upstream.
const MAX_ATTEMPTS: u32 = 1000;

/// Lookup used while probing: is `slug` held by a row other than `exclude`?
#[async_trait]
pub trait SlugProbe: Send + Sync {
    async fn slug_taken(&self, slug: &str, exclude: Option<Uuid>) -> Result<bool, ServiceError>;
}

/// First free slug among `base`, `base-1`, `base-2`, ... for `title`.
pub async fn unique_slug<P: SlugProbe + ?Sized>(probe: &P, title: &str, exclude: Option<Uuid>) -> Result<String, ServiceError> {
    let base = slugify(title);
    for attempt in 0..MAX_ATTEMPTS {
        let slug = candidate(&base, attempt);
        if !probe.slug_taken(&slug, exclude).await? {
            return Ok(slug);
        }
    }
    Err(ServiceError::conflict(format!("no free slug for '{base}'")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct Taken(HashMap<String, Uuid>);

    #[async_trait]
    impl SlugProbe for Taken {
        async fn slug_taken(&self, slug: &str, exclude: Option<Uuid>) -> Result<bool, ServiceError> {
            Ok(self.0.get(slug).is_some_and(|owner| Some(*owner) != exclude))
        }
    }

    #[tokio::test]
    async fn first_candidate_when_free() {
        let probe = Taken(HashMap::new());
        assert_eq!(unique_slug(&probe, "Kế toán trưởng", None).await.unwrap(), "ke-toan-truong");
    }

    #[tokio::test]
    async fn probes_past_taken_slugs() {
        let mut m = HashMap::new();
        m.insert("dev".to_string(), Uuid::new_v4());
        m.insert("dev-1".to_string(), Uuid::new_v4());
        let probe = Taken(m);
        assert_eq!(unique_slug(&probe, "Dev", None).await.unwrap(), "dev-2");
    }

    #[tokio::test]
    async fn own_slug_is_not_a_collision() {
        let me = Uuid::new_v4();
        let mut m = HashMap::new();
        m.insert("dev".to_string(), me);
        let probe = Taken(m);
        assert_eq!(unique_slug(&probe, "Dev", Some(me)).await.unwrap(), "dev");
    }
}
