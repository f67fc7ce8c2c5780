use std::sync::Arc;

use chrono::Utc;
use models::blog::{self, normalize_tags};
use models::errors::require_text;
use tracing::{info, instrument};
use uuid::Uuid;

use super::domain::{CreateBlog, PublicBlogFilter, UpdateBlog};
use super::repository::BlogRepository;
use crate::errors::ServiceError;
use crate::pagination::Page;
use crate::slug::unique_slug;

pub struct BlogService<R: BlogRepository> {
    repo: Arc<R>,
}

impl<R: BlogRepository> BlogService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn list_all(&self) -> Result<Vec<blog::Model>, ServiceError> { self.repo.list_all().await }

    pub async fn list_published(&self, filter: &PublicBlogFilter) -> Result<Page<blog::Model>, ServiceError> {
        self.repo.list_published(filter).await
    }

    pub async fn get(&self, id: Uuid) -> Result<blog::Model, ServiceError> {
        self.repo.find(id).await?.ok_or_else(|| ServiceError::not_found("blog"))
    }

    pub async fn get_published(&self, slug: &str) -> Result<blog::Model, ServiceError> {
        self.repo.find_published_by_slug(slug).await?.ok_or_else(|| ServiceError::not_found("blog"))
    }

    #[instrument(skip(self, input), fields(title = %input.title))]
    pub async fn create(&self, input: CreateBlog) -> Result<blog::Model, ServiceError> {
        require_text("title", &input.title)?;
        require_text("content", &input.content)?;
        require_text("coverImageUrl", &input.cover_image_url)?;
        let title = input.title.trim().to_string();
        let slug = unique_slug(self.repo.as_ref(), &title, None).await?;
        let now = Utc::now().into();
        let created = self
            .repo
            .insert(blog::Model {
                id: Uuid::new_v4(),
                title,
                slug,
                excerpt: input.excerpt,
                content: input.content,
                cover_image_url: input.cover_image_url,
                tags: normalize_tags(&input.tags),
                published: input.published,
                published_at: input.published.then_some(now),
                deleted: false,
                created_at: now,
                updated_at: now,
            })
            .await?;
        info!(blog_id = %created.id, slug = %created.slug, "blog_created");
        Ok(created)
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, id: Uuid, input: UpdateBlog) -> Result<blog::Model, ServiceError> {
        let mut b = self.get(id).await?;
        let now = Utc::now().into();
        if let Some(title) = input.title.as_deref() {
            require_text("title", title)?;
            let title = title.trim();
            if title != b.title {
                b.slug = unique_slug(self.repo.as_ref(), title, Some(id)).await?;
                b.title = title.to_string();
            }
        }
        if let Some(content) = input.content {
            require_text("content", &content)?;
            b.content = content;
        }
        if let Some(cover) = input.cover_image_url {
            require_text("coverImageUrl", &cover)?;
            b.cover_image_url = cover;
        }
        if input.excerpt.is_some() {
            b.excerpt = input.excerpt;
        }
        if let Some(tags) = input.tags {
            b.tags = normalize_tags(&tags);
        }
        if let Some(p) = input.published {
            if p && b.published_at.is_none() {
                b.published_at = Some(now);
            }
            b.published = p;
        }
        b.updated_at = now;
        let updated = self.repo.update(b).await?;
        info!(blog_id = %id, published = updated.published, "blog_updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        if !self.repo.soft_delete(id).await? {
            return Err(ServiceError::not_found("blog"));
        }
        info!(blog_id = %id, "blog_deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blogs::repository::mock::MockBlogRepository;

    fn svc() -> BlogService<MockBlogRepository> { BlogService::new(Arc::new(MockBlogRepository::default())) }

    fn input(title: &str) -> CreateBlog {
        CreateBlog {
            title: title.into(),
            content: "<p>hi</p>".into(),
            cover_image_url: "/uploads/blogs/x.png".into(),
            tags: vec!["CV".into(), "Tips".into()],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn published_at_is_stamped_once() {
        let svc = svc();
        let b = svc.create(input("Viết CV thế nào")).await.unwrap();
        assert!(b.published_at.is_none());
        let b = svc.update(b.id, UpdateBlog { published: Some(true), ..Default::default() }).await.unwrap();
        let first = b.published_at.unwrap();
        svc.update(b.id, UpdateBlog { published: Some(false), ..Default::default() }).await.unwrap();
        let b = svc.update(b.id, UpdateBlog { published: Some(true), ..Default::default() }).await.unwrap();
        assert_eq!(b.published_at, Some(first));
    }

    #[tokio::test]
    async fn public_views_only_see_published() {
        let svc = svc();
        let draft = svc.create(input("Draft")).await.unwrap();
        let mut live = input("Live");
        live.published = true;
        svc.create(live).await.unwrap();
        assert!(svc.get_published(&draft.slug).await.is_err());
        assert_eq!(svc.get_published("live").await.unwrap().title, "Live");
        let page = svc.list_published(&PublicBlogFilter { tag: Some("cv".into()), ..Default::default() }).await.unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(svc.list_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn slugs_stay_unique() {
        let svc = svc();
        svc.create(input("Tin tức")).await.unwrap();
        assert_eq!(svc.create(input("Tin tức")).await.unwrap().slug, "tin-tuc-1");
    }
}
