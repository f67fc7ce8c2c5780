use std::sync::Arc;

use chrono::Utc;
use models::role::{self, normalize_name, normalize_permissions};
use models::status::RecordStatus;
use tracing::{info, instrument};
use uuid::Uuid;

use super::domain::{CreateRole, RoleFilter, UpdateRole};
use super::repository::RoleRepository;
use crate::errors::ServiceError;
use crate::pagination::Page;

pub struct RoleService<R: RoleRepository> {
    repo: Arc<R>,
}

impl<R: RoleRepository> RoleService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn list(&self, filter: &RoleFilter) -> Result<Page<role::Model>, ServiceError> {
        self.repo.list(filter).await
    }

    pub async fn get(&self, id: Uuid) -> Result<role::Model, ServiceError> {
        self.repo.find(id).await?.ok_or_else(|| ServiceError::not_found("role"))
    }

    /// Create a role; names are unique among non-deleted roles.
    ///
    /// # Examples
    /// ```
    /// use service::roles::{RoleService, domain::CreateRole, repository::mock::MockRoleRepository};
    /// use std::sync::Arc;
    /// let svc = RoleService::new(Arc::new(MockRoleRepository::default()));
    /// let input = CreateRole { name: "editor".into(), permissions: vec!["blogs.write".into()], is_active: None };
    /// let role = tokio_test::block_on(svc.create(input)).unwrap();
    /// assert_eq!(role.is_active, "active");
    /// ```
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: CreateRole) -> Result<role::Model, ServiceError> {
        let name = normalize_name(&input.name)?;
        if self.repo.find_by_name(&name).await?.is_some() {
            return Err(ServiceError::conflict(format!("role '{name}' already exists")));
        }
        let status = match input.is_active.as_deref() {
            Some(s) => RecordStatus::parse(s)?,
            None => RecordStatus::Active,
        };
        let now = Utc::now().into();
        let model = role::Model {
            id: Uuid::new_v4(),
            name,
            permissions: normalize_permissions(&input.permissions),
            is_active: status.as_str().to_string(),
            deleted: false,
            created_at: now,
            updated_at: now,
        };
        let created = self.repo.insert(model).await?;
        info!(role_id = %created.id, "role_created");
        Ok(created)
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, id: Uuid, input: UpdateRole) -> Result<role::Model, ServiceError> {
        let mut current = self.get(id).await?;
        if let Some(name) = input.name.as_deref() {
            let name = normalize_name(name)?;
            if let Some(other) = self.repo.find_by_name(&name).await? {
                if other.id != id {
                    return Err(ServiceError::conflict(format!("role '{name}' already exists")));
                }
            }
            current.name = name;
        }
        if let Some(perms) = input.permissions.as_deref() {
            current.permissions = normalize_permissions(perms);
        }
        if let Some(s) = input.is_active.as_deref() {
            current.is_active = RecordStatus::parse(s)?.as_str().to_string();
        }
        current.updated_at = Utc::now().into();
        let updated = self.repo.update(current).await?;
        info!(role_id = %id, "role_updated");
        Ok(updated)
    }

    /// Soft delete; accounts holding the role keep its id.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        if !self.repo.soft_delete(id).await? {
            return Err(ServiceError::not_found("role"));
        }
        info!(role_id = %id, "role_deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::repository::mock::MockRoleRepository;

    fn svc() -> RoleService<MockRoleRepository> { RoleService::new(Arc::new(MockRoleRepository::default())) }

    fn input(name: &str) -> CreateRole { CreateRole { name: name.into(), permissions: vec![], is_active: None } }

    #[tokio::test]
    async fn duplicate_name_conflicts() {
        let svc = svc();
        svc.create(input("admin")).await.unwrap();
        assert!(matches!(svc.create(input(" admin ")).await, Err(ServiceError::Conflict(_))));
    }

    #[tokio::test]
    async fn name_is_reusable_after_delete() {
        let svc = svc();
        let r = svc.create(input("hr")).await.unwrap();
        svc.delete(r.id).await.unwrap();
        assert!(matches!(svc.get(r.id).await, Err(ServiceError::NotFound(_))));
        svc.create(input("hr")).await.unwrap();
    }

    #[tokio::test]
    async fn update_keeps_own_name_and_parses_status() {
        let svc = svc();
        let r = svc.create(input("ops")).await.unwrap();
        let upd = UpdateRole { name: Some("ops".into()), permissions: Some(vec!["a".into(), "a".into()]), is_active: Some("INACTIVE".into()) };
        let r = svc.update(r.id, upd).await.unwrap();
        assert_eq!(r.permissions, vec!["a"]);
        assert_eq!(r.is_active, "inactive");
    }

    #[tokio::test]
    async fn list_defaults_to_active() {
        let svc = svc();
        svc.create(input("a")).await.unwrap();
        svc.create(CreateRole { name: "b".into(), permissions: vec![], is_active: Some("inactive".into()) }).await.unwrap();
        let page = svc.list(&RoleFilter::default()).await.unwrap();
        assert_eq!(page.total, 1);
        let all = svc.list(&RoleFilter { status: Some("all".into()), ..Default::default() }).await.unwrap();
        assert_eq!(all.total, 2);
    }
}
