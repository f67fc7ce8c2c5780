use std::sync::Arc;

use chrono::Utc;
use models::account::{self, normalize_email, validate_password};
use models::status::RecordStatus;
use tracing::{info, instrument};
use uuid::Uuid;

use super::domain::{AccountFilter, AccountWithRoles, CreateAccount, UpdateAccount};
use super::repository::AccountRepository;
use crate::auth::password::hash_password;
use crate::errors::ServiceError;
use crate::pagination::Page;
use crate::roles::repository::RoleRepository;

pub struct AccountService<A: AccountRepository, R: RoleRepository> {
    repo: Arc<A>,
    roles: Arc<R>,
}

fn parse_status(raw: Option<&str>) -> Result<RecordStatus, ServiceError> {
    Ok(match raw {
        Some(s) => RecordStatus::parse(s)?,
        None => RecordStatus::Active,
    })
}

impl<A: AccountRepository, R: RoleRepository> AccountService<A, R> {
    pub fn new(repo: Arc<A>, roles: Arc<R>) -> Self { Self { repo, roles } }

    pub async fn list(&self, filter: &AccountFilter) -> Result<Page<account::Model>, ServiceError> {
        self.repo.list(filter).await
    }

    pub async fn get(&self, id: Uuid) -> Result<account::Model, ServiceError> {
        self.repo.find(id).await?.ok_or_else(|| ServiceError::not_found("account"))
    }

    pub async fn get_with_roles(&self, id: Uuid) -> Result<AccountWithRoles, ServiceError> {
        let account = self.get(id).await?;
        let roles = self.roles.find_many(&account.role_ids).await?;
        Ok(AccountWithRoles { account, roles })
    }

    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn create(&self, input: CreateAccount) -> Result<account::Model, ServiceError> {
        let email = normalize_email(&input.email)?;
        validate_password(&input.password)?;
        let status = parse_status(input.status.as_deref())?;
        if self.repo.find_by_email(&email).await?.is_some() {
            return Err(ServiceError::conflict(format!("email '{email}' already in use")));
        }
        let now = Utc::now().into();
        let model = account::Model {
            id: Uuid::new_v4(),
            email,
            password_hash: hash_password(&input.password)?,
            status: status.as_str().to_string(),
            is_verified: false,
            email_verified_at: None,
            last_login_at: None,
            role_ids: input.role_id.into_iter().collect(),
            deleted: false,
            created_at: now,
            updated_at: now,
        };
        let created = self.repo.insert(model).await?;
        info!(account_id = %created.id, "account_created");
        Ok(created)
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, id: Uuid, input: UpdateAccount) -> Result<account::Model, ServiceError> {
        let mut current = self.get(id).await?;
        let now = Utc::now();
        if let Some(email) = input.email.as_deref() {
            let email = normalize_email(email)?;
            if email != current.email {
                if self.repo.find_by_email(&email).await?.is_some() {
                    return Err(ServiceError::conflict(format!("email '{email}' already in use")));
                }
                current.email = email;
            }
        }
        if let Some(pw) = input.password.as_deref() {
            validate_password(pw)?;
            current.password_hash = hash_password(pw)?;
        }
        if let Some(s) = input.status.as_deref() {
            current.status = RecordStatus::parse(s)?.as_str().to_string();
        }
        if let Some(verified) = input.is_verified {
            if verified && !current.is_verified {
                current.email_verified_at = Some(now.into());
            }
            current.is_verified = verified;
        }
        if let Some(role_ids) = input.role_ids {
            let mut ids: Vec<Uuid> = Vec::with_capacity(role_ids.len());
            for r in role_ids {
                if !ids.contains(&r) {
                    ids.push(r);
                }
            }
            current.role_ids = ids;
        }
        current.updated_at = now.into();
        let updated = self.repo.update(current).await?;
        info!(account_id = %id, "account_updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        if !self.repo.soft_delete(id).await? {
            return Err(ServiceError::not_found("account"));
        }
        info!(account_id = %id, "account_deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::repository::mock::MockAccountRepository;
    use crate::auth::password::verify_password;
    use crate::roles::domain::CreateRole;
    use crate::roles::repository::mock::MockRoleRepository;
    use crate::roles::RoleService;

    struct Fixture {
        accounts: AccountService<MockAccountRepository, MockRoleRepository>,
        roles: RoleService<MockRoleRepository>,
    }

    fn fixture() -> Fixture {
        let roles = Arc::new(MockRoleRepository::default());
        Fixture {
            accounts: AccountService::new(Arc::new(MockAccountRepository::default()), roles.clone()),
            roles: RoleService::new(roles),
        }
    }

    fn create(email: &str) -> CreateAccount {
        CreateAccount { email: email.into(), password: "Secret123".into(), role_id: None, status: None }
    }

    #[tokio::test]
    async fn create_normalizes_and_hashes() {
        let f = fixture();
        let a = f.accounts.create(create(" Admin@Gmail.com ")).await.unwrap();
        assert_eq!(a.email, "admin@gmail.com");
        assert_eq!(a.status, "active");
        assert!(verify_password("Secret123", &a.password_hash));
        let json = serde_json::to_value(&a).unwrap();
        assert!(json.get("passwordHash").is_none());
    }

    #[tokio::test]
    async fn short_password_and_bad_status_rejected() {
        let f = fixture();
        let mut input = create("a@b.com");
        input.password = "short".into();
        assert!(matches!(f.accounts.create(input).await, Err(ServiceError::Model(_))));
        let mut input = create("a@b.com");
        input.status = Some("banned".into());
        assert!(f.accounts.create(input).await.is_err());
    }

    #[tokio::test]
    async fn duplicate_email_conflicts_even_after_delete() {
        let f = fixture();
        let a = f.accounts.create(create("dup@x.com")).await.unwrap();
        f.accounts.delete(a.id).await.unwrap();
        assert!(matches!(f.accounts.create(create("DUP@x.com")).await, Err(ServiceError::Conflict(_))));
    }

    #[tokio::test]
    async fn verifying_stamps_timestamp_once() {
        let f = fixture();
        let a = f.accounts.create(create("v@x.com")).await.unwrap();
        let upd = UpdateAccount { is_verified: Some(true), ..Default::default() };
        let a = f.accounts.update(a.id, upd.clone()).await.unwrap();
        let first = a.email_verified_at.unwrap();
        let a = f.accounts.update(a.id, upd).await.unwrap();
        assert_eq!(a.email_verified_at, Some(first));
    }

    #[tokio::test]
    async fn roles_resolve_without_deleted_ones() {
        let f = fixture();
        let keep = f.roles.create(CreateRole { name: "hr".into(), permissions: vec![], is_active: None }).await.unwrap();
        let gone = f.roles.create(CreateRole { name: "old".into(), permissions: vec![], is_active: None }).await.unwrap();
        let mut input = create("r@x.com");
        input.role_id = Some(keep.id);
        let a = f.accounts.create(input).await.unwrap();
        let upd = UpdateAccount { role_ids: Some(vec![keep.id, gone.id, keep.id]), ..Default::default() };
        f.accounts.update(a.id, upd).await.unwrap();
        f.roles.delete(gone.id).await.unwrap();

        let with = f.accounts.get_with_roles(a.id).await.unwrap();
        assert_eq!(with.account.role_ids, vec![keep.id, gone.id]);
        assert_eq!(with.roles.len(), 1);
        assert_eq!(with.roles[0].id, keep.id);
    }

    #[tokio::test]
    async fn list_filters_by_role_and_search() {
        let f = fixture();
        let role = Uuid::new_v4();
        let mut input = create("alice@x.com");
        input.role_id = Some(role);
        f.accounts.create(input).await.unwrap();
        f.accounts.create(create("bob@x.com")).await.unwrap();
        let page = f.accounts.list(&AccountFilter { role: Some(role), ..Default::default() }).await.unwrap();
        assert_eq!(page.total, 1);
        let page = f.accounts.list(&AccountFilter { search: Some("BOB".into()), ..Default::default() }).await.unwrap();
        assert_eq!(page.data[0].email, "bob@x.com");
    }
}
