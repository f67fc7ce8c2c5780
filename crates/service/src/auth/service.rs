use std::sync::Arc;

use chrono::Utc;
use models::account::{self, normalize_email};
use models::role;
use models::status::RecordStatus;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::domain::{AccountSummary, AuthSession, LoginInput};
use super::password::{hash_password, verify_password};
use super::token::{self, Claims, TokenConfig};
use crate::accounts::repository::AccountRepository;
use crate::errors::ServiceError;
use crate::roles::repository::RoleRepository;

pub const ADMIN_ROLE: &str = "admin";
pub const ADMIN_PERMISSION: &str = "admin.access";

/// Auth business service independent of web framework
pub struct AuthService<A: AccountRepository, R: RoleRepository> {
    accounts: Arc<A>,
    roles: Arc<R>,
    cfg: TokenConfig,
}

impl<A: AccountRepository, R: RoleRepository> AuthService<A, R> {
    pub fn new(accounts: Arc<A>, roles: Arc<R>, cfg: TokenConfig) -> Self { Self { accounts, roles, cfg } }

    async fn role_names(&self, ids: &[Uuid]) -> Result<Vec<String>, ServiceError> {
        Ok(self.roles.find_many(ids).await?.into_iter().map(|r| r.name).collect())
    }

    /// Authenticate an active account and issue a token.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{AuthService, domain::LoginInput, token::TokenConfig};
    /// use service::accounts::repository::mock::MockAccountRepository;
    /// use service::roles::repository::mock::MockRoleRepository;
    /// use std::sync::Arc;
    /// let svc = AuthService::new(
    ///     Arc::new(MockAccountRepository::default()),
    ///     Arc::new(MockRoleRepository::default()),
    ///     TokenConfig { jwt_secret: "secret".into(), ttl_hours: 12 },
    /// );
    /// tokio_test::block_on(svc.bootstrap_admin("root@example.com", "Passw0rd!")).unwrap();
    /// let session = tokio_test::block_on(svc.login(LoginInput { email: "root@example.com".into(), password: "Passw0rd!".into() })).unwrap();
    /// assert_eq!(session.account.roles, vec!["admin"]);
    /// assert!(!session.token.is_empty());
    /// ```
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn login(&self, input: LoginInput) -> Result<AuthSession, ServiceError> {
        let denied = || ServiceError::Unauthorized("invalid credentials".into());
        let email = normalize_email(&input.email).map_err(|_| denied())?;
        let mut acc = self.accounts.find_by_email(&email).await?.ok_or_else(denied)?;
        if acc.deleted || acc.status != RecordStatus::Active.as_str() {
            warn!(account_id = %acc.id, "login refused for inactive account");
            return Err(denied());
        }
        if !verify_password(&input.password, &acc.password_hash) {
            return Err(denied());
        }
        let roles = self.role_names(&acc.role_ids).await?;
        let token = token::issue(&self.cfg, acc.id, &acc.email, roles.clone())?;
        acc.last_login_at = Some(Utc::now().into());
        let acc = self.accounts.update(acc).await?;
        info!(account_id = %acc.id, "account_logged_in");
        Ok(AuthSession { account: AccountSummary { account_id: acc.id, email: acc.email, roles }, token })
    }

    pub fn verify_token(&self, token: &str) -> Result<Claims, ServiceError> { token::verify(&self.cfg, token) }

    /// Current account behind verified claims.
    pub async fn me(&self, claims: &Claims) -> Result<AccountSummary, ServiceError> {
        let acc = self
            .accounts
            .find(claims.uid)
            .await?
            .ok_or_else(|| ServiceError::Unauthorized("account no longer exists".into()))?;
        let roles = self.role_names(&acc.role_ids).await?;
        Ok(AccountSummary { account_id: acc.id, email: acc.email, roles })
    }

    /// Create the `admin` role and an active, verified account holding it,
    /// unless an account with `email` already exists. Returns the new id.
    #[instrument(skip(self, password))]
    pub async fn bootstrap_admin(&self, email: &str, password: &str) -> Result<Option<Uuid>, ServiceError> {
        let email = normalize_email(email)?;
        account::validate_password(password)?;
        if self.accounts.find_by_email(&email).await?.is_some() {
            return Ok(None);
        }
        let now = Utc::now();
        let role = match self.roles.find_by_name(ADMIN_ROLE).await? {
            Some(r) => r,
            None => {
                self.roles
                    .insert(role::Model {
                        id: Uuid::new_v4(),
                        name: ADMIN_ROLE.into(),
                        permissions: vec![ADMIN_PERMISSION.into()],
                        is_active: RecordStatus::Active.as_str().into(),
                        deleted: false,
                        created_at: now.into(),
                        updated_at: now.into(),
                    })
                    .await?
            }
        };
        let acc = self
            .accounts
            .insert(account::Model {
                id: Uuid::new_v4(),
                email,
                password_hash: hash_password(password)?,
                status: RecordStatus::Active.as_str().into(),
                is_verified: true,
                email_verified_at: Some(now.into()),
                last_login_at: None,
                role_ids: vec![role.id],
                deleted: false,
                created_at: now.into(),
                updated_at: now.into(),
            })
            .await?;
        info!(account_id = %acc.id, "admin_bootstrapped");
        Ok(Some(acc.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::domain::UpdateAccount;
    use crate::accounts::repository::mock::MockAccountRepository;
    use crate::accounts::AccountService;
    use crate::roles::repository::mock::MockRoleRepository;

    struct Fixture {
        auth: AuthService<MockAccountRepository, MockRoleRepository>,
        accounts: AccountService<MockAccountRepository, MockRoleRepository>,
    }

    fn fixture() -> Fixture {
        let accounts = Arc::new(MockAccountRepository::default());
        let roles = Arc::new(MockRoleRepository::default());
        Fixture {
            auth: AuthService::new(accounts.clone(), roles.clone(), TokenConfig { jwt_secret: "t".into(), ttl_hours: 1 }),
            accounts: AccountService::new(accounts, roles),
        }
    }

    fn login(email: &str, password: &str) -> LoginInput { LoginInput { email: email.into(), password: password.into() } }

    #[tokio::test]
    async fn bootstrap_is_idempotent() {
        let f = fixture();
        assert!(f.auth.bootstrap_admin("admin@x.com", "Secret123").await.unwrap().is_some());
        assert!(f.auth.bootstrap_admin("admin@x.com", "Secret123").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn login_issues_verifiable_token_and_stamps_last_login() {
        let f = fixture();
        let id = f.auth.bootstrap_admin("admin@x.com", "Secret123").await.unwrap().unwrap();
        let s = f.auth.login(login("ADMIN@x.com", "Secret123")).await.unwrap();
        let claims = f.auth.verify_token(&s.token).unwrap();
        assert_eq!(claims.uid, id);
        assert_eq!(f.auth.me(&claims).await.unwrap().email, "admin@x.com");
        assert!(f.accounts.get(id).await.unwrap().last_login_at.is_some());
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_email_are_unauthorized() {
        let f = fixture();
        f.auth.bootstrap_admin("admin@x.com", "Secret123").await.unwrap();
        assert!(matches!(f.auth.login(login("admin@x.com", "nope-nope")).await, Err(ServiceError::Unauthorized(_))));
        assert!(matches!(f.auth.login(login("ghost@x.com", "Secret123")).await, Err(ServiceError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn inactive_account_cannot_log_in() {
        let f = fixture();
        let id = f.auth.bootstrap_admin("admin@x.com", "Secret123").await.unwrap().unwrap();
        f.accounts.update(id, UpdateAccount { status: Some("inactive".into()), ..Default::default() }).await.unwrap();
        assert!(f.auth.login(login("admin@x.com", "Secret123")).await.is_err());
    }
}
