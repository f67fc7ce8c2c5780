use std::path::PathBuf;
use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::accounts::repository::SeaOrmAccountRepository;
use service::accounts::AccountService;
use service::auth::token::TokenConfig;
use service::auth::AuthService;
use service::banners::repository::SeaOrmBannerRepository;
use service::banners::BannerService;
use service::blogs::repository::SeaOrmBlogRepository;
use service::blogs::BlogService;
use service::cv_samples::repository::SeaOrmCvSampleRepository;
use service::cv_samples::CvSampleService;
use service::holland::repository::SeaOrmHollandRepository;
use service::holland::HollandService;
use service::job_categories::repository::SeaOrmJobCategoryRepository;
use service::job_categories::JobCategoryService;
use service::job_packages::repository::SeaOrmJobPackageRepository;
use service::job_packages::JobPackageService;
use service::jobs::repository::SeaOrmJobRepository;
use service::jobs::JobService;
use service::media::MediaStore;
use service::recruiters::repository::SeaOrmRecruiterRepository;
use service::recruiters::RecruiterService;
use service::roles::repository::SeaOrmRoleRepository;
use service::roles::RoleService;
use service::site_settings::repository::SeaOrmSiteSettingsRepository;
use service::site_settings::SiteSettingsService;

pub type Auth = AuthService<SeaOrmAccountRepository, SeaOrmRoleRepository>;
pub type Accounts = AccountService<SeaOrmAccountRepository, SeaOrmRoleRepository>;
pub type Jobs = JobService<SeaOrmJobRepository, SeaOrmJobCategoryRepository>;
pub type Banners = BannerService<SeaOrmBannerRepository, SeaOrmBannerRepository, SeaOrmBannerRepository>;

/// Shared handler state; every service is built once over the same pool.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub media: Arc<dyn MediaStore>,
    pub upload_dir: PathBuf,
    pub auth: Arc<Auth>,
    pub accounts: Arc<Accounts>,
    pub roles: Arc<RoleService<SeaOrmRoleRepository>>,
    pub job_categories: Arc<JobCategoryService<SeaOrmJobCategoryRepository>>,
    pub jobs: Arc<Jobs>,
    pub recruiters: Arc<RecruiterService<SeaOrmRecruiterRepository>>,
    pub cv_samples: Arc<CvSampleService<SeaOrmCvSampleRepository>>,
    pub blogs: Arc<BlogService<SeaOrmBlogRepository>>,
    pub banners: Arc<Banners>,
    pub job_packages: Arc<JobPackageService<SeaOrmJobPackageRepository>>,
    pub holland: Arc<HollandService<SeaOrmHollandRepository>>,
    pub site_settings: Arc<SiteSettingsService<SeaOrmSiteSettingsRepository>>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, tokens: TokenConfig, media: Arc<dyn MediaStore>, upload_dir: impl Into<PathBuf>) -> Self {
        let accounts = Arc::new(SeaOrmAccountRepository { db: db.clone() });
        let roles = Arc::new(SeaOrmRoleRepository { db: db.clone() });
        let categories = Arc::new(SeaOrmJobCategoryRepository { db: db.clone() });
        let banners = Arc::new(SeaOrmBannerRepository { db: db.clone() });
        Self {
            auth: Arc::new(AuthService::new(accounts.clone(), roles.clone(), tokens)),
            accounts: Arc::new(AccountService::new(accounts, roles.clone())),
            roles: Arc::new(RoleService::new(roles)),
            job_categories: Arc::new(JobCategoryService::new(categories.clone())),
            jobs: Arc::new(JobService::new(Arc::new(SeaOrmJobRepository { db: db.clone() }), categories, media.clone())),
            recruiters: Arc::new(RecruiterService::new(Arc::new(SeaOrmRecruiterRepository { db: db.clone() }), media.clone())),
            cv_samples: Arc::new(CvSampleService::new(Arc::new(SeaOrmCvSampleRepository { db: db.clone() }))),
            blogs: Arc::new(BlogService::new(Arc::new(SeaOrmBlogRepository { db: db.clone() }))),
            banners: Arc::new(BannerService::new(banners.clone(), banners.clone(), banners)),
            job_packages: Arc::new(JobPackageService::new(Arc::new(SeaOrmJobPackageRepository { db: db.clone() }))),
            holland: Arc::new(HollandService::new(Arc::new(SeaOrmHollandRepository { db: db.clone() }))),
            site_settings: Arc::new(SiteSettingsService::new(Arc::new(SeaOrmSiteSettingsRepository { db: db.clone() }))),
            media,
            upload_dir: upload_dir.into(),
            db,
        }
    }
}
