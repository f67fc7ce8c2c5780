use async_trait::async_trait;
use models::{holland_profile, holland_question, holland_result};
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use super::domain::ResultFilter;
use crate::errors::ServiceError;
use crate::pagination::{fetch_page, Page, Pagination};

#[async_trait]
pub trait HollandRepository: Send + Sync {
    /// Non-deleted questions by ascending `order`.
    async fn list_questions(&self) -> Result<Vec<holland_question::Model>, ServiceError>;
    async fn find_question(&self, id: Uuid) -> Result<Option<holland_question::Model>, ServiceError>;
    async fn find_questions(&self, ids: &[Uuid]) -> Result<Vec<holland_question::Model>, ServiceError>;
    async fn insert_question(&self, model: holland_question::Model) -> Result<holland_question::Model, ServiceError>;
    async fn update_question(&self, model: holland_question::Model) -> Result<holland_question::Model, ServiceError>;
    async fn delete_question(&self, id: Uuid) -> Result<bool, ServiceError>;

    async fn list_profiles(&self) -> Result<Vec<holland_profile::Model>, ServiceError>;
    async fn find_profile(&self, id: Uuid) -> Result<Option<holland_profile::Model>, ServiceError>;
    /// Lookup by code, soft-deleted rows included since the code column is unique.
    async fn find_profile_by_code(&self, code: &str) -> Result<Option<holland_profile::Model>, ServiceError>;
    async fn insert_profile(&self, model: holland_profile::Model) -> Result<holland_profile::Model, ServiceError>;
    async fn update_profile(&self, model: holland_profile::Model) -> Result<holland_profile::Model, ServiceError>;
    async fn delete_profile(&self, id: Uuid) -> Result<bool, ServiceError>;

    async fn list_results(&self, filter: &ResultFilter) -> Result<Page<holland_result::Model>, ServiceError>;
    async fn insert_result(&self, model: holland_result::Model) -> Result<holland_result::Model, ServiceError>;
}

pub struct SeaOrmHollandRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl HollandRepository for SeaOrmHollandRepository {
    async fn list_questions(&self) -> Result<Vec<holland_question::Model>, ServiceError> {
        Ok(holland_question::Entity::find()
            .filter(holland_question::Column::Deleted.eq(false))
            .order_by_asc(holland_question::Column::Order)
            .order_by_asc(holland_question::Column::CreatedAt)
            .all(&self.db)
            .await?)
    }

    async fn find_question(&self, id: Uuid) -> Result<Option<holland_question::Model>, ServiceError> {
        Ok(holland_question::Entity::find_by_id(id)
            .filter(holland_question::Column::Deleted.eq(false))
            .one(&self.db)
            .await?)
    }

    async fn find_questions(&self, ids: &[Uuid]) -> Result<Vec<holland_question::Model>, ServiceError> {
        Ok(holland_question::Entity::find()
            .filter(holland_question::Column::Deleted.eq(false))
            .filter(holland_question::Column::Id.is_in(ids.iter().copied()))
            .all(&self.db)
            .await?)
    }

    async fn insert_question(&self, model: holland_question::Model) -> Result<holland_question::Model, ServiceError> {
        Ok(holland_question::ActiveModel::from(model).reset_all().insert(&self.db).await?)
    }

    async fn update_question(&self, model: holland_question::Model) -> Result<holland_question::Model, ServiceError> {
        Ok(holland_question::ActiveModel::from(model).reset_all().update(&self.db).await?)
    }

    async fn delete_question(&self, id: Uuid) -> Result<bool, ServiceError> {
        let res = holland_question::Entity::update_many()
            .col_expr(holland_question::Column::Deleted, Expr::value(true))
            .filter(holland_question::Column::Id.eq(id))
            .filter(holland_question::Column::Deleted.eq(false))
            .exec(&self.db)
            .await?;
        Ok(res.rows_affected > 0)
    }

    async fn list_profiles(&self) -> Result<Vec<holland_profile::Model>, ServiceError> {
        Ok(holland_profile::Entity::find()
            .filter(holland_profile::Column::Deleted.eq(false))
            .order_by_asc(holland_profile::Column::Code)
            .all(&self.db)
            .await?)
    }

    async fn find_profile(&self, id: Uuid) -> Result<Option<holland_profile::Model>, ServiceError> {
        Ok(holland_profile::Entity::find_by_id(id)
            .filter(holland_profile::Column::Deleted.eq(false))
            .one(&self.db)
            .await?)
    }

    async fn find_profile_by_code(&self, code: &str) -> Result<Option<holland_profile::Model>, ServiceError> {
        Ok(holland_profile::Entity::find().filter(holland_profile::Column::Code.eq(code)).one(&self.db).await?)
    }

    async fn insert_profile(&self, model: holland_profile::Model) -> Result<holland_profile::Model, ServiceError> {
        Ok(holland_profile::ActiveModel::from(model).reset_all().insert(&self.db).await?)
    }

    async fn update_profile(&self, model: holland_profile::Model) -> Result<holland_profile::Model, ServiceError> {
        Ok(holland_profile::ActiveModel::from(model).reset_all().update(&self.db).await?)
    }

    async fn delete_profile(&self, id: Uuid) -> Result<bool, ServiceError> {
        let res = holland_profile::Entity::update_many()
            .col_expr(holland_profile::Column::Deleted, Expr::value(true))
            .filter(holland_profile::Column::Id.eq(id))
            .filter(holland_profile::Column::Deleted.eq(false))
            .exec(&self.db)
            .await?;
        Ok(res.rows_affected > 0)
    }

    async fn list_results(&self, filter: &ResultFilter) -> Result<Page<holland_result::Model>, ServiceError> {
        let q = holland_result::Entity::find().order_by_desc(holland_result::Column::CreatedAt);
        fetch_page(&self.db, q, Pagination::new(filter.page, filter.limit)).await
    }

    async fn insert_result(&self, model: holland_result::Model) -> Result<holland_result::Model, ServiceError> {
        Ok(holland_result::ActiveModel::from(model).reset_all().insert(&self.db).await?)
    }
}

pub mod mock {
    use super::*;
    use crate::pagination::page_of;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockHollandRepository {
        questions: Mutex<Vec<holland_question::Model>>,
        profiles: Mutex<Vec<holland_profile::Model>>,
        results: Mutex<Vec<holland_result::Model>>,
    }

    #[async_trait]
    impl HollandRepository for MockHollandRepository {
        async fn list_questions(&self) -> Result<Vec<holland_question::Model>, ServiceError> {
            let mut out: Vec<_> = self.questions.lock().unwrap().iter().filter(|q| !q.deleted).cloned().collect();
            out.sort_by_key(|q| q.order);
            Ok(out)
        }

        async fn find_question(&self, id: Uuid) -> Result<Option<holland_question::Model>, ServiceError> {
            Ok(self.questions.lock().unwrap().iter().find(|q| q.id == id && !q.deleted).cloned())
        }

        async fn find_questions(&self, ids: &[Uuid]) -> Result<Vec<holland_question::Model>, ServiceError> {
            Ok(self.questions.lock().unwrap().iter().filter(|q| !q.deleted && ids.contains(&q.id)).cloned().collect())
        }

        async fn insert_question(&self, model: holland_question::Model) -> Result<holland_question::Model, ServiceError> {
            self.questions.lock().unwrap().push(model.clone());
            Ok(model)
        }

        async fn update_question(&self, model: holland_question::Model) -> Result<holland_question::Model, ServiceError> {
            let mut rows = self.questions.lock().unwrap();
            let slot = rows.iter_mut().find(|q| q.id == model.id).ok_or_else(|| ServiceError::not_found("holland question"))?;
            *slot = model.clone();
            Ok(model)
        }

        async fn delete_question(&self, id: Uuid) -> Result<bool, ServiceError> {
            let mut rows = self.questions.lock().unwrap();
            Ok(rows.iter_mut().find(|q| q.id == id && !q.deleted).map(|q| q.deleted = true).is_some())
        }

        async fn list_profiles(&self) -> Result<Vec<holland_profile::Model>, ServiceError> {
            let mut out: Vec<_> = self.profiles.lock().unwrap().iter().filter(|p| !p.deleted).cloned().collect();
            out.sort_by(|a, b| a.code.cmp(&b.code));
            Ok(out)
        }

        async fn find_profile(&self, id: Uuid) -> Result<Option<holland_profile::Model>, ServiceError> {
            Ok(self.profiles.lock().unwrap().iter().find(|p| p.id == id && !p.deleted).cloned())
        }

        async fn find_profile_by_code(&self, code: &str) -> Result<Option<holland_profile::Model>, ServiceError> {
            Ok(self.profiles.lock().unwrap().iter().find(|p| p.code == code).cloned())
        }

        async fn insert_profile(&self, model: holland_profile::Model) -> Result<holland_profile::Model, ServiceError> {
            self.profiles.lock().unwrap().push(model.clone());
            Ok(model)
        }

        async fn update_profile(&self, model: holland_profile::Model) -> Result<holland_profile::Model, ServiceError> {
            let mut rows = self.profiles.lock().unwrap();
            let slot = rows.iter_mut().find(|p| p.id == model.id).ok_or_else(|| ServiceError::not_found("holland profile"))?;
            *slot = model.clone();
            Ok(model)
        }

        async fn delete_profile(&self, id: Uuid) -> Result<bool, ServiceError> {
            let mut rows = self.profiles.lock().unwrap();
            Ok(rows.iter_mut().find(|p| p.id == id && !p.deleted).map(|p| p.deleted = true).is_some())
        }

        async fn list_results(&self, filter: &ResultFilter) -> Result<Page<holland_result::Model>, ServiceError> {
            let rows: Vec<_> = self.results.lock().unwrap().iter().rev().cloned().collect();
            Ok(page_of(&rows, Pagination::new(filter.page, filter.limit)))
        }

        async fn insert_result(&self, model: holland_result::Model) -> Result<holland_result::Model, ServiceError> {
            self.results.lock().unwrap().push(model.clone());
            Ok(model)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holland::domain::{CreateProfile, CreateQuestion, Submission, SubmittedAnswer};
    use crate::holland::scoring::Answer;
    use crate::holland::HollandService;
    use crate::test_support::get_db;
    use std::sync::Arc;

    #[tokio::test]
    async fn submission_round_trips_json_columns() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await else { return Ok(()) };
        let svc = HollandService::new(Arc::new(SeaOrmHollandRepository { db }));
        let q = svc
            .create_question(CreateQuestion { order: Some(10_000), content: "Sửa máy móc".into(), category: "R".into(), options: None })
            .await?;
        if svc.match_profile("R").await?.is_none() {
            svc.create_profile(CreateProfile { code: "R".into(), title: "Realistic".into(), ..Default::default() }).await?;
        }
        let outcome = svc
            .submit(Submission { account_id: None, answers: vec![SubmittedAnswer { question_id: q.id, answer: Answer::Value(4) }] })
            .await?;
        assert_eq!(outcome.result.scores.R, 4);
        assert!(outcome.result.top_code.starts_with('R'));
        assert!(outcome.profile.is_some());
        svc.delete_question(q.id).await?;
        Ok(())
    }
}
