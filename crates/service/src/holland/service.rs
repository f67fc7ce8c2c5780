use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use models::errors::require_text;
use models::holland_profile::normalize_code;
use models::holland_question::{parse_category, AnswerOption, Options};
use models::{holland_profile, holland_question, holland_result};
use tracing::{info, instrument};
use uuid::Uuid;

use super::domain::{
    CreateProfile, CreateQuestion, ResultFilter, Submission, SubmissionOutcome, UpdateProfile, UpdateQuestion,
};
use super::repository::HollandRepository;
use super::scoring::{profile_candidates, tally, top_code};
use crate::errors::ServiceError;
use crate::pagination::Page;

pub struct HollandService<R: HollandRepository> {
    repo: Arc<R>,
}

fn clean_list(items: Vec<String>) -> Vec<String> {
    items.into_iter().map(|s| s.trim().to_string()).filter(|s| !s.is_empty()).collect()
}

fn check_options(options: Option<Vec<AnswerOption>>) -> Result<Options, ServiceError> {
    match options {
        None => Ok(Options::default()),
        Some(list) if list.is_empty() => Ok(Options::default()),
        Some(list) => {
            for o in &list {
                require_text("options.label", &o.label)?;
            }
            Ok(Options(list))
        }
    }
}

impl<R: HollandRepository> HollandService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    // ---- questions ----

    pub async fn list_questions(&self) -> Result<Vec<holland_question::Model>, ServiceError> {
        self.repo.list_questions().await
    }

    pub async fn get_question(&self, id: Uuid) -> Result<holland_question::Model, ServiceError> {
        self.repo.find_question(id).await?.ok_or_else(|| ServiceError::not_found("holland question"))
    }

    /// A question without `order` goes after the current last one.
    #[instrument(skip(self, input))]
    pub async fn create_question(&self, input: CreateQuestion) -> Result<holland_question::Model, ServiceError> {
        require_text("content", &input.content)?;
        let category = parse_category(&input.category)?;
        let options = check_options(input.options)?;
        let order = match input.order {
            Some(o) => o,
            None => self.repo.list_questions().await?.iter().map(|q| q.order).max().unwrap_or(0) + 1,
        };
        let now = Utc::now().into();
        let created = self
            .repo
            .insert_question(holland_question::Model {
                id: Uuid::new_v4(),
                order,
                content: input.content.trim().to_string(),
                category,
                options,
                deleted: false,
                created_at: now,
                updated_at: now,
            })
            .await?;
        info!(question_id = %created.id, "holland_question_created");
        Ok(created)
    }

    #[instrument(skip(self, input))]
    pub async fn update_question(&self, id: Uuid, input: UpdateQuestion) -> Result<holland_question::Model, ServiceError> {
        let mut q = self.get_question(id).await?;
        if let Some(content) = input.content {
            require_text("content", &content)?;
            q.content = content.trim().to_string();
        }
        if let Some(cat) = input.category {
            q.category = parse_category(&cat)?;
        }
        if input.options.is_some() {
            q.options = check_options(input.options)?;
        }
        q.order = input.order.unwrap_or(q.order);
        q.updated_at = Utc::now().into();
        let updated = self.repo.update_question(q).await?;
        info!(question_id = %id, "holland_question_updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete_question(&self, id: Uuid) -> Result<(), ServiceError> {
        if !self.repo.delete_question(id).await? {
            return Err(ServiceError::not_found("holland question"));
        }
        info!(question_id = %id, "holland_question_deleted");
        Ok(())
    }

    // ---- profiles ----

    pub async fn list_profiles(&self) -> Result<Vec<holland_profile::Model>, ServiceError> {
        self.repo.list_profiles().await
    }

    pub async fn get_profile(&self, id: Uuid) -> Result<holland_profile::Model, ServiceError> {
        self.repo.find_profile(id).await?.ok_or_else(|| ServiceError::not_found("holland profile"))
    }

    /// Creating a code that only exists soft-deleted revives that row.
    #[instrument(skip(self, input), fields(code = %input.code))]
    pub async fn create_profile(&self, input: CreateProfile) -> Result<holland_profile::Model, ServiceError> {
        let code = normalize_code(&input.code)?;
        require_text("title", &input.title)?;
        let existing = self.repo.find_profile_by_code(&code).await?;
        if existing.as_ref().is_some_and(|p| !p.deleted) {
            return Err(ServiceError::conflict(format!("profile {code} already exists")));
        }
        let now = Utc::now().into();
        let model = holland_profile::Model {
            id: existing.as_ref().map_or_else(Uuid::new_v4, |p| p.id),
            code,
            title: input.title.trim().to_string(),
            description: input.description,
            suitable_careers: clean_list(input.suitable_careers),
            suggested_skills: clean_list(input.suggested_skills),
            image: input.image,
            deleted: false,
            created_at: existing.as_ref().map_or(now, |p| p.created_at),
            updated_at: now,
        };
        let saved = match existing {
            Some(_) => self.repo.update_profile(model).await?,
            None => self.repo.insert_profile(model).await?,
        };
        info!(profile_id = %saved.id, code = %saved.code, "holland_profile_created");
        Ok(saved)
    }

    #[instrument(skip(self, input))]
    pub async fn update_profile(&self, id: Uuid, input: UpdateProfile) -> Result<holland_profile::Model, ServiceError> {
        let mut p = self.get_profile(id).await?;
        if let Some(raw) = input.code {
            let code = normalize_code(&raw)?;
            if code != p.code {
                if self.repo.find_profile_by_code(&code).await?.is_some() {
                    return Err(ServiceError::conflict(format!("profile {code} already exists")));
                }
                p.code = code;
            }
        }
        if let Some(title) = input.title {
            require_text("title", &title)?;
            p.title = title.trim().to_string();
        }
        if let Some(description) = input.description {
            p.description = description;
        }
        if let Some(careers) = input.suitable_careers {
            p.suitable_careers = clean_list(careers);
        }
        if let Some(skills) = input.suggested_skills {
            p.suggested_skills = clean_list(skills);
        }
        if input.image.is_some() {
            p.image = input.image;
        }
        p.updated_at = Utc::now().into();
        let updated = self.repo.update_profile(p).await?;
        info!(profile_id = %id, "holland_profile_updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete_profile(&self, id: Uuid) -> Result<(), ServiceError> {
        if !self.repo.delete_profile(id).await? {
            return Err(ServiceError::not_found("holland profile"));
        }
        info!(profile_id = %id, "holland_profile_deleted");
        Ok(())
    }

    /// Most specific live profile for a result code.
    pub async fn match_profile(&self, code: &str) -> Result<Option<holland_profile::Model>, ServiceError> {
        for candidate in profile_candidates(code) {
            if let Some(p) = self.repo.find_profile_by_code(&candidate).await?.filter(|p| !p.deleted) {
                return Ok(Some(p));
            }
        }
        Ok(None)
    }

    // ---- results ----

    pub async fn list_results(&self, filter: &ResultFilter) -> Result<Page<holland_result::Model>, ServiceError> {
        self.repo.list_results(filter).await
    }

    /// Score a completed test, store the result and attach the matching profile.
    #[instrument(skip(self, submission), fields(answers = submission.answers.len()))]
    pub async fn submit(&self, submission: Submission) -> Result<SubmissionOutcome, ServiceError> {
        if submission.answers.is_empty() {
            return Err(ServiceError::validation("answers must not be empty"));
        }
        let mut seen = HashSet::with_capacity(submission.answers.len());
        for a in &submission.answers {
            if !seen.insert(a.question_id) {
                return Err(ServiceError::validation(format!("question {} answered more than once", a.question_id)));
            }
        }
        let ids: Vec<Uuid> = seen.into_iter().collect();
        let questions = self.repo.find_questions(&ids).await?;

        let mut weighted = Vec::with_capacity(submission.answers.len());
        for a in &submission.answers {
            let q = questions
                .iter()
                .find(|q| q.id == a.question_id)
                .ok_or_else(|| ServiceError::validation(format!("unknown question {}", a.question_id)))?;
            weighted.push((q.category, a.answer.value()?));
        }
        let scores = tally(weighted);
        let code = top_code(&scores);

        let result = self
            .repo
            .insert_result(holland_result::Model {
                id: Uuid::new_v4(),
                account_id: submission.account_id,
                scores,
                top_code: code.clone(),
                created_at: Utc::now().into(),
            })
            .await?;
        let profile = self.match_profile(&code).await?;
        info!(result_id = %result.id, top_code = %code, matched = profile.is_some(), "holland_submitted");
        Ok(SubmissionOutcome { result, profile })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holland::domain::SubmittedAnswer;
    use crate::holland::repository::mock::MockHollandRepository;
    use crate::holland::scoring::Answer;
    use models::holland_question::HollandCategory;

    fn svc() -> HollandService<MockHollandRepository> {
        HollandService::new(Arc::new(MockHollandRepository::default()))
    }

    async fn question(svc: &HollandService<MockHollandRepository>, cat: &str) -> Uuid {
        svc.create_question(CreateQuestion { content: format!("Q {cat}"), category: cat.into(), ..Default::default() })
            .await
            .unwrap()
            .id
    }

    async fn profile(svc: &HollandService<MockHollandRepository>, code: &str) -> holland_profile::Model {
        svc.create_profile(CreateProfile { code: code.into(), title: format!("Profile {code}"), ..Default::default() })
            .await
            .unwrap()
    }

    fn answer(question_id: Uuid, answer: Answer) -> SubmittedAnswer { SubmittedAnswer { question_id, answer } }

    #[tokio::test]
    async fn questions_default_to_likert_and_append_order() {
        let svc = svc();
        let a = question(&svc, "r").await;
        question(&svc, "I").await;
        let list = svc.list_questions().await.unwrap();
        assert_eq!(list.iter().map(|q| q.order).collect::<Vec<_>>(), vec![1, 2]);
        let q = svc.get_question(a).await.unwrap();
        assert_eq!(q.category, HollandCategory::R);
        assert_eq!(q.options, Options::default());
        assert!(svc
            .create_question(CreateQuestion { content: "x".into(), category: "Z".into(), ..Default::default() })
            .await
            .is_err());
    }

    #[tokio::test]
    async fn profile_codes_are_unique_and_normalized() {
        let svc = svc();
        let p = profile(&svc, "sec").await;
        assert_eq!(p.code, "SEC");
        assert!(matches!(
            svc.create_profile(CreateProfile { code: "SEC".into(), title: "dup".into(), ..Default::default() }).await,
            Err(ServiceError::Conflict(_))
        ));
        svc.delete_profile(p.id).await.unwrap();
        let revived = profile(&svc, "SEC").await;
        assert_eq!(revived.id, p.id);
        assert!(!revived.deleted);
    }

    #[tokio::test]
    async fn submit_scores_and_matches_prefix_profile() {
        let svc = svc();
        let s = question(&svc, "S").await;
        let e = question(&svc, "E").await;
        let c = question(&svc, "C").await;
        let r = question(&svc, "R").await;
        profile(&svc, "SE").await;
        profile(&svc, "S").await;

        let outcome = svc
            .submit(Submission {
                account_id: None,
                answers: vec![
                    answer(s, Answer::Label("Rất thích".into())),
                    answer(e, Answer::Value(3)),
                    answer(c, Answer::Label("Bình thường".into())),
                    answer(r, Answer::Value(0)),
                ],
            })
            .await
            .unwrap();
        assert_eq!(outcome.result.top_code, "SEC");
        assert_eq!(outcome.result.scores.S, 4);
        assert_eq!(outcome.profile.map(|p| p.code).as_deref(), Some("SE"));
        assert_eq!(svc.list_results(&ResultFilter::default()).await.unwrap().total, 1);
    }

    #[tokio::test]
    async fn submit_without_any_profile_returns_none() {
        let svc = svc();
        let q = question(&svc, "A").await;
        let outcome = svc.submit(Submission { account_id: Some(Uuid::new_v4()), answers: vec![answer(q, Answer::Value(1))] }).await.unwrap();
        assert_eq!(outcome.result.top_code, "ARI");
        assert!(outcome.profile.is_none());
    }

    #[tokio::test]
    async fn submit_rejects_bad_input() {
        let svc = svc();
        let q = question(&svc, "I").await;
        let gone = question(&svc, "A").await;
        svc.delete_question(gone).await.unwrap();

        let bad = |answers: Vec<SubmittedAnswer>| Submission { account_id: None, answers };
        assert!(svc.submit(bad(vec![])).await.is_err());
        assert!(svc.submit(bad(vec![answer(q, Answer::Value(1)), answer(q, Answer::Value(2))])).await.is_err());
        assert!(svc.submit(bad(vec![answer(Uuid::new_v4(), Answer::Value(1))])).await.is_err());
        assert!(svc.submit(bad(vec![answer(gone, Answer::Value(1))])).await.is_err());
        assert!(svc.submit(bad(vec![answer(q, Answer::Label("maybe".into()))])).await.is_err());
        assert!(svc.submit(bad(vec![answer(q, Answer::Value(7))])).await.is_err());
        assert_eq!(svc.list_results(&ResultFilter::default()).await.unwrap().total, 0);
    }
}
