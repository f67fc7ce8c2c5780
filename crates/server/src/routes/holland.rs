use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use common::types::MessageResponse;
use models::{holland_profile, holland_question, holland_result};
use service::holland::domain::{
    CreateProfile, CreateQuestion, ResultFilter, Submission, SubmissionOutcome, UpdateProfile, UpdateQuestion,
};
use service::pagination::Page;
use uuid::Uuid;

use crate::errors::ApiResult;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::state::AppState;

pub fn public_routes() -> Router<AppState> {
    Router::new().route("/holland/questions", get(public_questions)).route("/holland/submit", post(submit))
}

pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/holland/questions", get(list_questions).post(create_question))
        .route("/admin/holland/questions/:id", get(question).put(update_question).delete(remove_question))
        .route("/admin/holland/profiles", get(list_profiles).post(create_profile))
        .route("/admin/holland/profiles/:id", get(profile).put(update_profile).delete(remove_profile))
        .route("/admin/holland/results", get(list_results))
}

#[utoipa::path(get, path = "/holland/questions", tag = "holland", responses((status = 200, description = "Questions in test order")))]
pub async fn public_questions(State(state): State<AppState>) -> ApiResult<Json<Vec<holland_question::Model>>> {
    Ok(Json(state.holland.list_questions().await?))
}

#[utoipa::path(post, path = "/holland/submit", tag = "holland", request_body = crate::openapi::SubmissionDoc,
    responses((status = 200, description = "Stored result and matched profile"), (status = 400, description = "Invalid answers")))]
pub async fn submit(State(state): State<AppState>, ApiJson(input): ApiJson<Submission>) -> ApiResult<Json<SubmissionOutcome>> {
    Ok(Json(state.holland.submit(input).await?))
}

// ---- questions ----

#[utoipa::path(get, path = "/admin/holland/questions", tag = "holland", responses((status = 200, description = "Questions by order")))]
pub async fn list_questions(State(state): State<AppState>) -> ApiResult<Json<Vec<holland_question::Model>>> {
    Ok(Json(state.holland.list_questions().await?))
}

#[utoipa::path(post, path = "/admin/holland/questions", tag = "holland", request_body = crate::openapi::CreateQuestionDoc,
    responses((status = 200, description = "Created"), (status = 400, description = "Validation Error")))]
pub async fn create_question(State(state): State<AppState>, ApiJson(input): ApiJson<CreateQuestion>) -> ApiResult<Json<holland_question::Model>> {
    Ok(Json(state.holland.create_question(input).await?))
}

#[utoipa::path(get, path = "/admin/holland/questions/{id}", tag = "holland", params(("id" = Uuid, Path, description = "Question ID")),
    responses((status = 200, description = "OK"), (status = 404, description = "Not Found")))]
pub async fn question(State(state): State<AppState>, ApiPath(id): ApiPath<Uuid>) -> ApiResult<Json<holland_question::Model>> {
    Ok(Json(state.holland.get_question(id).await?))
}

#[utoipa::path(put, path = "/admin/holland/questions/{id}", tag = "holland", params(("id" = Uuid, Path, description = "Question ID")),
    responses((status = 200, description = "Updated"), (status = 404, description = "Not Found")))]
pub async fn update_question(State(state): State<AppState>, ApiPath(id): ApiPath<Uuid>, ApiJson(input): ApiJson<UpdateQuestion>) -> ApiResult<Json<holland_question::Model>> {
    Ok(Json(state.holland.update_question(id, input).await?))
}

#[utoipa::path(delete, path = "/admin/holland/questions/{id}", tag = "holland", params(("id" = Uuid, Path, description = "Question ID")),
    responses((status = 200, description = "Deleted"), (status = 404, description = "Not Found")))]
pub async fn remove_question(State(state): State<AppState>, ApiPath(id): ApiPath<Uuid>) -> ApiResult<Json<MessageResponse>> {
    state.holland.delete_question(id).await?;
    Ok(Json(MessageResponse::new("Question deleted")))
}

// ---- profiles ----

#[utoipa::path(get, path = "/admin/holland/profiles", tag = "holland", responses((status = 200, description = "Profiles by code")))]
pub async fn list_profiles(State(state): State<AppState>) -> ApiResult<Json<Vec<holland_profile::Model>>> {
    Ok(Json(state.holland.list_profiles().await?))
}

#[utoipa::path(post, path = "/admin/holland/profiles", tag = "holland", request_body = crate::openapi::CreateProfileDoc,
    responses((status = 200, description = "Created"), (status = 400, description = "Validation Error"), (status = 409, description = "Code in use")))]
pub async fn create_profile(State(state): State<AppState>, ApiJson(input): ApiJson<CreateProfile>) -> ApiResult<Json<holland_profile::Model>> {
    Ok(Json(state.holland.create_profile(input).await?))
}

#[utoipa::path(get, path = "/admin/holland/profiles/{id}", tag = "holland", params(("id" = Uuid, Path, description = "Profile ID")),
    responses((status = 200, description = "OK"), (status = 404, description = "Not Found")))]
pub async fn profile(State(state): State<AppState>, ApiPath(id): ApiPath<Uuid>) -> ApiResult<Json<holland_profile::Model>> {
    Ok(Json(state.holland.get_profile(id).await?))
}

#[utoipa::path(put, path = "/admin/holland/profiles/{id}", tag = "holland", params(("id" = Uuid, Path, description = "Profile ID")),
    responses((status = 200, description = "Updated"), (status = 404, description = "Not Found"), (status = 409, description = "Code in use")))]
pub async fn update_profile(State(state): State<AppState>, ApiPath(id): ApiPath<Uuid>, ApiJson(input): ApiJson<UpdateProfile>) -> ApiResult<Json<holland_profile::Model>> {
    Ok(Json(state.holland.update_profile(id, input).await?))
}

#[utoipa::path(delete, path = "/admin/holland/profiles/{id}", tag = "holland", params(("id" = Uuid, Path, description = "Profile ID")),
    responses((status = 200, description = "Deleted"), (status = 404, description = "Not Found")))]
pub async fn remove_profile(State(state): State<AppState>, ApiPath(id): ApiPath<Uuid>) -> ApiResult<Json<MessageResponse>> {
    state.holland.delete_profile(id).await?;
    Ok(Json(MessageResponse::new("Profile deleted")))
}

#[utoipa::path(get, path = "/admin/holland/results", tag = "holland", responses((status = 200, description = "Paged results, newest first")))]
pub async fn list_results(State(state): State<AppState>, ApiQuery(filter): ApiQuery<ResultFilter>) -> ApiResult<Json<Page<holland_result::Model>>> {
    Ok(Json(state.holland.list_results(&filter).await?))
}
