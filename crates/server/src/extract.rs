//! Request extractors whose rejections render as [`JsonApiError`].

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts};
use axum::http::StatusCode;

use crate::errors::JsonApiError;

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(JsonApiError))]
pub struct ApiJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(JsonApiError))]
pub struct ApiPath<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(JsonApiError))]
pub struct ApiQuery<T>(pub T);

fn rejected(status: StatusCode, message: String) -> JsonApiError {
    JsonApiError::new(status, status.canonical_reason().unwrap_or("Bad Request"), Some(message))
}

impl From<JsonRejection> for JsonApiError {
    fn from(r: JsonRejection) -> Self { rejected(r.status(), r.body_text()) }
}

impl From<PathRejection> for JsonApiError {
    fn from(r: PathRejection) -> Self { rejected(r.status(), r.body_text()) }
}

impl From<QueryRejection> for JsonApiError {
    fn from(r: QueryRejection) -> Self { rejected(r.status(), r.body_text()) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use axum::routing::post;
    use axum::Router;
    use serde::Deserialize;
    use tower::ServiceExt;
    use uuid::Uuid;

    #[derive(Deserialize)]
    struct Named {
        #[allow(dead_code)]
        name: String,
    }

    async fn handler(ApiPath(_id): ApiPath<Uuid>, ApiJson(_body): ApiJson<Named>) -> StatusCode {
        StatusCode::NO_CONTENT
    }

    fn app() -> Router {
        Router::new().route("/things/:id", post(handler))
    }

    async fn envelope(req: Request<Body>) -> (StatusCode, serde_json::Value) {
        let res = app().oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn json_post(uri: &str, body: &'static str) -> Request<Body> {
        Request::post(uri).header("content-type", "application/json").body(Body::from(body)).unwrap()
    }

    #[tokio::test]
    async fn bad_uuid_is_enveloped() {
        let (status, body) = envelope(json_post("/things/not-a-uuid", r#"{"name":"x"}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Bad Request");
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn malformed_json_is_enveloped() {
        let id = Uuid::new_v4();
        let (status, body) = envelope(json_post(&format!("/things/{id}"), "{not json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].is_string());

        let (status, body) = envelope(json_post(&format!("/things/{id}"), r#"{"name": 2.5}"#)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "Unprocessable Entity");
    }
}
