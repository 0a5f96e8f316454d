pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
    Router,
};

use crate::export::handlers as export;
use crate::form::handlers as form;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Form editing
        .route("/api/v1/resume", get(form::handle_get_resume))
        .route("/api/v1/resume/reset", post(form::handle_reset))
        .route("/api/v1/resume/fields/:field", put(form::handle_set_field))
        .route("/api/v1/resume/tags/:kind", post(form::handle_add_tag))
        .route(
            "/api/v1/resume/tags/:kind/:index",
            delete(form::handle_remove_tag),
        )
        .route("/api/v1/resume/entries/:kind", post(form::handle_add_entry))
        .route(
            "/api/v1/resume/entries/:kind/:id",
            delete(form::handle_remove_entry),
        )
        .route(
            "/api/v1/resume/entries/:kind/:id/fields/:field",
            put(form::handle_set_entry_field),
        )
        .route(
            "/api/v1/resume/experience/:id/current",
            put(form::handle_set_current),
        )
        .route(
            "/api/v1/resume/section-order",
            get(form::handle_get_section_order),
        )
        .route(
            "/api/v1/resume/section-order/move",
            post(form::handle_move_section),
        )
        .route(
            "/api/v1/resume/section-order/reorder",
            post(form::handle_reorder_sections),
        )
        .route(
            "/api/v1/resume/photo",
            post(form::handle_upload_photo)
                .delete(form::handle_remove_photo)
                // The upload handler enforces MAX_PHOTO_BYTES while streaming.
                .layer(DefaultBodyLimit::disable()),
        )
        .route("/api/v1/resume/validate", post(form::handle_validate))
        // Gated actions
        .route("/api/v1/resume/preview", get(export::handle_open_preview))
        .route("/api/v1/resume/print", get(export::handle_print))
        .route("/api/v1/resume/export/word", get(export::handle_export_word))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::form::photo::DEFAULT_MAX_PHOTO_BYTES;

    fn app() -> Router {
        build_router(AppState::new(Config::default()))
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        app.clone().oneshot(builder.body(body).unwrap()).await.unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn fill_required(app: &Router) {
        for field in [
            "full_name",
            "job_title",
            "email",
            "phone",
            "location",
            "objective",
            "declaration",
        ] {
            let uri = format!("/api/v1/resume/fields/{field}");
            send(app, "PUT", &uri, Some(json!({ "value": "Jane Doe" }))).await;
        }
        send(app, "DELETE", "/api/v1/resume/entries/experience/1", None).await;
        send(app, "DELETE", "/api/v1/resume/entries/education/1", None).await;
    }

    #[tokio::test]
    async fn test_health() {
        let response = send(&app(), "GET", "/health", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_duplicate_tag_reports_unchanged() {
        let app = app();
        let first = send(
            &app,
            "POST",
            "/api/v1/resume/tags/technical_skills",
            Some(json!({ "value": "Python" })),
        )
        .await;
        assert_eq!(json_body(first).await["changed"], true);

        let second = send(
            &app,
            "POST",
            "/api/v1/resume/tags/technical_skills",
            Some(json!({ "value": " python " })),
        )
        .await;
        let body = json_body(second).await;
        assert_eq!(body["changed"], false);
        assert_eq!(body["form"]["skills"]["technical"], json!(["Python"]));
    }

    #[tokio::test]
    async fn test_add_entry_returns_fresh_id() {
        let app = app();
        let response = send(&app, "POST", "/api/v1/resume/entries/project", None).await;
        assert_eq!(json_body(response).await["id"], 1);
        send(&app, "DELETE", "/api/v1/resume/entries/project/1", None).await;
        let response = send(&app, "POST", "/api/v1/resume/entries/project", None).await;
        assert_eq!(json_body(response).await["id"], 2);
    }

    #[tokio::test]
    async fn test_unknown_entry_is_not_found() {
        let response = send(
            &app(),
            "PUT",
            "/api/v1/resume/entries/certification/7/fields/name",
            Some(json!({ "value": "CKA" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_current_disables_end_in_editor() {
        let app = app();
        send(
            &app,
            "PUT",
            "/api/v1/resume/entries/experience/1/fields/end",
            Some(json!({ "value": "2022-02" })),
        )
        .await;
        let response = send(
            &app,
            "PUT",
            "/api/v1/resume/experience/1/current",
            Some(json!({ "current": true })),
        )
        .await;
        let body = json_body(response).await;
        assert_eq!(body["editor"]["experience"][0]["end_disabled"], true);
        assert_eq!(body["form"]["experience"]["entries"][0]["end"], "");

        let response = send(
            &app,
            "PUT",
            "/api/v1/resume/entries/experience/1/fields/end",
            Some(json!({ "value": "2022-03" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_section_move_and_reorder() {
        let app = app();
        let response = send(
            &app,
            "POST",
            "/api/v1/resume/section-order/move",
            Some(json!({ "section": "objective", "direction": "up" })),
        )
        .await;
        assert_eq!(json_body(response).await["changed"], false);

        let response = send(
            &app,
            "POST",
            "/api/v1/resume/section-order/reorder",
            Some(json!({ "dragged": "hobbies", "target": "objective" })),
        )
        .await;
        let body = json_body(response).await;
        assert_eq!(body["form"]["section_order"][0], "hobbies");
        assert_eq!(body["editor"]["section_controls"][0]["can_move_up"], false);
    }

    #[tokio::test]
    async fn test_exports_blocked_until_valid() {
        let app = app();
        let response = send(&app, "GET", "/api/v1/resume/export/word", None).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = json_body(response).await;
        assert_eq!(body["error"]["report"]["first_invalid"]["field"], "full_name");

        let response = send(&app, "GET", "/api/v1/resume/print", None).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        fill_required(&app).await;
        let response = send(&app, "GET", "/api/v1/resume/export/word", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"Jane_Doe.doc\""
        );
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/msword;charset=utf-8"
        );
    }

    #[tokio::test]
    async fn test_preview_gate_returns_document() {
        let app = app();
        fill_required(&app).await;
        let response = send(&app, "GET", "/api/v1/resume/preview", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["document"]["sections"][0]["section"], "objective");
    }

    fn photo_upload(content_type: &str, data: &[u8]) -> Request<Body> {
        let boundary = "XBOUNDARY";
        let mut payload = format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"photo\"; filename=\"upload\"\r\nContent-Type: {content_type}\r\n\r\n"
        )
        .into_bytes();
        payload.extend_from_slice(data);
        payload.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
        Request::builder()
            .method("POST")
            .uri("/api/v1/resume/photo")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(payload))
            .unwrap()
    }

    async fn photo_rejection(app: &Router, content_type: &str, size: usize) -> (StatusCode, Value) {
        let request = photo_upload(content_type, &vec![0u8; size]);
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        (status, json_body(response).await)
    }

    #[tokio::test]
    async fn test_photo_upload_rejects_non_image() {
        let app = app();
        let (status, body) = photo_rejection(&app, "application/pdf", 8).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Please upload an image file.");

        let state = send(&app, "GET", "/api/v1/resume", None).await;
        assert_eq!(json_body(state).await["form"]["photo"], Value::Null);
    }

    #[tokio::test]
    async fn test_photo_upload_accepts_image() {
        let response = app().oneshot(photo_upload("image/png", b"abc")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(
            body["form"]["photo"]["data_uri"],
            "data:image/png;base64,YWJj"
        );
    }

    #[tokio::test]
    async fn test_photo_just_over_limit_is_too_large() {
        let (status, body) = photo_rejection(&app(), "image/png", DEFAULT_MAX_PHOTO_BYTES + 1).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "PHOTO_REJECTED");
        assert_eq!(body["error"]["message"], "Image must be less than 5MB.");
    }

    #[tokio::test]
    async fn test_photo_far_over_limit_is_too_large() {
        let app = app();
        app.clone()
            .oneshot(photo_upload("image/png", b"abc"))
            .await
            .unwrap();

        let (status, body) = photo_rejection(&app, "image/jpeg", 6_000_000).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "PHOTO_REJECTED");
        assert_eq!(body["error"]["message"], "Image must be less than 5MB.");

        // The earlier photo survives the rejection.
        let state = send(&app, "GET", "/api/v1/resume", None).await;
        assert_eq!(
            json_body(state).await["form"]["photo"]["data_uri"],
            "data:image/png;base64,YWJj"
        );
    }

    #[tokio::test]
    async fn test_large_non_image_reports_type_first() {
        let (status, body) = photo_rejection(&app(), "application/pdf", 6_000_000).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "PHOTO_REJECTED");
        assert_eq!(body["error"]["message"], "Please upload an image file.");
    }
}
