use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use shub_kernel::domain::config::AppConfig;
use shub_kernel::server::AppState;
use std::path::Path;
use tower::ServiceExt;

fn state_with(app_name: &str, data_dir: &Path) -> AppState {
    let mut cfg = AppConfig::default();
    cfg.site.app_name = app_name.to_owned();
    cfg.storage.data_dir = data_dir.to_path_buf();

    let slice = shub_contact::init(&cfg).expect("slice init");
    AppState::builder().config(cfg).register_slice(slice).build().expect("state build")
}

async fn get_page(state: AppState) -> (StatusCode, String) {
    let app = shub_contact::router().with_state(state);
    let response = app
        .oneshot(Request::builder().uri("/contact").body(Body::empty()).expect("request"))
        .await
        .expect("response");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("body");
    (status, String::from_utf8(bytes.to_vec()).expect("utf8 body"))
}

async fn post_form(state: AppState, form_body: &str) -> (StatusCode, String) {
    let app = shub_contact::router().with_state(state);
    let request = Request::builder()
        .method("POST")
        .uri("/contact")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form_body.to_owned()))
        .expect("request");

    let response = app.oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("body");
    (status, String::from_utf8(bytes.to_vec()).expect("utf8 body"))
}

#[tokio::test]
async fn page_title_is_label_dash_app_name() {
    let dir = tempfile::tempdir().expect("temp dir");
    let (status, body) = get_page(state_with("Acme Corp", dir.path())).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<title>Contact Us - Acme Corp</title>"), "title missing in {body}");
}

#[tokio::test]
async fn page_delegates_to_the_contact_view() {
    let dir = tempfile::tempdir().expect("temp dir");
    let (_, body) = get_page(state_with("Acme Corp", dir.path())).await;

    // The view's root section is the sole child of the document main element.
    assert!(body.contains(r#"<main id="content"><section id="contact-view">"#));
    assert!(body.contains("Send us a message"));
}

#[tokio::test]
async fn title_tracks_configuration_changes() {
    let dir = tempfile::tempdir().expect("temp dir");
    let (_, before) = get_page(state_with("Acme Corp", dir.path())).await;
    let (_, after) = get_page(state_with("Acme Inc", dir.path())).await;

    assert!(before.contains("<title>Contact Us - Acme Corp</title>"));
    assert!(after.contains("<title>Contact Us - Acme Inc</title>"));
}

#[tokio::test]
async fn valid_submission_is_recorded_and_confirmed() {
    let dir = tempfile::tempdir().expect("temp dir");
    let state = state_with("Acme Corp", dir.path());

    let (status, body) = post_form(
        state,
        "name=Ada+Lovelace&email=ada%40example.org&phone=&inquiry_type=foia\
         &subject=Record+access&message=I+need+the+2023+budget+records",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Message Sent Successfully!"));
    assert!(body.contains("Thank you for contacting Acme Corp."));

    let inbox = std::fs::read_to_string(dir.path().join("contact-inbox.jsonl")).expect("inbox");
    assert_eq!(inbox.lines().count(), 1);
    assert!(inbox.contains("ada@example.org"));
}

#[tokio::test]
async fn invalid_submission_is_rejected_without_recording() {
    let dir = tempfile::tempdir().expect("temp dir");
    let state = state_with("Acme Corp", dir.path());

    let (status, body) =
        post_form(state, "name=Ada&email=&inquiry_type=foia&subject=x&message=y").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.contains("Please correct the following fields"));
    assert!(body.contains("email"));
    // Nothing recorded: the inbox file was never written.
    assert!(!dir.path().join("contact-inbox.jsonl").exists());
}
