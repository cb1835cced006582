use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use shub_kernel::domain::config::AppConfig;
use shub_kernel::server::AppState;
use tower::ServiceExt;

fn state_with(app_name: &str) -> AppState {
    let mut cfg = AppConfig::default();
    cfg.site.app_name = app_name.to_owned();

    let slice = shub_foia::init().expect("slice init");
    AppState::builder().config(cfg).register_slice(slice).build().expect("state build")
}

async fn get_page(state: AppState) -> (StatusCode, String) {
    let app = shub_foia::router().with_state(state);
    let response = app
        .oneshot(Request::builder().uri("/foia").body(Body::empty()).expect("request"))
        .await
        .expect("response");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("body");
    (status, String::from_utf8(bytes.to_vec()).expect("utf8 body"))
}

#[tokio::test]
async fn page_title_is_label_dash_app_name() {
    let (status, body) = get_page(state_with("Acme Corp")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<title>FOIA Toolkit - Acme Corp</title>"), "title missing in {body}");
}

#[tokio::test]
async fn page_delegates_to_the_foia_view() {
    let (_, body) = get_page(state_with("Acme Corp")).await;

    // The view's root section is the sole child of the document main element.
    assert!(body.contains(r#"<main id="content"><section id="foia-view">"#));
    assert!(body.contains("Freedom of Information Toolkit"));
    assert!(body.contains("Basic FOIA Request Letter"));
    assert!(body.contains("What is the Virginia Freedom of Information Act?"));
}

#[tokio::test]
async fn title_tracks_configuration_changes() {
    let (_, before) = get_page(state_with("Acme Corp")).await;
    let (_, after) = get_page(state_with("Acme Inc")).await;

    assert!(before.contains("<title>FOIA Toolkit - Acme Corp</title>"));
    assert!(after.contains("<title>FOIA Toolkit - Acme Inc</title>"));
}

#[tokio::test]
async fn valid_letter_request_downloads_a_letter() {
    let app = shub_foia::router().with_state(state_with("Acme Corp"));
    let request = Request::builder()
        .method("POST")
        .uri("/foia/letter")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(
            "request_type=budget&agency=state-budget\
             &records_description=FY2024+district+totals&timeframe=2023\
             &contact_name=Ada+Lovelace&contact_email=ada%40example.org\
             &contact_phone=&preferred_format=electronic",
        ))
        .expect("request");

    let response = app.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let disposition = response
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    assert!(disposition.starts_with("attachment; filename=\"foia-request-"));

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let letter = String::from_utf8(bytes.to_vec()).expect("utf8 body");
    assert!(letter.contains("Va. Code § 2.2-3700 et seq."));
    assert!(letter.contains("Virginia Department of Budget & Planning"));
    assert!(letter.contains("Ada Lovelace"));
}

#[tokio::test]
async fn invalid_letter_request_rerenders_the_page() {
    let app = shub_foia::router().with_state(state_with("Acme Corp"));
    let request = Request::builder()
        .method("POST")
        .uri("/foia/letter")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("request_type=budget&agency=&records_description="))
        .expect("request");

    let response = app.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let body = String::from_utf8(bytes.to_vec()).expect("utf8 body");
    assert!(body.contains("Please correct the following fields"));
    assert!(body.contains("agency"));
    assert!(body.contains("<title>FOIA Toolkit - Acme Corp</title>"));
}
