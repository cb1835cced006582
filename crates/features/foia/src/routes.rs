use crate::letter::LetterForm;
use crate::{PAGE_LABEL, view};
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Form, Router};
use maud::Markup;
use shub_kernel::domain::constants::FOIA_PATH;
use shub_kernel::safe_nanoid;
use shub_kernel::server::AppState;
use shub_kernel::server::page::{self, PageMeta};

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route(FOIA_PATH, get(foia_page))
        .route("/foia/letter", post(generate_letter))
}

/// `GET /foia` — metadata plus the toolkit view, derived fresh from the
/// configuration snapshot on every request.
async fn foia_page(State(state): State<AppState>) -> Markup {
    let site = &state.config.site;
    let meta = PageMeta::titled(PAGE_LABEL, &site.app_name);

    page::render(&meta, site, view::foia_view(site, &LetterForm::default(), &[]))
}

/// `POST /foia/letter` — validate the wizard fields and return the generated
/// request letter as a downloadable text attachment.
async fn generate_letter(
    State(state): State<AppState>,
    Form(form): Form<LetterForm>,
) -> Response {
    let site = &state.config.site;

    match form.validate() {
        Ok(request) => {
            let reference = safe_nanoid!();
            let letter = request.render(chrono::Utc::now().date_naive(), &reference);

            tracing::info!(
                %reference,
                agency = request.agency.value(),
                "FOIA request letter generated"
            );

            (
                [
                    (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_owned()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"foia-request-{reference}.txt\""),
                    ),
                ],
                letter,
            )
                .into_response()
        },
        Err(invalid) => {
            tracing::debug!(fields = ?invalid, "Rejected letter request");
            let meta = PageMeta::titled(PAGE_LABEL, &site.app_name);
            let body = view::foia_view(site, &form, &invalid);
            (StatusCode::UNPROCESSABLE_ENTITY, page::render(&meta, site, body)).into_response()
        },
    }
}
