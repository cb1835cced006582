use crate::error::ContactError;
use crate::model::ContactForm;
use crate::{Contact, PAGE_LABEL, view};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Form, Router};
use maud::Markup;
use shub_kernel::domain::constants::CONTACT_PATH;
use shub_kernel::server::AppState;
use shub_kernel::server::page::{self, PageMeta};

pub(crate) fn router() -> Router<AppState> {
    Router::new().route(CONTACT_PATH, get(contact_page).post(submit_message))
}

/// `GET /contact` — metadata plus the contact view, derived fresh from the
/// configuration snapshot on every request.
async fn contact_page(State(state): State<AppState>) -> Markup {
    let site = &state.config.site;
    let meta = PageMeta::titled(PAGE_LABEL, &site.app_name);

    page::render(&meta, site, view::contact_view(site, &ContactForm::default(), &[]))
}

/// `POST /contact` — validate, record, confirm. Invalid submissions re-render
/// the form with a 422 and record nothing.
async fn submit_message(
    State(state): State<AppState>,
    Form(form): Form<ContactForm>,
) -> Result<Response, ContactError> {
    let site = &state.config.site;
    let meta = PageMeta::titled(PAGE_LABEL, &site.app_name);

    match form.validate() {
        Ok(message) => {
            let contact = state.try_get_slice::<Contact>()?;
            let receipt = contact.inbox().record(message)?;
            Ok(page::render(&meta, site, view::confirmation_view(site, &receipt)).into_response())
        },
        Err(invalid) => {
            tracing::debug!(fields = ?invalid, "Rejected contact submission");
            let body = view::contact_view(site, &form, &invalid);
            Ok((StatusCode::UNPROCESSABLE_ENTITY, page::render(&meta, site, body)).into_response())
        },
    }
}
