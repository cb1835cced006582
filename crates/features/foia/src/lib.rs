//! FOIA toolkit feature slice.
//!
//! Serves `GET /foia` (template catalog, request generator, process steps,
//! FAQ) and `POST /foia/letter` (a formatted Virginia FOIA request letter).

mod catalog;
mod error;
mod letter;
mod routes;
mod view;

pub use crate::catalog::{FAQS, Faq, PROCESS_STEPS, ResourceCategory, TEMPLATES, TemplateResource};
pub use crate::error::FoiaError;
pub use crate::letter::{Agency, LetterForm, LetterRequest, PreferredFormat, RequestType};

use axum::Router;
use shub_kernel::domain::registry::{FeatureSlice, InitializedSlice};
use shub_kernel::server::AppState;
use std::any::Any;

/// Page label interpolated into the document title.
pub const PAGE_LABEL: &str = "FOIA Toolkit";

/// FOIA feature state.
#[derive(Debug)]
pub struct Foia {}

impl FeatureSlice for Foia {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Initialize the FOIA feature.
///
/// # Errors
/// Infallible today; kept fallible for parity with other slices.
pub fn init() -> Result<InitializedSlice, FoiaError> {
    tracing::info!("FOIA slice initialized");

    Ok(InitializedSlice::new(Foia {}))
}

/// Routes contributed by this slice.
#[must_use]
pub fn router() -> Router<AppState> {
    routes::router()
}
