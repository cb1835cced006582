//! Contact page feature slice.
//!
//! Serves `GET /contact` (hero + message form) and `POST /contact`
//! (validated submission recorded to the drop-box inbox).

mod error;
mod inbox;
mod model;
mod routes;
mod view;

pub use crate::error::ContactError;
pub use crate::inbox::{MessageInbox, Receipt, StoredMessage};
pub use crate::model::{ContactForm, ContactMessage, InquiryType};

use axum::Router;
use shub_kernel::domain::config::AppConfig;
use shub_kernel::domain::registry::{FeatureSlice, InitializedSlice};
use shub_kernel::server::AppState;
use std::any::Any;

/// Page label interpolated into the document title.
pub const PAGE_LABEL: &str = "Contact Us";

/// Contact feature state.
#[derive(Debug)]
pub struct Contact {
    inbox: MessageInbox,
}

impl Contact {
    #[must_use]
    pub const fn inbox(&self) -> &MessageInbox {
        &self.inbox
    }
}

impl FeatureSlice for Contact {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Initialize the contact feature.
///
/// Opens the drop-box inbox under the configured data directory.
///
/// # Errors
/// Returns an error if the inbox directory cannot be created.
pub fn init(config: &AppConfig) -> Result<InitializedSlice, ContactError> {
    let inbox = MessageInbox::open(config.storage.data_dir.join("contact-inbox.jsonl"))?;

    tracing::info!("Contact slice initialized");

    Ok(InitializedSlice::new(Contact { inbox }))
}

/// Routes contributed by this slice.
#[must_use]
pub fn router() -> Router<AppState> {
    routes::router()
}
