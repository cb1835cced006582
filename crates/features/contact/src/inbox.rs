use crate::error::ContactError;
use crate::model::ContactMessage;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use shub_kernel::safe_nanoid;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Acknowledgement returned to the sender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    pub id: String,
}

/// One recorded inbox entry.
#[derive(Debug, Serialize, Deserialize)]
pub struct StoredMessage {
    pub id: String,
    pub received_at: DateTime<Utc>,
    #[serde(flatten)]
    pub message: ContactMessage,
}

/// Append-only drop-box for contact messages, one JSON document per line.
///
/// Delivery (mail, ticketing) is handled outside this service; operators
/// drain the file.
#[derive(Debug)]
pub struct MessageInbox {
    path: PathBuf,
    lock: Mutex<()>,
}

impl MessageInbox {
    /// Opens the inbox at `path`, creating parent directories as needed.
    ///
    /// # Errors
    /// Returns an error if the parent directory cannot be created.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ContactError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(Self { path, lock: Mutex::new(()) })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Records a validated message and returns its receipt.
    ///
    /// # Errors
    /// Returns an error if the entry cannot be serialized or appended.
    pub fn record(&self, message: ContactMessage) -> Result<Receipt, ContactError> {
        let entry = StoredMessage { id: safe_nanoid!(), received_at: Utc::now(), message };
        let mut line = serde_json::to_string(&entry)?;
        line.push('\n');

        let _guard = self.lock.lock();
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        file.write_all(line.as_bytes())?;

        tracing::info!(id = %entry.id, inquiry = ?entry.message.inquiry_type, "Contact message recorded");

        Ok(Receipt { id: entry.id })
    }
}
