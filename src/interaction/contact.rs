//! Contact form submissions.

use anyhow::anyhow;
use tracing::{info, instrument, warn};

use crate::{
    base::types::{CONTACT_COLLECTION, ContactMessage, ContactReceipt},
    service::db::DbConnection,
};

use super::InteractionResult;

/// Validates a contact message and writes it to the store.
///
/// Invalid input never reaches the store. Store failures (or a missing store)
/// are returned as-is; nothing is retried.
#[instrument(skip_all)]
pub async fn submit_contact(db: &DbConnection, message: ContactMessage) -> InteractionResult<ContactReceipt> {
    if let Err(errors) = message.validate() {
        warn!("Rejected a contact message with {} invalid field(s).", errors.len());
        return Err(errors.into());
    }

    let db = db.client().ok_or_else(|| anyhow!("No document store is available for contact messages."))?;

    let document = serde_json::to_value(message.into_document(chrono::Utc::now())).map_err(anyhow::Error::from)?;
    let id = db.create_document(CONTACT_COLLECTION, &document).await?;

    info!("Stored contact message `{}`.", id);

    Ok(ContactReceipt::ok(id))
}
