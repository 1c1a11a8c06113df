use crate::app::domain::content::ContactLink;

use super::error::{AppError, Result};

/// Hand a `mailto:` / `tel:` link to the OS default handler.
pub fn open_link(link: &ContactLink) -> Result<()> {
    let uri = link.uri();
    tracing::info!(%uri, "opening contact link");
    open::that(&uri).map_err(|source| AppError::Link { uri, source })
}
