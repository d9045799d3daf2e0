use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

use crate::{
    catalog_api::CatalogSource,
    types::{AppEvent, PageRequest},
};

/// Background task that turns page requests into `AppEvent`s.
///
/// Each request runs in its own task, so a slow page never holds up a newer
/// one; results may therefore arrive out of order and carry their request tag.
pub async fn run_page_fetch(
    catalog: Arc<dyn CatalogSource>,
    mut page_rx: UnboundedReceiver<PageRequest>,
    event_tx: UnboundedSender<AppEvent>,
) -> Result<()> {
    log::info!("[page_fetch] started");

    while let Some(request) = page_rx.recv().await {
        let page = request.page;
        log::debug!("[page_fetch] received request #{} for page {page}", request.seq);
        let catalog = Arc::clone(&catalog);
        let event_tx = event_tx.clone();

        tokio::spawn(async move {
            let ev = match catalog.fetch_page(page).await {
                Ok(characters) => AppEvent::PageLoaded { request, characters },
                Err(e) => {
                    log::warn!("[page_fetch] page {page} failed: {e}");
                    AppEvent::PageFailed {
                        request,
                        error: e.to_string(),
                    }
                }
            };
            if event_tx.send(ev).is_err() {
                log::debug!("[page_fetch] UI loop gone, dropping page {page}");
            }
        });
    }

    log::info!("[page_fetch] request channel closed, shutting down");
    Ok(())
}
