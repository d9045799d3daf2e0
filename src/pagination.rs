//! Page-driven fetching.
//!
//! `Pagination` owns the current page and the records shown for it. Every page
//! change sends exactly one [`PageRequest`] down the fetch channel, tagged with
//! the new page and a fresh sequence number. Results come back through
//! [`Pagination::apply`], which only accepts the most recent request; anything
//! older, including an earlier fetch of the same page, is dropped.

use tokio::sync::mpsc::UnboundedSender;

use crate::types::{CharacterRecord, PageRequest};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Records replaced the current list.
    Applied { count: usize },
    /// Result was for a request that has since been superseded.
    Stale,
    /// Fetch for the current page failed; the list was kept.
    Failed,
}

pub struct Pagination {
    current_page: u32,
    characters: Vec<CharacterRecord>,
    pending: Option<PageRequest>,
    next_seq: u64,
    last_error: Option<String>,
    mounted: bool,
    fetch_tx: Option<UnboundedSender<PageRequest>>,
}

impl Pagination {
    /// `start_page` below 1 is raised to 1.
    pub fn new(start_page: u32, fetch_tx: Option<UnboundedSender<PageRequest>>) -> Self {
        Self {
            current_page: start_page.max(1),
            characters: Vec::new(),
            pending: None,
            next_seq: 1,
            last_error: None,
            mounted: false,
            fetch_tx,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn characters(&self) -> &[CharacterRecord] {
        &self.characters
    }

    /// Page still awaiting its newest request.
    pub fn loading(&self) -> Option<u32> {
        self.pending.map(|r| r.page)
    }

    /// The only request whose result will be applied.
    pub fn pending_request(&self) -> Option<PageRequest> {
        self.pending
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Issue the fetch for the starting page. Only the first call does anything.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.request(self.current_page);
    }

    /// Returns false (and sends nothing) when the page counter is exhausted.
    pub fn next_page(&mut self) -> bool {
        let Some(next) = self.current_page.checked_add(1) else {
            log::warn!("[pagination] already on the last addressable page {}", self.current_page);
            return false;
        };
        self.current_page = next;
        self.request(next);
        true
    }

    /// Returns false (and sends nothing) when already on page 1.
    pub fn prev_page(&mut self) -> bool {
        if self.current_page <= 1 {
            return false;
        }
        self.current_page -= 1;
        self.request(self.current_page);
        true
    }

    /// Merge the result of `request`.
    pub fn apply(
        &mut self,
        request: PageRequest,
        result: Result<Vec<CharacterRecord>, String>,
    ) -> ApplyOutcome {
        let page = request.page;
        if self.pending != Some(request) {
            log::debug!(
                "[pagination] dropping stale result #{} for page {page} (current {}, waiting on {:?})",
                request.seq,
                self.current_page,
                self.pending.map(|r| r.seq)
            );
            return ApplyOutcome::Stale;
        }
        self.pending = None;
        match result {
            Ok(characters) => {
                let count = characters.len();
                log::info!("[pagination] page {page}: {count} characters");
                self.characters = characters;
                self.last_error = None;
                ApplyOutcome::Applied { count }
            }
            Err(e) => {
                log::warn!("[pagination] page {page} failed, keeping previous list: {e}");
                self.last_error = Some(e);
                ApplyOutcome::Failed
            }
        }
    }

    fn request(&mut self, page: u32) {
        let request = PageRequest {
            page,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.pending = Some(request);
        log::debug!("[pagination] requesting page {page} (#{})", request.seq);
        if let Some(tx) = &self.fetch_tx {
            if tx.send(request).is_err() {
                log::error!("[pagination] fetch task is gone, page {page} not requested");
            }
        }
    }
}
