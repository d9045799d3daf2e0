use std::time::{Duration, Instant};

use tokio::sync::mpsc::UnboundedSender;

use crate::constants::{app::TOAST_DURATION_SECS, grid::ROW_WIDTH};
use crate::favorites::Favorites;
use crate::pagination::{ApplyOutcome, Pagination};
use crate::theme::{ColorScheme, Theme};
use crate::types::{AppEvent, CharacterRecord, PageRequest};
use crate::ui_core::{chunk_rows, GridCursor};

/// Root of the gallery state.
///
/// Owns pagination and favorites; the renderer and key handler only go through
/// the methods here.
pub struct App {
    quit: bool,
    pager: Pagination,
    favorites: Favorites,
    cursor: GridCursor,

    fps: u32,
    fps_choices: Vec<u32>,
    theme: Theme,

    toast_message: Option<(String, bool, Instant)>, // (message, is_error, shown at)
    spinner: usize,
}

impl App {
    pub fn new(
        start_page: u32,
        favorites: Favorites,
        fps: u32,
        fps_choices: Vec<u32>,
        theme: Theme,
        fetch_tx: Option<UnboundedSender<PageRequest>>,
    ) -> Self {
        Self {
            quit: false,
            pager: Pagination::new(start_page, fetch_tx),
            favorites,
            cursor: GridCursor::default(),
            fps,
            fps_choices,
            theme,
            toast_message: None,
            spinner: 0,
        }
    }

    // ----- getters -----
    pub fn fps(&self) -> u32 {
        self.fps
    }
    pub fn quit_flag(&self) -> bool {
        self.quit
    }
    pub fn current_page(&self) -> u32 {
        self.pager.current_page()
    }
    pub fn characters(&self) -> &[CharacterRecord] {
        self.pager.characters()
    }
    pub fn loading(&self) -> Option<u32> {
        self.pager.loading()
    }
    pub fn pending_request(&self) -> Option<PageRequest> {
        self.pager.pending_request()
    }
    pub fn last_error(&self) -> Option<&str> {
        self.pager.last_error()
    }
    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }
    pub fn cursor(&self) -> GridCursor {
        self.cursor
    }
    pub fn theme(&self) -> ColorScheme {
        self.theme.colors()
    }

    /// Current characters split into grid rows.
    pub fn rows(&self) -> Vec<&[CharacterRecord]> {
        chunk_rows(self.pager.characters(), ROW_WIDTH)
    }

    pub fn selected_character(&self) -> Option<&CharacterRecord> {
        self.pager.characters().get(self.cursor.index())
    }

    // ----- pagination -----
    pub fn mount(&mut self) {
        self.pager.mount();
    }

    pub fn next_page(&mut self) {
        self.pager.next_page();
    }

    pub fn prev_page(&mut self) {
        self.pager.prev_page();
    }

    // ----- favorites -----
    pub fn toggle_favorite(&mut self, id: u64) -> bool {
        self.favorites.toggle(id)
    }

    /// Toggle the card under the cursor. No-op on an empty grid.
    pub fn toggle_selected_favorite(&mut self) {
        let Some(id) = self.selected_character().map(|c| c.id) else {
            return;
        };
        self.toggle_favorite(id);
    }

    // ----- cursor -----
    pub fn left(&mut self) {
        self.cursor.left(ROW_WIDTH);
    }
    pub fn right(&mut self) {
        self.cursor.right(self.characters().len(), ROW_WIDTH);
    }
    pub fn up(&mut self) {
        self.cursor.up(ROW_WIDTH);
    }
    pub fn down(&mut self) {
        self.cursor.down(self.characters().len(), ROW_WIDTH);
    }

    // ----- events -----
    pub fn on_event(&mut self, ev: AppEvent) {
        match ev {
            AppEvent::Quit => self.quit = true,
            AppEvent::PageLoaded { request, characters } => {
                if let ApplyOutcome::Applied { .. } = self.pager.apply(request, Ok(characters)) {
                    self.cursor.reset();
                }
            }
            AppEvent::PageFailed { request, error } => {
                if self.pager.apply(request, Err(error)) == ApplyOutcome::Failed {
                    self.show_error(format!("Could not load page {}", request.page));
                }
            }
        }
        self.cursor.clamp(self.characters().len());
    }

    // ----- toast -----
    pub fn show_toast(&mut self, msg: String) {
        self.toast_message = Some((msg, false, Instant::now()));
    }

    pub fn show_error(&mut self, msg: String) {
        self.toast_message = Some((msg, true, Instant::now()));
    }

    /// Current toast if still visible, with its error flag.
    pub fn toast_message(&self) -> Option<(&str, bool)> {
        let visible_for = Duration::from_secs(TOAST_DURATION_SECS);
        self.toast_message.as_ref().and_then(|(msg, is_error, at)| {
            (at.elapsed() < visible_for).then_some((msg.as_str(), *is_error))
        })
    }

    // ----- knobs -----
    pub fn cycle_fps(&mut self) {
        if self.fps_choices.is_empty() {
            return;
        }
        let mut idx = self.fps_choices.iter().position(|&v| v == self.fps).unwrap_or(0);
        idx = (idx + 1) % self.fps_choices.len();
        self.fps = self.fps_choices[idx];
    }

    pub fn tick_spinner(&mut self) {
        self.spinner = self.spinner.wrapping_add(1);
    }

    pub fn spinner_char(&self) -> char {
        const FRAMES: [char; 4] = ['|', '/', '-', '\\'];
        FRAMES[(self.spinner / 4) % FRAMES.len()]
    }
}
