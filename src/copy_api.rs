//! "Press `c` to copy" for the selected card.
//!
//! Decides *what* to copy and hands the clipboard write to
//! `platform::copy_to_clipboard`.

use crate::platform;
use crate::util_text::normalize_image_url;
use crate::App;

/// Display-normalised image URL of the selected card.
///
/// Returns `None` when the grid is empty.
pub fn payload_for(app: &App) -> Option<String> {
    let character = app.selected_character()?;
    Some(normalize_image_url(character.image_url.as_deref()).into_owned())
}

/// Copy the selected card's image URL. Returns false when nothing was copied.
pub fn copy_current(app: &App) -> bool {
    match payload_for(app) {
        Some(text) => platform::copy_to_clipboard(&text),
        None => false,
    }
}
