//! Application constants
//!
//! Centralized constants for grid shape, catalog defaults, UI dimensions and
//! user-facing strings.

/// Catalog defaults
pub mod catalog {
    /// Public catalog used when no base URL is configured
    pub const DEFAULT_BASE_URL: &str = "https://api.disneyapi.dev";

    /// Request timeout when none is configured (milliseconds)
    pub const DEFAULT_TIMEOUT_MS: u64 = 8000;

    /// Shown for records whose image reference is missing or blank
    pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/300x300?text=No+Image";

    /// Path segment the catalog appends to image URLs for wiki revisions.
    /// Everything from here on is dropped for display.
    pub const REVISION_MARKER: &str = "/revision";
}

/// Grid layout constants
pub mod grid {
    /// Cards per row
    pub const ROW_WIDTH: usize = 5;
}

/// UI layout and display constants
pub mod ui {
    /// Minimum terminal width in columns for usable display
    pub const MIN_WIDTH: u16 = 60;

    /// Minimum terminal height in rows for usable display
    pub const MIN_HEIGHT: u16 = 15;

    /// Height of one card row in the grid (borders included)
    pub const CARD_HEIGHT: u16 = 5;

    /// Title shown in the header
    pub const TITLE: &str = "The World of Disney";
}

/// Application state and behavior constants
pub mod app {
    /// Duration to show toast notifications (seconds)
    pub const TOAST_DURATION_SECS: u64 = 2;
}

/// User-facing message strings
pub mod messages {
    /// Card label for a character that is not a favourite
    pub const ADD_FAVOURITE: &str = "Add to Favourites";

    /// Card label for a favourite character
    pub const FAVOURITED: &str = "Favourited";

    /// Grid body when the current page has no records
    pub const EMPTY_PAGE: &str = "No characters on this page";

    /// Toast message when the image URL was copied
    pub const COPY_IMAGE: &str = "Copied image URL";

    /// Toast message when clipboard operation fails
    pub const COPY_FAILED: &str = "Copy failed";
}
