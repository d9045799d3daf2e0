use serde::{Deserialize, Serialize};

/// One character as served by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    #[serde(rename = "_id")]
    pub id: u64,
    pub name: String,
    #[serde(rename = "imageUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl CharacterRecord {
    pub fn new(id: u64, name: impl Into<String>, image_url: Option<&str>) -> Self {
        Self {
            id,
            name: name.into(),
            image_url: image_url.map(str::to_string),
        }
    }
}

/// Response envelope for `GET /characters?page=N`.
///
/// Only `data` is consumed; counts and links are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogPage {
    #[serde(default)]
    pub data: Vec<CharacterRecord>,
}

/// One dispatched page fetch.
///
/// `seq` grows with every dispatch, so two requests for the same page are
/// still told apart when their results come back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub seq: u64,
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Records for `request` arrived from the catalog.
    PageLoaded { request: PageRequest, characters: Vec<CharacterRecord> },
    /// Fetching `request` failed; `error` is already formatted for display.
    PageFailed { request: PageRequest, error: String },
    Quit,
}
