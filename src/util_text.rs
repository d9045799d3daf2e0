use std::borrow::Cow;

use crate::constants::catalog::{PLACEHOLDER_IMAGE_URL, REVISION_MARKER};

/// Display form of a record's image reference.
///
/// Missing or blank references become the placeholder; anything from the first
/// `/revision` segment onward is cut off.
/// Examples:
/// - `None` -> placeholder
/// - `".../Profile_-_Abu.png/revision/latest?cb=2019"` -> `".../Profile_-_Abu.png"`
pub fn normalize_image_url(raw: Option<&str>) -> Cow<'_, str> {
    let Some(url) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Cow::Borrowed(PLACEHOLDER_IMAGE_URL);
    };
    match url.find(REVISION_MARKER) {
        Some(0) => Cow::Borrowed(PLACEHOLDER_IMAGE_URL),
        Some(idx) => Cow::Borrowed(&url[..idx]),
        None => Cow::Borrowed(url),
    }
}

/// Shorten `s` to at most `max` characters, ending with `…` when cut.
pub fn ellipsize(s: &str, max: usize) -> Cow<'_, str> {
    if max == 0 {
        return Cow::Borrowed("");
    }
    if s.chars().count() <= max {
        return Cow::Borrowed(s);
    }
    let mut out: String = s.chars().take(max - 1).collect();
    out.push('…');
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revision_suffix_is_trimmed() {
        let raw = "https://static.wikia.nocookie.net/disney/images/image/revision/latest";
        assert_eq!(
            normalize_image_url(Some(raw)),
            "https://static.wikia.nocookie.net/disney/images/image"
        );
    }

    #[test]
    fn trims_at_first_marker_only() {
        let raw = "https://x/a.png/revision/latest/revision/2";
        assert_eq!(normalize_image_url(Some(raw)), "https://x/a.png");
    }

    #[test]
    fn plain_url_is_untouched() {
        let raw = "https://static.wikia.nocookie.net/disney/images/6/61/Olu_main.png";
        assert_eq!(normalize_image_url(Some(raw)), raw);
    }

    #[test]
    fn missing_blank_or_bare_marker_uses_placeholder() {
        assert_eq!(normalize_image_url(None), PLACEHOLDER_IMAGE_URL);
        assert_eq!(normalize_image_url(Some("   ")), PLACEHOLDER_IMAGE_URL);
        assert_eq!(normalize_image_url(Some("/revision/latest")), PLACEHOLDER_IMAGE_URL);
    }

    #[test]
    fn ellipsize_respects_char_boundaries() {
        assert_eq!(ellipsize("Abu", 10), "Abu");
        assert_eq!(ellipsize("'Olu Mel", 5), "'Olu…");
        assert_eq!(ellipsize("Ériqué", 3), "Ér…");
        assert_eq!(ellipsize("anything", 0), "");
    }
}
