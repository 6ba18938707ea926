//! Google Drive and Google Slides embed URL derivation.

use url::Url;

use super::{query_value, token_after};

const SLIDES_PARAMS: &str = "start=true&loop=true&delayms=4000";

/// Preview URL for a Drive file, from either the `/file/d/<id>/` path
/// form or an `id=` query parameter.
pub(crate) fn drive_embed(url: &str) -> Option<String> {
    let id = token_after(url, "/file/d/").or_else(|| query_value(url, "id"))?;
    Some(format!("https://drive.google.com/file/d/{id}/preview"))
}

/// View and download URLs derived from a Drive share link. Used for the
/// résumé split button: view in one tab, direct download in the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriveUrls {
    pub file_id: String,
    pub view_url: String,
    pub download_url: String,
}

/// Recognize any of the common Drive URL shapes (`/file/d/<id>`,
/// `id=<id>`, bare `/d/<id>`) and build the view/download pair.
pub fn drive_urls(url: &str) -> Option<DriveUrls> {
    let file_id = token_after(url, "/file/d/")
        .or_else(|| query_value(url, "id"))
        .or_else(|| token_after(url, "/d/"))?;
    Some(DriveUrls {
        view_url: format!("https://drive.google.com/file/d/{file_id}/view"),
        download_url: format!("https://drive.google.com/uc?export=download&id={file_id}"),
        file_id,
    })
}

/// Embed URL for a Slides deck with autoplay/loop parameters. Handles
/// already-embedded URLs, published decks (`/presentation/d/e/<id>`),
/// and normal decks (`/presentation/d/<id>`), in that order.
pub(crate) fn slides_embed(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let path = parsed.path();
    if path.contains("/embed") {
        let sep = if url.contains('?') { '&' } else { '?' };
        return Some(format!("{url}{sep}{SLIDES_PARAMS}"));
    }
    // The published form must be checked first: its path also matches
    // the plain /presentation/d/ marker.
    if let Some(id) = token_after(path, "/presentation/d/e/") {
        return Some(format!(
            "https://docs.google.com/presentation/d/e/{id}/embed?{SLIDES_PARAMS}"
        ));
    }
    let id = token_after(path, "/presentation/d/")?;
    Some(format!(
        "https://docs.google.com/presentation/d/{id}/embed?{SLIDES_PARAMS}"
    ))
}
