//! Gallery modal state machine.
//!
//! One modal session at a time: `Closed` until [`GalleryModal::open`] is
//! called with an ordered gallery, then `Open` with a current index
//! until closed. Navigation wraps cyclically and is a no-op on galleries
//! of one item or fewer. The currently displayed item's kind and embed
//! URL are re-derived from the classifier on every index change.

use log::debug;

use crate::content::MediaRecord;
use crate::media::{self, EmbedOptions, MediaKind};

#[derive(Debug, Clone)]
struct Session {
    gallery: Vec<MediaRecord>,
    index: usize,
}

/// Modal over an ordered gallery of media records.
#[derive(Debug, Clone, Default)]
pub struct GalleryModal {
    session: Option<Session>,
}

/// Read-only snapshot of the open modal for the rendering layer.
#[derive(Debug, Clone)]
pub struct ModalView<'a> {
    pub record: &'a MediaRecord,
    pub kind: MediaKind,
    pub embed_url: Option<String>,
    /// True when the kind can only render through an embed and no embed
    /// URL could be derived; the renderer must offer the original URL
    /// instead of a broken frame.
    pub needs_fallback: bool,
    /// Zero-based position of the current item.
    pub index: usize,
    pub len: usize,
    /// Whether navigation affordances should be offered at all.
    pub has_multiple: bool,
}

impl GalleryModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Open a session over `gallery`, replacing any prior session.
    /// Opening with an empty gallery leaves the modal closed; an
    /// out-of-range start index falls back to the first item.
    pub fn open(&mut self, gallery: Vec<MediaRecord>, start_index: usize) {
        if gallery.is_empty() {
            debug!("gallery modal: ignoring open with empty gallery");
            self.session = None;
            return;
        }
        let index = if start_index < gallery.len() {
            start_index
        } else {
            0
        };
        debug!(
            "gallery modal: open at {} of {} item(s)",
            index + 1,
            gallery.len()
        );
        self.session = Some(Session { gallery, index });
    }

    /// Close the session. Idempotent.
    pub fn close(&mut self) {
        self.session = None;
    }

    /// Step one item backward (`-1`) or forward (`+1`), wrapping at both
    /// ends. No-op unless the modal is open with more than one item.
    pub fn navigate(&mut self, direction: i32) {
        let Some(session) = &mut self.session else {
            return;
        };
        let len = session.gallery.len();
        if len <= 1 {
            return;
        }
        let len = len as i32;
        session.index = (session.index as i32 + direction).rem_euclid(len) as usize;
        debug!("gallery modal: moved to {} of {}", session.index + 1, len);
    }

    /// Snapshot of the current item with its kind and embed URL derived
    /// under `options`, or `None` while closed.
    pub fn view(&self, options: EmbedOptions) -> Option<ModalView<'_>> {
        let session = self.session.as_ref()?;
        let record = &session.gallery[session.index];
        let result = media::resolve(record, options);
        let needs_fallback = result.kind.requires_embed() && result.embed_url.is_none();
        Some(ModalView {
            record,
            kind: result.kind,
            embed_url: result.embed_url,
            needs_fallback,
            index: session.index,
            len: session.gallery.len(),
            has_multiple: session.gallery.len() > 1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery() -> Vec<MediaRecord> {
        vec![
            MediaRecord::new("/media/one.png"),
            MediaRecord::new("https://youtu.be/abc123"),
            MediaRecord::new("/media/three.jpg"),
        ]
    }

    #[test]
    fn test_starts_closed() {
        let modal = GalleryModal::new();
        assert!(!modal.is_open());
        assert!(modal.view(EmbedOptions::expanded()).is_none());
    }

    #[test]
    fn test_navigate_wraps_backward_from_first() {
        let mut modal = GalleryModal::new();
        modal.open(gallery(), 0);
        modal.navigate(-1);
        assert_eq!(modal.view(EmbedOptions::expanded()).unwrap().index, 2);
    }

    #[test]
    fn test_navigate_wraps_forward_from_last() {
        let mut modal = GalleryModal::new();
        modal.open(gallery(), 2);
        modal.navigate(1);
        assert_eq!(modal.view(EmbedOptions::expanded()).unwrap().index, 0);
    }

    #[test]
    fn test_navigate_single_item_is_noop() {
        let mut modal = GalleryModal::new();
        modal.open(vec![MediaRecord::new("/media/one.png")], 0);
        modal.navigate(1);
        modal.navigate(-1);
        let view = modal.view(EmbedOptions::expanded()).unwrap();
        assert_eq!(view.index, 0);
        assert!(!view.has_multiple);
    }

    #[test]
    fn test_open_with_empty_gallery_stays_closed() {
        let mut modal = GalleryModal::new();
        modal.open(Vec::new(), 0);
        assert!(!modal.is_open());
        modal.navigate(1); // must not panic
    }

    #[test]
    fn test_out_of_range_start_index_falls_back_to_first() {
        let mut modal = GalleryModal::new();
        modal.open(gallery(), 9);
        assert_eq!(modal.view(EmbedOptions::expanded()).unwrap().index, 0);
    }

    #[test]
    fn test_open_replaces_prior_session() {
        let mut modal = GalleryModal::new();
        modal.open(gallery(), 2);
        modal.open(vec![MediaRecord::new("/media/solo.png")], 0);
        let view = modal.view(EmbedOptions::expanded()).unwrap();
        assert_eq!(view.len, 1);
        assert_eq!(view.index, 0);
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut modal = GalleryModal::new();
        modal.close();
        modal.open(gallery(), 1);
        modal.close();
        modal.close();
        assert!(!modal.is_open());
    }

    #[test]
    fn test_view_rederives_kind_on_navigation() {
        let mut modal = GalleryModal::new();
        modal.open(gallery(), 0);
        assert_eq!(
            modal.view(EmbedOptions::expanded()).unwrap().kind,
            MediaKind::Image
        );
        modal.navigate(1);
        let view = modal.view(EmbedOptions::expanded()).unwrap();
        assert_eq!(view.kind, MediaKind::YouTube);
        assert!(view.embed_url.unwrap().contains("/embed/abc123"));
    }

    #[test]
    fn test_view_counter_fields() {
        let mut modal = GalleryModal::new();
        modal.open(gallery(), 1);
        let view = modal.view(EmbedOptions::expanded()).unwrap();
        assert_eq!((view.index, view.len), (1, 3));
        assert!(view.has_multiple);
    }

    #[test]
    fn test_unextractable_embed_sets_fallback_flag() {
        let mut modal = GalleryModal::new();
        modal.open(
            vec![MediaRecord::new("https://drive.google.com/drive/folders/shared")],
            0,
        );
        let view = modal.view(EmbedOptions::expanded()).unwrap();
        assert_eq!(view.kind, MediaKind::GDrive);
        assert_eq!(view.embed_url, None);
        assert!(view.needs_fallback);
    }

    #[test]
    fn test_image_never_needs_fallback() {
        let mut modal = GalleryModal::new();
        modal.open(vec![MediaRecord::new("media/one.png")], 0);
        let view = modal.view(EmbedOptions::expanded()).unwrap();
        assert_eq!(view.embed_url.as_deref(), Some("/media/one.png"));
        assert!(!view.needs_fallback);
    }
}
