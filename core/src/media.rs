//! Media classification and embed-URL normalization.
//!
//! A gallery record is just a URL plus an optional explicit type hint.
//! [`classify`] turns that into a [`MediaKind`], and [`embed`] derives a
//! provider-specific embeddable URL for the kinds that support one.
//! Both are pure functions: they never fail, never touch the network,
//! and the same record always yields the same result.

mod google;
mod linkedin;
mod youtube;

#[cfg(test)]
mod tests;

pub use google::{DriveUrls, drive_urls};
pub use linkedin::extract_urn;
pub use youtube::extract_video_id;

use url::Url;

use crate::content::MediaRecord;

const IMAGE_EXTENSIONS: [&str; 6] = [".png", ".jpg", ".jpeg", ".gif", ".webp", ".svg"];
const VIDEO_EXTENSIONS: [&str; 4] = [".mp4", ".webm", ".ogv", ".mov"];

/// The classification assigned to a media record. Exactly one kind per
/// record; `Link` is the universal fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// Direct image URL or local image path
    Image,
    /// Direct video URL or local video path
    Video,
    /// YouTube video or playlist
    YouTube,
    /// Google Drive file
    GDrive,
    /// OneDrive file
    OneDrive,
    /// Google Slides deck
    Slides,
    /// LinkedIn post
    LinkedIn,
    /// Anything else: rendered as a link-out card
    Link,
}

impl MediaKind {
    /// Kinds that can only be shown through a provider iframe. When the
    /// embed URL for one of these cannot be derived, the renderer must
    /// fall back to an "open original" affordance.
    pub fn requires_embed(self) -> bool {
        matches!(
            self,
            MediaKind::YouTube
                | MediaKind::GDrive
                | MediaKind::OneDrive
                | MediaKind::Slides
                | MediaKind::LinkedIn
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            MediaKind::Image => "Image",
            MediaKind::Video => "Video",
            MediaKind::YouTube => "YouTube",
            MediaKind::GDrive => "Google Drive",
            MediaKind::OneDrive => "OneDrive",
            MediaKind::Slides => "Google Slides",
            MediaKind::LinkedIn => "LinkedIn",
            MediaKind::Link => "Link",
        }
    }
}

/// Playback flags passed through to embed URLs that support them.
/// Inline gallery tiles stay muted; the expanded modal autoplays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbedOptions {
    pub autoplay: bool,
    pub mute: bool,
}

impl EmbedOptions {
    /// Options for an inline gallery tile: muted, no autoplay.
    pub fn inline() -> Self {
        Self {
            autoplay: false,
            mute: true,
        }
    }

    /// Options for the expanded modal: autoplay, unmuted.
    pub fn expanded() -> Self {
        Self {
            autoplay: true,
            mute: false,
        }
    }
}

impl Default for EmbedOptions {
    fn default() -> Self {
        Self::inline()
    }
}

/// Outcome of embed derivation. `embed_url` is `None` when the
/// provider's convention required an ID that could not be extracted;
/// the kind is still reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedResult {
    pub kind: MediaKind,
    pub embed_url: Option<String>,
}

/// Classify a media record. Explicit type hints always win over URL
/// sniffing; unrecognized hints fall through to sniffing. Total: any
/// string input, including garbage, resolves to some kind.
pub fn classify(record: &MediaRecord) -> MediaKind {
    if let Some(hint) = &record.kind_hint
        && let Some(kind) = map_explicit_hint(hint, &record.url)
    {
        return kind;
    }
    sniff_url(&record.url)
}

/// Derive the embeddable URL for a record already classified as `kind`.
pub fn embed(record: &MediaRecord, kind: MediaKind, options: EmbedOptions) -> EmbedResult {
    let url = record.url.as_str();
    let embed_url = match kind {
        MediaKind::YouTube => youtube::to_embed(url, options),
        MediaKind::GDrive => google::drive_embed(url),
        MediaKind::Slides => google::slides_embed(url),
        MediaKind::LinkedIn => linkedin::to_embed(url),
        MediaKind::OneDrive => onedrive_embed(url),
        MediaKind::Image | MediaKind::Video => Some(normalize_url(url)),
        MediaKind::Link => None,
    };
    EmbedResult { kind, embed_url }
}

/// Classify and derive the embed URL in one step.
pub fn resolve(record: &MediaRecord, options: EmbedOptions) -> EmbedResult {
    embed(record, classify(record), options)
}

fn map_explicit_hint(hint: &str, url: &str) -> Option<MediaKind> {
    match hint.to_lowercase().as_str() {
        "google_slides" | "slides" => Some(MediaKind::Slides),
        "linkedin_post" | "linkedin" => Some(MediaKind::LinkedIn),
        "google_drive_video" | "google_drive" => Some(MediaKind::GDrive),
        "youtube" | "yt" => Some(MediaKind::YouTube),
        "image" => Some(MediaKind::Image),
        "video" => Some(MediaKind::Video),
        "link" => Some(MediaKind::Link),
        // A local path is still either an image, a video, or nothing
        // we can preview; the extension decides.
        "local_path" | "local" => {
            Some(sniff_extension(&url.to_lowercase()).unwrap_or(MediaKind::Link))
        }
        _ => None,
    }
}

fn sniff_url(url: &str) -> MediaKind {
    let lower = url.to_lowercase();
    if lower.contains("youtube.com/watch?v=")
        || lower.contains("youtu.be/")
        || lower.contains("youtube.com/playlist")
    {
        return MediaKind::YouTube;
    }
    if lower.contains("drive.google.com") {
        return MediaKind::GDrive;
    }
    if lower.contains("docs.google.com/presentation") {
        return MediaKind::Slides;
    }
    if lower.contains("onedrive.live.com") || lower.contains("1drv.ms") {
        return MediaKind::OneDrive;
    }
    if lower.contains("linkedin.com") {
        return MediaKind::LinkedIn;
    }
    // Prefer the parsed path so a query string cannot fake an extension;
    // unparseable inputs (relative paths included) fall back to the raw
    // lower-cased string.
    let path = Url::parse(url)
        .map(|u| u.path().to_lowercase())
        .unwrap_or_else(|_| lower.clone());
    if VIDEO_EXTENSIONS
        .iter()
        .any(|ext| path.ends_with(ext) || lower.contains(ext))
    {
        return MediaKind::Video;
    }
    if IMAGE_EXTENSIONS
        .iter()
        .any(|ext| path.ends_with(ext) || lower.contains(ext))
    {
        return MediaKind::Image;
    }
    MediaKind::Link
}

fn sniff_extension(lower: &str) -> Option<MediaKind> {
    if IMAGE_EXTENSIONS.iter().any(|ext| lower.contains(ext)) {
        Some(MediaKind::Image)
    } else if VIDEO_EXTENSIONS.iter().any(|ext| lower.contains(ext)) {
        Some(MediaKind::Video)
    } else {
        None
    }
}

fn onedrive_embed(url: &str) -> Option<String> {
    // OneDrive share links only embed when the URL already carries the
    // embed form; the view.aspx form has a direct substitution.
    if url.contains("embed") {
        Some(url.to_string())
    } else if url.contains("view.aspx") {
        Some(url.replace("view.aspx", "embed"))
    } else {
        None
    }
}

/// Absolute http(s) URLs pass through; anything else is treated as a
/// site-relative path and anchored at the site root.
pub fn normalize_url(url: &str) -> String {
    let lower = url.to_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        url.to_string()
    } else if url.starts_with('/') {
        url.to_string()
    } else {
        format!("/{url}")
    }
}

/// Data for the link-out card shown for the `Link` fallback kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkCard {
    /// Host name with a leading `www.` stripped, or the raw input when
    /// the URL does not parse.
    pub domain: String,
    pub favicon_url: Option<String>,
}

/// Derive the link-out card for a URL. Never fails: an unparseable URL
/// degrades to the raw string with no favicon.
pub fn link_card(url: &str) -> LinkCard {
    match Url::parse(url) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) if !host.is_empty() => {
                let domain = host.strip_prefix("www.").unwrap_or(host).to_string();
                let favicon_url = Some(format!("https://icons.duckduckgo.com/ip3/{domain}.ico"));
                LinkCard {
                    domain,
                    favicon_url,
                }
            }
            _ => LinkCard {
                domain: url.to_string(),
                favicon_url: None,
            },
        },
        Err(_) => LinkCard {
            domain: url.to_string(),
            favicon_url: None,
        },
    }
}

/// Substring-scan helper shared by the provider modules: the token
/// following `marker`, terminated by a URL delimiter or end of string.
pub(crate) fn token_after(haystack: &str, marker: &str) -> Option<String> {
    let pos = haystack.find(marker)?;
    let rest = &haystack[pos + marker.len()..];
    let end = rest.find(['/', '?', '&', '#']).unwrap_or(rest.len());
    let token = &rest[..end];
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

/// Value of a query parameter, via proper URL parsing when possible
/// with a raw-string scan as fallback for partial URLs.
pub(crate) fn query_value(url: &str, key: &str) -> Option<String> {
    if let Ok(parsed) = Url::parse(url)
        && let Some((_, value)) = parsed.query_pairs().find(|(k, _)| k == key)
        && !value.is_empty()
    {
        return Some(value.into_owned());
    }
    token_after(url, &format!("?{key}="))
        .or_else(|| token_after(url, &format!("&{key}=")))
}
