//! YouTube embed URL derivation.

use url::Url;

use super::{EmbedOptions, query_value, token_after};

/// Build the embeddable URL for a YouTube watch/short/playlist URL.
/// Playlists embed as a `videoseries` frame keyed by the `list`
/// parameter; single videos embed by video ID with playback flags.
pub(crate) fn to_embed(url: &str, options: EmbedOptions) -> Option<String> {
    if url.contains("playlist") || url.contains("list=") {
        if let Some(list_id) = query_value(url, "list") {
            return Some(format!(
                "https://www.youtube.com/embed/videoseries?list={list_id}"
            ));
        }
    }
    let id = extract_video_id(url)?;
    Some(format!(
        "https://www.youtube.com/embed/{id}?rel=0&modestbranding=1&playsinline=1&autoplay={}&mute={}",
        options.autoplay as u8, options.mute as u8
    ))
}

/// Extract the video ID from a `youtube.com/watch?v=` or `youtu.be/`
/// URL. Partial URLs without a scheme fall back to substring scanning.
pub fn extract_video_id(url: &str) -> Option<String> {
    if let Ok(parsed) = Url::parse(url)
        && let Some(host) = parsed.host_str()
    {
        if host.contains("youtu.be") {
            let id = parsed.path().trim_start_matches('/');
            let id = id.split('/').next().unwrap_or(id);
            if !id.is_empty() {
                return Some(id.to_string());
            }
        }
        if host.contains("youtube.com")
            && let Some(id) = query_value(url, "v")
        {
            return Some(id);
        }
    }
    token_after(url, "youtube.com/watch?v=").or_else(|| token_after(url, "youtu.be/"))
}
