//! LinkedIn post embed URL derivation.
//!
//! LinkedIn embeds are keyed by a URN. Post URLs carry the underlying
//! ID in one of several shapes; the extraction order matters because a
//! share URL can contain more than one of the markers.

pub(crate) fn to_embed(url: &str) -> Option<String> {
    let urn = extract_urn(url)?;
    Some(format!("https://www.linkedin.com/embed/feed/update/{urn}"))
}

/// Extract the post URN from a LinkedIn URL: `ugcPost-<digits>`,
/// `activity-<digits>`, an `/activity/<digits>` path segment, or a raw
/// `urn:li:` fragment, in that order.
pub fn extract_urn(url: &str) -> Option<String> {
    if let Some(id) = digits_after(url, "ugcPost-") {
        return Some(format!("urn:li:ugcPost:{id}"));
    }
    if let Some(id) = digits_after(url, "activity-") {
        return Some(format!("urn:li:activity:{id}"));
    }
    if let Some(id) = digits_after(url, "/activity/") {
        return Some(format!("urn:li:activity:{id}"));
    }
    if let Some(pos) = url.find("urn:li:") {
        let rest = &url[pos..];
        let end = rest.find(['?', '&', '#', ' ']).unwrap_or(rest.len());
        return Some(rest[..end].to_string());
    }
    None
}

fn digits_after(url: &str, marker: &str) -> Option<String> {
    let pos = url.find(marker)?;
    let digits: String = url[pos + marker.len()..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() { None } else { Some(digits) }
}
